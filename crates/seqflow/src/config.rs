//! Configuration types for the seqflow pipeline.
//!
//! This module provides configuration structures that describe where the
//! sequence diagram lives, which collaborators produce and render diagrams,
//! and how each activity diagram is named. All types implement
//! [`serde::Deserialize`] and every field has a default, so an empty file is
//! a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`ProjectConfig`] - Working directory and diagram locations.
//! - [`GeneratorConfig`] - The command that refreshes the sequence diagram.
//! - [`RendererConfig`] - The command that renders activity diagrams.
//! - [`DiagramConfig`] - Output name and title overrides per [`DiagramKind`].
//!
//! # Example
//!
//! ```
//! # use seqflow::{DiagramKind, config::AppConfig};
//! let config = AppConfig::default();
//! assert_eq!(config.generator().program(), "clang-uml");
//! assert!(config.activity_path(DiagramKind::Flow).ends_with("uml/petri_flow_activity.puml"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::DiagramKind;

/// Placeholder in generator arguments replaced by the sequence diagram name.
pub const SEQUENCE_PLACEHOLDER: &str = "{sequence}";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Project locations.
    #[serde(default)]
    project: ProjectConfig,

    /// Sequence diagram generator.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Activity diagram renderer.
    #[serde(default)]
    renderer: RendererConfig,

    /// Overrides for the detailed flow diagram.
    #[serde(default)]
    flow: DiagramConfig,

    /// Overrides for the overview diagram.
    #[serde(default)]
    overview: DiagramConfig,
}

impl AppConfig {
    /// Returns the project configuration.
    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the renderer configuration.
    pub fn renderer(&self) -> &RendererConfig {
        &self.renderer
    }

    /// Returns the overrides for a diagram kind.
    pub fn diagram(&self, kind: DiagramKind) -> &DiagramConfig {
        match kind {
            DiagramKind::Flow => &self.flow,
            DiagramKind::Overview => &self.overview,
        }
    }

    /// Title written into the activity diagram of `kind`.
    pub fn title(&self, kind: DiagramKind) -> &str {
        self.diagram(kind)
            .title
            .as_deref()
            .unwrap_or(kind.default_title())
    }

    /// File stem of the activity diagram of `kind`.
    pub fn output_name(&self, kind: DiagramKind) -> &str {
        self.diagram(kind)
            .output
            .as_deref()
            .unwrap_or(kind.default_output())
    }

    /// Directory holding both the sequence and the activity diagrams.
    pub fn uml_dir(&self) -> PathBuf {
        self.project.root.join(&self.project.uml_dir)
    }

    /// Path of the sequence diagram read by the transformations.
    pub fn sequence_path(&self) -> PathBuf {
        self.uml_dir()
            .join(format!("{}.puml", self.project.sequence))
    }

    /// Path of the activity diagram written for `kind`.
    pub fn activity_path(&self, kind: DiagramKind) -> PathBuf {
        self.uml_dir()
            .join(format!("{}.puml", self.output_name(kind)))
    }

    /// Path of the rendered image of `kind` in `format`.
    pub fn rendered_path(&self, kind: DiagramKind, format: &str) -> PathBuf {
        self.activity_path(kind).with_extension(format)
    }
}

/// Working directory and diagram locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory the collaborators run in; other paths are relative to it.
    root: PathBuf,

    /// Directory of the `.puml` files, relative to `root`.
    uml_dir: PathBuf,

    /// Name of the sequence diagram produced by the generator.
    sequence: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            uml_dir: PathBuf::from("uml"),
            sequence: "petri_flow_simple".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the sequence diagram name.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

/// The external tool that refreshes the sequence diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    program: String,
    args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "clang-uml".to_string(),
            args: ["--config", "clang-uml.yml", "-n", SEQUENCE_PLACEHOLDER, "-q"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the generator executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments with [`SEQUENCE_PLACEHOLDER`] substituted.
    pub fn args_for(&self, sequence: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(SEQUENCE_PLACEHOLDER, sequence))
            .collect()
    }
}

/// The external tool that renders activity diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    program: String,
    formats: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "plantuml".to_string(),
            formats: vec!["svg".to_string(), "png".to_string()],
        }
    }
}

impl RendererConfig {
    /// Returns the renderer executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the image formats rendered, in order.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Arguments rendering `file` as `format`.
    pub fn args_for(&self, format: &str, file: &Path) -> Vec<String> {
        vec![format!("-t{format}"), file.display().to_string()]
    }
}

/// Per-diagram overrides. Unset fields fall back to the [`DiagramKind`] defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagramConfig {
    /// File stem of the generated `.puml`.
    #[serde(default)]
    output: Option<String>,

    /// Diagram title.
    #[serde(default)]
    title: Option<String>,
}

//! Seqflow - Turn clang-uml sequence diagrams into PlantUML activity diagrams.
//!
//! Two transformations are provided. [`rewrite`] translates every message,
//! branch and loop of the sequence diagram into an activity diagram, and
//! [`overview`] collapses the sequence into a handful of coarse steps.
//! [`pipeline`] wires either transformation between the external generator
//! and renderer.

pub mod config;
pub mod overview;
pub mod pipeline;
pub mod rewrite;
pub mod tool;

mod error;

pub use seqflow_core::{activity, label};

pub use error::{EXIT_FAILURE, EXIT_TOOL_NOT_FOUND, SeqflowError, Stage};

use std::fmt;

use log::{debug, info, trace};

use activity::ActivityDiagram;
use config::AppConfig;

/// The activity diagrams seqflow can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// Verbatim translation of every message and block.
    Flow,
    /// Coarse summary in a fixed order.
    Overview,
}

impl DiagramKind {
    /// Title used when the configuration sets none.
    pub fn default_title(&self) -> &'static str {
        match self {
            DiagramKind::Flow => "Petri Dish Simulation - Auto Activity (from petri_flow_simple)",
            DiagramKind::Overview => "Petri Dish Simulation",
        }
    }

    /// Output file stem used when the configuration sets none.
    pub fn default_output(&self) -> &'static str {
        match self {
            DiagramKind::Flow => "petri_flow_activity",
            DiagramKind::Overview => "petri_flow_activity_overview",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramKind::Flow => write!(f, "flow"),
            DiagramKind::Overview => write!(f, "overview"),
        }
    }
}

/// Builder turning sequence-diagram source into activity diagrams.
///
/// # Examples
///
/// ```rust
/// use seqflow::{ActivityBuilder, DiagramKind, config::AppConfig};
///
/// let source = "@startuml\nalt [ready]\nA -> B : start()\nend\n@enduml\n";
/// let builder = ActivityBuilder::new(AppConfig::default());
///
/// let flow = builder.build(DiagramKind::Flow, source);
/// assert_eq!(flow.steps().len(), 3);
///
/// // Or use default config
/// let builder = ActivityBuilder::default();
/// let overview = builder.build(DiagramKind::Overview, source);
/// assert!(overview.steps().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ActivityBuilder {
    config: AppConfig,
}

impl ActivityBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Transform sequence-diagram `source` into the activity diagram of `kind`.
    ///
    /// This never fails; lines outside the recognized vocabulary are ignored.
    pub fn build(&self, kind: DiagramKind, source: &str) -> ActivityDiagram {
        info!(kind:% = kind; "Transforming sequence diagram");

        let lines = seqflow_parser::parse(source);
        debug!(lines = lines.len(); "Sequence diagram classified");

        let title = self.config.title(kind);
        let diagram = match kind {
            DiagramKind::Flow => rewrite::sequence_to_activity(&lines, title),
            DiagramKind::Overview => overview::sequence_to_overview(&lines, title),
        };

        debug!(title = diagram.title(), steps = diagram.steps().len(); "Activity diagram built");
        trace!(diagram:?; "Activity diagram");
        diagram
    }
}

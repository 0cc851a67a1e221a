//! End-to-end pipeline: generate, transform, write, render.
//!
//! [`Pipeline::run`] refreshes the sequence diagram with the configured
//! generator, transforms it into the requested activity diagram, writes the
//! `.puml` file and renders it in every configured format. The first failure
//! aborts the run; files already written are left in place.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    ActivityBuilder, DiagramKind,
    config::AppConfig,
    error::{SeqflowError, Stage},
    tool::{CommandRunner, Invocation, SystemRunner},
};

/// Switches for the optional pipeline steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Use the existing sequence diagram instead of running the generator.
    pub skip_generate: bool,
    /// Write the activity diagram but do not render images.
    pub skip_render: bool,
}

/// Files produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    activity: PathBuf,
    rendered: Vec<PathBuf>,
}

impl PipelineReport {
    /// Returns the written activity diagram.
    pub fn activity(&self) -> &Path {
        &self.activity
    }

    /// Returns the rendered images, in render order.
    pub fn rendered(&self) -> &[PathBuf] {
        &self.rendered
    }

    /// Every produced file, activity diagram first.
    pub fn artifacts(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.activity).chain(self.rendered.iter())
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .artifacts()
            .map(|path| path.display().to_string())
            .collect();

        write!(f, "Generated ")?;
        match names.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{only}"),
            [first, second] => write!(f, "{first} and {second}"),
            [init @ .., last] => write!(f, "{}, and {last}", init.join(", ")),
        }
    }
}

/// Runs the full diagram pipeline with a [`CommandRunner`].
pub struct Pipeline<R = SystemRunner> {
    builder: ActivityBuilder,
    runner: R,
}

impl Pipeline<SystemRunner> {
    /// Create a pipeline that runs tools as child processes.
    pub fn new(config: AppConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Pipeline<R> {
    /// Create a pipeline with a custom runner.
    pub fn with_runner(config: AppConfig, runner: R) -> Self {
        Self {
            builder: ActivityBuilder::new(config),
            runner,
        }
    }

    fn config(&self) -> &AppConfig {
        self.builder.config()
    }

    /// Run the pipeline for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SeqflowError` for:
    /// - A missing or failing generator (nothing is written)
    /// - Reading the sequence diagram or writing the activity diagram
    /// - A missing or failing renderer (the activity diagram stays on disk)
    pub fn run(
        &self,
        kind: DiagramKind,
        options: PipelineOptions,
    ) -> Result<PipelineReport, SeqflowError> {
        let config = self.config();
        let root = config.project().root();

        if options.skip_generate {
            debug!("Skipping sequence diagram generation");
        } else {
            let generator = config.generator();
            let invocation = Invocation::new(
                generator.program(),
                generator.args_for(config.project().sequence()),
                root,
            );
            self.runner
                .run(&invocation)
                .map_err(|err| SeqflowError::tool(Stage::Generate, err))?;
        }

        let sequence_path = config.sequence_path();
        info!(path = sequence_path.display().to_string(); "Reading sequence diagram");
        let source = fs::read_to_string(&sequence_path)?;

        let diagram = self.builder.build(kind, &source);

        let activity = config.activity_path(kind);
        fs::create_dir_all(config.uml_dir())?;
        fs::write(&activity, diagram.to_string())?;
        info!(path = activity.display().to_string(), steps = diagram.steps().len(); "Activity diagram written");

        let mut rendered = Vec::new();
        if options.skip_render {
            debug!("Skipping rendering");
        } else {
            let renderer = config.renderer();
            for format in renderer.formats() {
                let invocation = Invocation::new(
                    renderer.program(),
                    renderer.args_for(format, &activity),
                    root,
                );
                self.runner
                    .run(&invocation)
                    .map_err(|err| SeqflowError::tool(Stage::Render, err))?;
                rendered.push(config.rendered_path(kind, format));
            }
        }

        Ok(PipelineReport { activity, rendered })
    }
}

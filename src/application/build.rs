//! Build Use Case
//!
//! Orchestrates one build run:
//! 1. Register the inline HTML plugin with the orchestrator
//! 2. Let the orchestrator emit, assemble and flush
//! 3. Summarize the run for the presentation layer

use std::path::PathBuf;

use log::info;

use super::plugin::InlineHtmlPlugin;
use crate::domain::ports::Orchestrator;
use crate::domain::value_objects::{AssemblyConfig, ContentHash, RunState};
use crate::error::{InlineError, InlineResult};

/// Summary of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Canonical path of the inline document
    pub output_path: PathBuf,
    pub content_hash: ContentHash,
    /// Global name the entry chunk was compiled under
    pub library_name: String,
    pub entry: String,
    /// Inlined stylesheets, in emission order
    pub stylesheets: Vec<String>,
    /// Every file flushed by the orchestrator, in emission order
    pub written: Vec<PathBuf>,
    pub state: RunState,
}

/// Build use case
pub struct BuildUseCase {
    config: AssemblyConfig,
}

impl BuildUseCase {
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Run the orchestrator with the inline HTML plugin attached
    pub fn execute(&self, orchestrator: &mut dyn Orchestrator) -> InlineResult<BuildReport> {
        let mut plugin = InlineHtmlPlugin::new(self.config.clone());
        let output = orchestrator.run(&mut [&mut plugin])?;

        let state = plugin.state().clone();
        let assembly = plugin.into_assembly().ok_or_else(|| {
            InlineError::assembly("the build finished without running the inline assembler")
        })?;

        let report = BuildReport {
            output_path: self.config.output_path(),
            content_hash: assembly.content_hash(),
            library_name: self.config.library_name(),
            entry: assembly.entry,
            stylesheets: assembly.stylesheets,
            written: output.written,
            state,
        };
        info!(
            "Built {} ({})",
            report.output_path.display(),
            report.content_hash.short()
        );
        Ok(report)
    }
}

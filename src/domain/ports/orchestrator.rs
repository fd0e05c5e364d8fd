//! Orchestrator port - the build pipeline and its lifecycle hooks
//!
//! The compilation pipeline is an external collaborator. This module fixes
//! the contract between it and the plugins that shape its output:
//!
//! 1. `config_resolved` - before anything is emitted; plugins adjust options
//! 2. `build_start` - emission begins, options are frozen
//! 3. `asset_file_name` - consulted once per emitted asset
//! 4. `generate_bundle` - the in-memory manifest is final but not yet flushed
//! 5. `write_bundle` - every file has been flushed to the output directory
//!
//! `build_error` is called instead of the remaining hooks once a run fails.

use std::path::{Path, PathBuf};

use crate::domain::entities::Bundle;
use crate::domain::value_objects::CssSplitMode;
use crate::error::{InlineError, InlineResult};

/// Options the orchestrator compiles with. Plugins may change them only
/// while handling `config_resolved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorOptions {
    out_dir: PathBuf,
    css_split: CssSplitMode,
    entry_file_name: Option<String>,
    library_name: Option<String>,
    emission_started: bool,
}

impl OrchestratorOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            css_split: CssSplitMode::default(),
            entry_file_name: None,
            library_name: None,
            emission_started: false,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn css_split(&self) -> CssSplitMode {
        self.css_split
    }

    /// Fixed file name for entry chunks, if a plugin requested one
    pub fn entry_file_name(&self) -> Option<&str> {
        self.entry_file_name.as_deref()
    }

    /// Global name for IIFE output, if a plugin requested one.
    ///
    /// Advisory: a compiling orchestrator uses it to name the bundle's global.
    /// Replaying a prebuilt manifest compiles nothing, so the manifest
    /// orchestrator never reads it.
    pub fn library_name(&self) -> Option<&str> {
        self.library_name.as_deref()
    }

    pub fn emission_started(&self) -> bool {
        self.emission_started
    }

    pub fn set_css_split(&mut self, mode: CssSplitMode) -> InlineResult<()> {
        self.ensure_mutable("css split mode")?;
        self.css_split = mode;
        Ok(())
    }

    pub fn set_entry_file_name(&mut self, name: impl Into<String>) -> InlineResult<()> {
        self.ensure_mutable("entry file name")?;
        self.entry_file_name = Some(name.into());
        Ok(())
    }

    pub fn set_library_name(&mut self, name: impl Into<String>) -> InlineResult<()> {
        self.ensure_mutable("library name")?;
        self.library_name = Some(name.into());
        Ok(())
    }

    /// Freeze the options; called by the orchestrator before the first emission
    pub fn begin_emission(&mut self) {
        self.emission_started = true;
    }

    fn ensure_mutable(&self, what: &str) -> InlineResult<()> {
        if self.emission_started {
            return Err(InlineError::Lifecycle {
                from: "emitting".to_string(),
                to: format!("configure {what}"),
            });
        }
        Ok(())
    }
}

/// Lifecycle hooks a plugin can observe. All hooks default to no-ops.
pub trait BuildPlugin {
    /// Plugin name, used in logs
    fn name(&self) -> &'static str;

    fn config_resolved(&mut self, _options: &mut OrchestratorOptions) -> InlineResult<()> {
        Ok(())
    }

    fn build_start(&mut self, _options: &OrchestratorOptions) -> InlineResult<()> {
        Ok(())
    }

    /// Pick the file name for an asset given the candidate names the
    /// compiler proposed. `None` leaves the decision to the next plugin or
    /// the orchestrator's default.
    fn asset_file_name(&self, _names: &[String]) -> Option<String> {
        None
    }

    /// Transform the finalized in-memory bundle before it is flushed
    fn generate_bundle(
        &mut self,
        _options: &OrchestratorOptions,
        _bundle: &mut Bundle,
    ) -> InlineResult<()> {
        Ok(())
    }

    /// Observe the bundle after every file was flushed
    fn write_bundle(&mut self, _options: &OrchestratorOptions, _bundle: &Bundle) -> InlineResult<()> {
        Ok(())
    }

    fn build_error(&mut self, _error: &InlineError) {}
}

/// Summary of a completed orchestrator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    /// Files flushed, in emission order
    pub written: Vec<PathBuf>,
}

/// A build pipeline that can be driven with plugins
pub trait Orchestrator {
    fn run(&mut self, plugins: &mut [&mut dyn BuildPlugin]) -> InlineResult<BuildOutput>;
}

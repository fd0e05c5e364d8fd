//! Inline HTML plugin
//!
//! Wires the Mode Selector, the Naming Coordinator and the Inline Assembler
//! into the orchestrator's lifecycle hooks, and tracks the run's
//! [`RunState`] as the hooks fire.

use log::{debug, warn};

use crate::domain::entities::Bundle;
use crate::domain::ports::{BuildPlugin, OrchestratorOptions};
use crate::domain::services::{Assembly, InlineAssembler, ModeSelector, NamingCoordinator};
use crate::domain::value_objects::{AssemblyConfig, RunState};
use crate::error::{InlineError, InlineResult};

/// Plugin that assembles the bundle into one inline HTML document
#[derive(Debug)]
pub struct InlineHtmlPlugin {
    config: AssemblyConfig,
    naming: NamingCoordinator,
    selector: ModeSelector,
    state: RunState,
    assembly: Option<Assembly>,
}

impl InlineHtmlPlugin {
    pub fn new(config: AssemblyConfig) -> Self {
        let naming = NamingCoordinator::new(config.base_name());
        let selector = ModeSelector::new(&config);
        Self {
            config,
            naming,
            selector,
            state: RunState::default(),
            assembly: None,
        }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The assembled document, once `generate_bundle` has succeeded
    pub fn assembly(&self) -> Option<&Assembly> {
        self.assembly.as_ref()
    }

    pub fn into_assembly(self) -> Option<Assembly> {
        self.assembly
    }

    fn advance(&mut self, next: RunState) -> InlineResult<()> {
        self.state = self.state.advance(next)?;
        debug!("Run state: {}", self.state);
        Ok(())
    }
}

impl BuildPlugin for InlineHtmlPlugin {
    fn name(&self) -> &'static str {
        "inline-html"
    }

    fn config_resolved(&mut self, options: &mut OrchestratorOptions) -> InlineResult<()> {
        self.selector.apply(options)?;
        options.set_entry_file_name(self.naming.entry_file_name())?;
        options.set_library_name(self.config.library_name())?;
        self.advance(RunState::Configured)
    }

    fn build_start(&mut self, _options: &OrchestratorOptions) -> InlineResult<()> {
        self.advance(RunState::Emitting)
    }

    fn asset_file_name(&self, names: &[String]) -> Option<String> {
        Some(self.naming.asset_file_name(names))
    }

    fn generate_bundle(
        &mut self,
        _options: &OrchestratorOptions,
        bundle: &mut Bundle,
    ) -> InlineResult<()> {
        self.advance(RunState::Assembling)?;
        let assembly = InlineAssembler::new(&self.config).emit(bundle)?;
        self.assembly = Some(assembly);
        Ok(())
    }

    fn write_bundle(&mut self, _options: &OrchestratorOptions, _bundle: &Bundle) -> InlineResult<()> {
        self.advance(RunState::Done)
    }

    fn build_error(&mut self, error: &InlineError) {
        match self.state.advance(RunState::Failed(error.to_string())) {
            Ok(state) => self.state = state,
            Err(_) => warn!("Build error after run finished: {error}"),
        }
    }
}

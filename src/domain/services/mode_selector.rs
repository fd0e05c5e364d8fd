//! Mode Selector
//!
//! Decides, before the orchestrator compiles anything, whether stylesheets
//! come out as one file or split, and configures the orchestrator to match.

use log::debug;

use crate::domain::ports::OrchestratorOptions;
use crate::domain::value_objects::{AssemblyConfig, CssSplitMode};
use crate::error::InlineResult;

/// Applies the configured CSS split policy to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelector {
    mode: CssSplitMode,
}

impl ModeSelector {
    pub fn new(config: &AssemblyConfig) -> Self {
        Self {
            mode: config.split_mode(),
        }
    }

    pub fn mode(&self) -> CssSplitMode {
        self.mode
    }

    /// Set the orchestrator's split behavior.
    ///
    /// Fails once the orchestrator has started emitting, since the stylesheet
    /// layout of already emitted artifacts can no longer change.
    pub fn apply(&self, options: &mut OrchestratorOptions) -> InlineResult<()> {
        options.set_css_split(self.mode)?;
        debug!("CSS split mode set to {}", self.mode);
        Ok(())
    }
}

//! Run state value object
//!
//! One build run moves through
//! `Idle -> Configured -> Emitting -> Assembling -> Done`, and may drop into
//! `Failed` from any non-terminal state. `Done` and `Failed` are terminal.

use crate::error::{InlineError, InlineResult};

/// Lifecycle position of a build run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    /// Mode selector applied, orchestrator options resolved
    Configured,
    /// Orchestrator is emitting chunks and assets
    Emitting,
    /// Inline assembler is running inside the finalization hook
    Assembling,
    Done,
    /// Terminal failure carrying the triggering error message
    Failed(String),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed(_))
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow
    pub fn advance(&self, next: RunState) -> InlineResult<RunState> {
        let allowed = matches!(
            (self, &next),
            (RunState::Idle, RunState::Configured)
                | (RunState::Configured, RunState::Emitting)
                | (RunState::Emitting, RunState::Assembling)
                | (RunState::Assembling, RunState::Done)
        ) || (!self.is_terminal() && matches!(next, RunState::Failed(_)));

        if allowed {
            Ok(next)
        } else {
            Err(InlineError::Lifecycle {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Configured => write!(f, "configured"),
            RunState::Emitting => write!(f, "emitting"),
            RunState::Assembling => write!(f, "assembling"),
            RunState::Done => write!(f, "done"),
            RunState::Failed(_) => write!(f, "failed"),
        }
    }
}

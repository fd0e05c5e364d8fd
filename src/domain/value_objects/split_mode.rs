//! CSS split mode value object
//!
//! - `Single`: every stylesheet the orchestrator emits is merged into one asset
//! - `Split`: each stylesheet is emitted as its own asset

use serde::{Deserialize, Serialize};

/// How stylesheet output is laid out by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CssSplitMode {
    /// One stylesheet file for the whole build
    #[default]
    Single,
    /// One stylesheet file per emitting chunk
    Split,
}

impl CssSplitMode {
    /// Map the `css_code_split` flag onto a mode
    pub fn from_flag(css_code_split: bool) -> Self {
        if css_code_split {
            CssSplitMode::Split
        } else {
            CssSplitMode::Single
        }
    }

    /// Returns true if stylesheets are emitted as separate files
    pub fn is_split(&self) -> bool {
        matches!(self, CssSplitMode::Split)
    }
}

impl std::fmt::Display for CssSplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CssSplitMode::Single => write!(f, "single"),
            CssSplitMode::Split => write!(f, "split"),
        }
    }
}

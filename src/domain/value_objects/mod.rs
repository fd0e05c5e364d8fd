//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod assembly_config;
mod hash;
mod run_state;
mod split_mode;

pub use assembly_config::{
    to_pascal_case, AssemblyConfig, DEFAULT_BASE_NAME, DEFAULT_OUTPUT_HTML_NAME, DEFAULT_OUT_DIR,
};
pub use hash::ContentHash;
pub use run_state::RunState;
pub use split_mode::CssSplitMode;

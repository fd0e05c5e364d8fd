//! Configuration module for html-inliner
//!
//! Resolution order:
//! 1. Environment variables (INLINER_*)
//! 2. Config file (`--config`, or `inliner.toml` in the working directory)
//! 3. Built-in defaults

mod loader;
mod types;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "inliner.toml";

pub use loader::{apply_overrides, parse_with_warnings, resolve, ConfigWarning};
pub use types::{AssemblySection, BuildSection, Config, OutputSection, DEFAULT_MANIFEST};

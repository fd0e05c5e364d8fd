//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    AssemblyConfig, DEFAULT_BASE_NAME, DEFAULT_OUTPUT_HTML_NAME, DEFAULT_OUT_DIR,
};
use crate::error::{InlineError, InlineResult};

use super::loader::{self, ConfigWarning};

/// Default location of the build manifest
pub const DEFAULT_MANIFEST: &str = "dist/.bundle-manifest.json";

/// Assembly configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblySection {
    #[serde(default = "default_base_name")]
    pub base_name: String,

    #[serde(default = "default_output_html_name")]
    pub output_html_name: String,

    #[serde(default)]
    pub css_code_split: bool,
}

impl Default for AssemblySection {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            output_html_name: default_output_html_name(),
            css_code_split: false,
        }
    }
}

/// Where the upstream compiler leaves its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            out_dir: default_out_dir(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Keep the entry chunk and stylesheets next to the inline document
    #[serde(default = "default_true")]
    pub retain_inputs: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            retain_inputs: true,
        }
    }
}

fn default_base_name() -> String {
    DEFAULT_BASE_NAME.to_string()
}

fn default_output_html_name() -> String {
    DEFAULT_OUTPUT_HTML_NAME.to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assembly: AssemblySection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InlineResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InlineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (INLINER_* prefix)
    pub fn with_env_overrides(self) -> InlineResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Reject settings no build could succeed with
    pub fn validate(&self, file: &Path) -> InlineResult<()> {
        let invalid = |message: String| InlineError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        if self.assembly.base_name.trim().is_empty() {
            return Err(invalid("assembly.base_name must not be empty".to_string()));
        }
        let html = &self.assembly.output_html_name;
        if html.trim().is_empty() {
            return Err(invalid(
                "assembly.output_html_name must not be empty".to_string(),
            ));
        }
        if html.contains(['/', '\\']) {
            return Err(invalid(format!(
                "assembly.output_html_name '{html}' must be a bare file name"
            )));
        }
        Ok(())
    }

    /// The immutable per-run settings handed to the domain services
    pub fn to_assembly_config(&self) -> AssemblyConfig {
        AssemblyConfig::new(
            self.assembly.base_name.clone(),
            self.assembly.output_html_name.clone(),
        )
        .with_css_splitting(self.assembly.css_code_split)
        .with_out_dir(self.build.out_dir.clone())
        .with_retain_inputs(self.output.retain_inputs)
    }
}

//! AssemblyConfig value object
//!
//! The immutable settings for one build run. Constructed once from the loaded
//! configuration and handed to the mode selector, the naming coordinator and
//! the inline assembler. Nothing reads these settings from global state.

use std::path::{Path, PathBuf};

use super::CssSplitMode;

/// Default base name for generated script and stylesheet files
pub const DEFAULT_BASE_NAME: &str = "cms-snippet";

/// Default file name of the assembled document
pub const DEFAULT_OUTPUT_HTML_NAME: &str = "inline-snippet.html";

/// Default build output directory
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Per-run assembly settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyConfig {
    base_name: String,
    output_html_name: String,
    css_splitting_enabled: bool,
    out_dir: PathBuf,
    retain_inputs: bool,
}

impl AssemblyConfig {
    /// Create a config with the given base name and output name.
    ///
    /// Splitting is disabled, the output directory is `dist` and the consumed
    /// inputs are retained.
    pub fn new(base_name: impl Into<String>, output_html_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            output_html_name: output_html_name.into(),
            css_splitting_enabled: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            retain_inputs: true,
        }
    }

    pub fn with_css_splitting(mut self, enabled: bool) -> Self {
        self.css_splitting_enabled = enabled;
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_retain_inputs(mut self, retain: bool) -> Self {
        self.retain_inputs = retain;
        self
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn output_html_name(&self) -> &str {
        &self.output_html_name
    }

    pub fn css_splitting_enabled(&self) -> bool {
        self.css_splitting_enabled
    }

    pub fn split_mode(&self) -> CssSplitMode {
        CssSplitMode::from_flag(self.css_splitting_enabled)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Whether the consumed script and stylesheets are flushed next to the document
    pub fn retain_inputs(&self) -> bool {
        self.retain_inputs
    }

    /// Canonical path of the assembled document
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.output_html_name)
    }

    /// File name given to the entry chunk
    pub fn entry_file_name(&self) -> String {
        format!("{}.js", self.base_name)
    }

    /// File name given to the (first) stylesheet
    pub fn stylesheet_file_name(&self) -> String {
        format!("{}.css", self.base_name)
    }

    /// Global name the entry chunk is exposed under in IIFE builds
    pub fn library_name(&self) -> String {
        to_pascal_case(&self.base_name)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_NAME, DEFAULT_OUTPUT_HTML_NAME)
    }
}

/// Convert a kebab-case name to PascalCase (`cms-snippet` -> `CmsSnippet`)
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

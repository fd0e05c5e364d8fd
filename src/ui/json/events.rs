//! Shared JSON event types for consistent CLI output.
//!
//! Every command reports through these types so field naming stays the
//! same across the CLI.

use std::path::Path;

use serde::Serialize;

use html_inliner::application::BuildReport;
use html_inliner::config::{Config, ConfigWarning};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Unknown configuration key.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub key: &'a str,
    pub file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> WarningEvent<'a> {
    pub fn from_config(command: &'a str, warning: &'a ConfigWarning) -> Self {
        Self {
            event: "warning",
            command,
            key: &warning.key,
            file: &warning.file,
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub output: &'a Path,
    pub content_hash: &'a str,
    pub library_name: &'a str,
    pub entry: &'a str,
    pub stylesheets: &'a [String],
    pub written: Vec<&'a Path>,
    pub state: String,
}

impl<'a> BuildEvent<'a> {
    pub fn new(report: &'a BuildReport) -> Self {
        Self {
            event: "build",
            command: "build",
            output: &report.output_path,
            content_hash: report.content_hash.as_str(),
            library_name: &report.library_name,
            entry: &report.entry,
            stylesheets: &report.stylesheets,
            written: report.written.iter().map(|p| p.as_path()).collect(),
            state: report.state.to_string(),
        }
    }
}

/// Resolved configuration, with the names a build would derive from it.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub config: &'a Config,
    pub css_split: String,
    pub entry_file_name: String,
    pub stylesheet_file_name: String,
    pub library_name: String,
    pub output_path: String,
}

impl<'a> ConfigEvent<'a> {
    pub fn new(config: &'a Config) -> Self {
        let assembly = config.to_assembly_config();
        Self {
            event: "config",
            command: "config",
            config,
            css_split: assembly.split_mode().to_string(),
            entry_file_name: assembly.entry_file_name(),
            stylesheet_file_name: assembly.stylesheet_file_name(),
            library_name: assembly.library_name(),
            output_path: assembly.output_path().display().to_string(),
        }
    }
}

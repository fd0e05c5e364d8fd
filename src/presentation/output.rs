//! Output Rendering
//!
//! Human-readable text for command results. NDJSON output lives with the
//! binary's event types.

use std::fmt::Write as _;

use crate::application::BuildReport;
use crate::config::{Config, ConfigWarning};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Render a finished build
pub fn render_build_report(report: &BuildReport, verbose: u8) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✓ Built {}", report.output_path.display());
    let _ = writeln!(out);
    let _ = writeln!(out, "  Entry:  {} ({})", report.entry, report.library_name);
    if report.stylesheets.is_empty() {
        let _ = writeln!(out, "  Styles: none");
    } else {
        let _ = writeln!(out, "  Styles: {}", report.stylesheets.join(", "));
    }
    let _ = writeln!(out, "  Hash:   {}", report.content_hash);

    if verbose > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Written ({}):", report.written.len());
        for path in &report.written {
            let _ = writeln!(out, "    → {}", path.display());
        }
    }
    out
}

/// Render the resolved configuration and what a build would derive from it
pub fn render_config(config: &Config) -> String {
    let assembly = config.to_assembly_config();
    let mut out = String::new();
    let _ = writeln!(out, "[assembly]");
    let _ = writeln!(out, "  base_name        = {}", config.assembly.base_name);
    let _ = writeln!(out, "  output_html_name = {}", config.assembly.output_html_name);
    let _ = writeln!(out, "  css_code_split   = {}", config.assembly.css_code_split);
    let _ = writeln!(out, "[build]");
    let _ = writeln!(out, "  manifest         = {}", config.build.manifest.display());
    let _ = writeln!(out, "  out_dir          = {}", config.build.out_dir.display());
    let _ = writeln!(out, "[output]");
    let _ = writeln!(out, "  retain_inputs    = {}", config.output.retain_inputs);
    let _ = writeln!(out);
    let _ = writeln!(out, "Derived:");
    let _ = writeln!(out, "  css split        = {}", assembly.split_mode());
    let _ = writeln!(out, "  entry chunk      = {}", assembly.entry_file_name());
    let _ = writeln!(out, "  stylesheet       = {}", assembly.stylesheet_file_name());
    let _ = writeln!(out, "  library name     = {}", assembly.library_name());
    let _ = writeln!(out, "  output           = {}", assembly.output_path().display());
    out
}

/// One-line description of an unknown configuration key
pub fn render_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "[!] {location}: unknown key '{}' (did you mean '{suggestion}'?)",
            warning.key
        ),
        None => format!("[!] {location}: unknown key '{}'", warning.key),
    }
}

use html_inliner::InlineError;

use super::json::{emit_event, events::ErrorEvent};

/// Stable machine-readable code for an error
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<InlineError>() {
        Some(InlineError::ConfigurationMissing { .. }) => "CONFIGURATION_MISSING",
        Some(InlineError::AssemblyFailure { .. }) => "ASSEMBLY_FAILURE",
        Some(InlineError::Io(_)) | Some(InlineError::Write { .. }) => "IO_FAILURE",
        Some(InlineError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(InlineError::InvalidEnv { .. }) => "INVALID_ENV",
        Some(InlineError::InvalidManifest { .. }) => "INVALID_MANIFEST",
        Some(InlineError::PathEscape { .. }) => "PATH_ESCAPE",
        Some(InlineError::Lifecycle { .. }) => "LIFECYCLE",
        None => "ERROR",
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    // InlineError messages already include their source
    if err.downcast_ref::<InlineError>().is_none() {
        for cause in err.chain().skip(1) {
            out.push_str(&format!("\n  caused by: {}", cause));
        }
    }
    out
}

/// Log a fatal error, and mirror it as an NDJSON event under `--json`.
///
/// Falls back to stderr when the logger filters out errors (`RUST_LOG=off`).
pub fn print_error(command: &str, err: &anyhow::Error, json: bool) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{}", format_error(err));
    } else {
        eprintln!("error: {}", format_error(err));
    }
    if json {
        let _ = emit_event(&ErrorEvent::new(command, error_code(err), err.to_string()));
    }
}

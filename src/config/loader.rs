//! Configuration loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{InlineError, InlineResult};

use super::types::Config;
use super::DEFAULT_CONFIG_FILE;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InlineResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InlineError::missing("configuration file", path),
        _ => InlineError::Io(e),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text, collecting unknown keys instead of rejecting them
pub fn parse_with_warnings(content: &str, path: &Path) -> InlineResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InlineError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for one run.
///
/// An explicitly named file must exist. Without one, `inliner.toml` in the
/// working directory is used when present, and built-in defaults otherwise.
/// Environment overrides are applied last, then the result is validated.
pub fn resolve(explicit: Option<&Path>) -> InlineResult<(Config, Vec<ConfigWarning>)> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let (config, warnings, source) = match explicit {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (config, warnings, path)
        }
        None if default_path.exists() => {
            let (config, warnings) = load_with_warnings(default_path)?;
            (config, warnings, default_path)
        }
        None => {
            debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            (Config::default(), Vec::new(), default_path)
        }
    };

    let config = with_env_overrides(config)?;
    config.validate(source)?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (INLINER_* prefix)
pub fn with_env_overrides(config: Config) -> InlineResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup; `with_env_overrides` reads the process env
pub fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> InlineResult<Config> {
    if let Some(name) = lookup("INLINER_BASE_NAME") {
        config.assembly.base_name = name;
    }

    if let Some(name) = lookup("INLINER_OUTPUT_HTML_NAME") {
        config.assembly.output_html_name = name;
    }

    if let Some(val) = lookup("INLINER_CSS_CODE_SPLIT") {
        config.assembly.css_code_split = parse_bool("INLINER_CSS_CODE_SPLIT", &val)?;
    }

    if let Some(dir) = lookup("INLINER_OUT_DIR") {
        config.build.out_dir = PathBuf::from(dir);
    }

    Ok(config)
}

/// Strict boolean: `true`, `false`, `1` or `0`, ignoring ASCII case and
/// surrounding whitespace
fn parse_bool(key: &str, value: &str) -> InlineResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(InlineError::InvalidEnv {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "assembly",
        "base_name",
        "output_html_name",
        "css_code_split",
        "build",
        "manifest",
        "out_dir",
        "output",
        "retain_inputs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

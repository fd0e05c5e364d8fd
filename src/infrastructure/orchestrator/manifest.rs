//! Build manifest format
//!
//! The upstream compiler describes its output as a JSON manifest. Array order
//! is emission order and is preserved all the way to the flush.
//!
//! ```json
//! { "output": [
//!     { "type": "chunk", "fileName": "main-4f2a.js", "isEntry": true, "code": "..." },
//!     { "type": "asset", "names": ["style.css"], "source": "..." },
//!     { "type": "asset", "names": ["logo.svg"], "sourcePath": "src/logo.svg" } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{InlineError, InlineResult};

/// Parsed build manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    #[serde(default)]
    pub output: Vec<ManifestEntry>,
}

/// One emitted output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestEntry {
    Chunk(ChunkEntry),
    Asset(AssetEntry),
}

/// A compiled script chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkEntry {
    pub file_name: String,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Path to the compiled code, relative to the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_path: Option<PathBuf>,
}

/// A non-code output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    /// Candidate names the compiler proposed
    #[serde(default)]
    pub names: Vec<String>,
    /// Source file the asset was produced from, used for `[name]`/`[extname]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Path to the asset content, relative to the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

impl BuildManifest {
    /// Parse manifest JSON; `file` is only used in error messages
    pub fn parse(content: &str, file: &Path) -> InlineResult<Self> {
        serde_json::from_str(content).map_err(|e| InlineError::InvalidManifest {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a manifest through the file system port
    pub fn load(fs: &dyn FileSystem, path: &Path) -> InlineResult<Self> {
        let content = fs.read(path).map_err(|e| match e {
            FsError::NotFound(_) => InlineError::missing("build manifest", path),
            other => InlineError::Io(other.into_io()),
        })?;
        Self::parse(&content, path)
    }
}

/// Resolve inline-or-path content for an artifact.
///
/// Exactly one of `inline` / `path` must be given. A referenced file that
/// does not exist means the artifact is unavailable.
pub(crate) fn resolve_content(
    fs: &dyn FileSystem,
    base_dir: &Path,
    what: &str,
    inline: Option<&str>,
    path: Option<&Path>,
    manifest: &Path,
) -> InlineResult<String> {
    match (inline, path) {
        (Some(content), None) => Ok(content.to_string()),
        (None, Some(rel)) => {
            let full = base_dir.join(rel);
            fs.read(&full).map_err(|e| match e {
                FsError::NotFound(_) => InlineError::missing(format!("content of {what}"), full),
                other => InlineError::Io(other.into_io()),
            })
        }
        (Some(_), Some(_)) => Err(InlineError::InvalidManifest {
            file: manifest.to_path_buf(),
            message: format!("{what} has both inline content and a content path"),
        }),
        (None, None) => Err(InlineError::missing(
            format!("content of {what}"),
            manifest,
        )),
    }
}

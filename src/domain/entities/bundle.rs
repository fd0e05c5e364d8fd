//! Bundle entity - the orchestrator's in-memory output manifest
//!
//! Artifacts are kept in declared emission order. Everything that needs an
//! order (stylesheet concatenation, the final flush) iterates this manifest
//! and never re-derives order from the filesystem.

use indexmap::IndexMap;

use super::BuildArtifact;
use crate::error::{InlineError, InlineResult};

/// Ordered manifest of emitted chunks and assets, keyed by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    artifacts: IndexMap<String, BuildArtifact>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an artifact, de-duplicating its file name against earlier emissions.
    ///
    /// A colliding name gets an index before its extension (`a.css`, `a2.css`,
    /// `a3.css`). Returns the name the artifact was stored under.
    pub fn emit(&mut self, artifact: BuildArtifact) -> String {
        let file_name = self.unique_file_name(artifact.file_name());
        let artifact = if file_name == artifact.file_name() {
            artifact
        } else {
            log::debug!(
                "Renamed colliding output {} -> {}",
                artifact.file_name(),
                file_name
            );
            rename(artifact, &file_name)
        };
        self.artifacts.insert(file_name.clone(), artifact);
        file_name
    }

    /// Register a synthetic asset under an exact name.
    ///
    /// Unlike [`Bundle::emit`] this never renames: a taken name is an error.
    pub fn register_asset(
        &mut self,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> InlineResult<()> {
        let file_name = file_name.into();
        if self.artifacts.contains_key(&file_name) {
            return Err(InlineError::assembly(format!(
                "output name '{file_name}' is already taken by an emitted artifact"
            )));
        }
        let artifact = BuildArtifact::asset(file_name.clone(), content);
        self.artifacts.insert(file_name, artifact);
        Ok(())
    }

    /// Remove an artifact, keeping the order of the rest
    pub fn remove(&mut self, file_name: &str) -> Option<BuildArtifact> {
        self.artifacts.shift_remove(file_name)
    }

    pub fn get(&self, file_name: &str) -> Option<&BuildArtifact> {
        self.artifacts.get(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.artifacts.contains_key(file_name)
    }

    /// Artifacts in emission order
    pub fn iter(&self) -> impl Iterator<Item = &BuildArtifact> {
        self.artifacts.values()
    }

    /// File names in emission order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Stylesheet assets in emission order
    pub fn stylesheets(&self) -> impl Iterator<Item = &BuildArtifact> {
        self.iter().filter(|a| a.is_stylesheet())
    }

    /// Entry-flagged chunks in emission order
    pub fn entry_chunks(&self) -> impl Iterator<Item = &BuildArtifact> {
        self.iter().filter(|a| a.is_entry())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    fn unique_file_name(&self, name: &str) -> String {
        if !self.artifacts.contains_key(name) {
            return name.to_string();
        }
        let (stem, ext) = split_extension(name);
        (2usize..)
            .map(|index| format!("{stem}{index}{ext}"))
            .find(|candidate| !self.artifacts.contains_key(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

fn rename(artifact: BuildArtifact, file_name: &str) -> BuildArtifact {
    if artifact.is_chunk() {
        BuildArtifact::chunk(file_name, artifact.content(), artifact.is_entry())
    } else {
        BuildArtifact::asset(file_name, artifact.content()).with_names(artifact.names().to_vec())
    }
}

/// Split `dir/name.ext` into (`dir/name`, `.ext`). Dots in directories are ignored.
fn split_extension(name: &str) -> (&str, &str) {
    let base_start = name.rfind('/').map_or(0, |i| i + 1);
    match name[base_start..].rfind('.') {
        Some(0) | None => (name, ""),
        Some(dot) => name.split_at(base_start + dot),
    }
}

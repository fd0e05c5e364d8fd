//! Naming Coordinator
//!
//! Replaces the compiler's default, hash-suffixed asset names with names
//! derived from the configured base name, so the assembler can locate
//! outputs without guessing.

use crate::domain::entities::is_stylesheet_name;

/// Pattern used when the compiler proposed no candidate name at all.
///
/// The orchestrator expands `[name]`, `[hash]` and `[extname]`.
pub const FALLBACK_ASSET_PATTERN: &str = "assets/[name]-[hash][extname]";

/// Pure naming rules keyed on a base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingCoordinator {
    base_name: String,
}

impl NamingCoordinator {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Name for an outgoing asset given the candidate names proposed for it.
    ///
    /// - any candidate is a stylesheet: `{base}.css`
    /// - otherwise the first candidate, unchanged
    /// - no candidates: [`FALLBACK_ASSET_PATTERN`]
    pub fn asset_file_name(&self, names: &[String]) -> String {
        if names.iter().any(|name| is_stylesheet_name(name)) {
            return format!("{}.css", self.base_name);
        }
        names
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_ASSET_PATTERN.to_string())
    }

    /// Name for the entry chunk
    pub fn entry_file_name(&self) -> String {
        format!("{}.js", self.base_name)
    }
}

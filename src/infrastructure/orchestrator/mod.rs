//! Orchestrator adapters
//!
//! `ManifestOrchestrator` replays the upstream compiler's emitted build
//! manifest through the plugin lifecycle.

mod manifest;
mod runner;

pub use manifest::{AssetEntry, BuildManifest, ChunkEntry, ManifestEntry};
pub use runner::{expand_pattern, ManifestOrchestrator};

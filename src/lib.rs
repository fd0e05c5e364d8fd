//! html-inliner - assembles bundler output into one self-contained HTML snippet
//!
//! An upstream compiler emits an entry chunk and stylesheets. html-inliner
//! replays that output through a small plugin lifecycle, renames the
//! artifacts predictably, and folds them into a single document with
//! `<style>` and `<script>` blocks that can be pasted into a CMS page.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildReport, BuildUseCase, InlineHtmlPlugin};
pub use config::Config;
pub use domain::entities::{BuildArtifact, Bundle, InlineDocument};
pub use domain::services::{InlineAssembler, ModeSelector, NamingCoordinator};
pub use domain::value_objects::{AssemblyConfig, CssSplitMode, RunState};
pub use error::{InlineError, InlineResult};
pub use infrastructure::{BuildManifest, LocalFs, ManifestOrchestrator};

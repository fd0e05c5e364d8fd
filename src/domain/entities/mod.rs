//! Domain Entities
//!
//! - `BuildArtifact` - one emitted chunk or asset
//! - `Bundle` - the ordered in-memory manifest of artifacts
//! - `InlineDocument` - the assembled HTML snippet

mod artifact;
mod bundle;
mod inline_document;

pub use artifact::{is_stylesheet_name, ArtifactKind, BuildArtifact};
pub use bundle::Bundle;
pub use inline_document::InlineDocument;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `orchestrator/` - Build manifest replay behind the `Orchestrator` port

pub mod fs;
pub mod orchestrator;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use orchestrator::{BuildManifest, ManifestOrchestrator};

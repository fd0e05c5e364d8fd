//! Domain Layer
//!
//! The core of html-inliner - assembly rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Build artifacts, the ordered bundle manifest, the inline document
//! - `value_objects/` - Immutable value types (AssemblyConfig, CssSplitMode, RunState, ContentHash)
//! - `services/` - Naming coordinator, mode selector, inline assembler
//! - `ports/` - Interface definitions for the orchestrator and the file system
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Explicit configuration** - Services receive an `AssemblyConfig`; nothing reads globals
//! 3. **Ports & Adapters** - The build pipeline and disk access go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

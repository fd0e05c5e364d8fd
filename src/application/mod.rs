//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between the orchestrator port and the domain services
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Runs the orchestrator with the inline plugin and reports the result
//!
//! ## Plugins
//!
//! - `InlineHtmlPlugin` - Lifecycle hooks that name, select and assemble

pub mod build;
pub mod plugin;

pub use build::{BuildReport, BuildUseCase};
pub use plugin::InlineHtmlPlugin;

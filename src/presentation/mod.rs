//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text rendering of command results
//!
//! ## Usage
//!
//! ```ignore
//! use html_inliner::presentation::factory;
//!
//! let mut orchestrator = factory::create_orchestrator(&config, &fs)?;
//! let report = factory::create_build_use_case(&config).execute(&mut orchestrator)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_build_use_case, create_orchestrator};
pub use output::OutputFormat;

//! Use Case Factory
//!
//! Creates use cases and adapters with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::BuildUseCase;
use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::error::InlineResult;
use crate::infrastructure::ManifestOrchestrator;

/// Create a build use case for the resolved configuration
pub fn create_build_use_case(config: &Config) -> BuildUseCase {
    BuildUseCase::new(config.to_assembly_config())
}

/// Load the configured build manifest into an orchestrator
pub fn create_orchestrator<'fs>(
    config: &Config,
    fs: &'fs dyn FileSystem,
) -> InlineResult<ManifestOrchestrator<'fs>> {
    ManifestOrchestrator::load(config.build.manifest.clone(), config.build.out_dir.clone(), fs)
}

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use html_inliner::infrastructure::fs::MemoryFs;
use html_inliner::{BuildManifest, BuildUseCase, Config, ManifestOrchestrator};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(manifest) = BuildManifest::parse(content, Path::new("m.json")) else {
        return;
    };

    // A parsed manifest replays to Ok or Err, never a panic
    let fs = MemoryFs::new();
    let config = Config::default();
    let mut orchestrator = ManifestOrchestrator::new(manifest, "m.json", "dist", &fs);
    let _ = BuildUseCase::new(config.to_assembly_config()).execute(&mut orchestrator);
});

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and validation should never panic
        let _ = toml::from_str::<html_inliner::Config>(content);
        if let Ok((config, _warnings)) =
            html_inliner::config::parse_with_warnings(content, Path::new("inliner.toml"))
        {
            let _ = config.validate(Path::new("inliner.toml"));
            let _ = config.to_assembly_config().library_name();
        }
    }
});

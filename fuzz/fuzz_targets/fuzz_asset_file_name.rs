#![no_main]

use libfuzzer_sys::fuzz_target;

use html_inliner::infrastructure::orchestrator::expand_pattern;
use html_inliner::NamingCoordinator;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let names: Vec<String> = content.split('\n').map(str::to_string).collect();
        let naming = NamingCoordinator::new("widget");
        let name = naming.asset_file_name(&names);

        if names.iter().any(|n| n.to_ascii_lowercase().ends_with(".css")) {
            assert_eq!(name, "widget.css");
        }
        let _ = expand_pattern(&name, content, content);
    }
});

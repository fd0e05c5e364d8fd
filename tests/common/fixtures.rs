//! Test fixtures - reusable manifests and configs.

/// Entry chunk plus one stylesheet, both inline
pub const SIMPLE_MANIFEST: &str = r#"{ "output": [
    { "type": "chunk", "fileName": "main-4f2a.js", "isEntry": true, "code": "console.log(1)" },
    { "type": "asset", "names": ["style.css"], "source": "body{color:red}" }
] }"#;

/// Entry chunk only
pub const SCRIPT_ONLY_MANIFEST: &str = r#"{ "output": [
    { "type": "chunk", "fileName": "main-4f2a.js", "isEntry": true, "code": "console.log(1)" }
] }"#;

/// Two stylesheets around the entry chunk, contents read from disk
pub const TWO_STYLESHEETS_MANIFEST: &str = r#"{ "output": [
    { "type": "asset", "names": ["b.css"], "sourcePath": "src/b.css" },
    { "type": "chunk", "fileName": "main-4f2a.js", "isEntry": true, "codePath": "src/main.js" },
    { "type": "asset", "names": ["a.css"], "sourcePath": "src/a.css" }
] }"#;

/// Entry chunk whose code file is never written
pub const MISSING_ENTRY_MANIFEST: &str = r#"{ "output": [
    { "type": "asset", "names": ["style.css"], "source": "body{color:red}" },
    { "type": "chunk", "fileName": "main-4f2a.js", "isEntry": true, "codePath": "src/missing.js" }
] }"#;

/// Stylesheet with no entry chunk
pub const NO_ENTRY_MANIFEST: &str = r#"{ "output": [
    { "type": "asset", "names": ["style.css"], "source": "body{color:red}" }
] }"#;

pub const SPLIT_CONFIG: &str = r#"
[assembly]
base_name = "widget"
output_html_name = "widget.html"
css_code_split = true
"#;

pub const EXPECTED_SIMPLE_DOCUMENT: &str =
    "<style>body{color:red}</style>\n<script>console.log(1)</script>";

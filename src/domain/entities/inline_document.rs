//! InlineDocument entity - the assembled HTML snippet
//!
//! Holds the style blocks followed by the script blocks. Built once per run,
//! rendered to a single text blob and discarded after it is registered.

use crate::domain::value_objects::ContentHash;

/// The single HTML artifact embedding all style and script content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineDocument {
    style_blocks: Vec<String>,
    script_blocks: Vec<String>,
}

impl InlineDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style block, given its inner CSS.
    ///
    /// The CSS is copied byte-for-byte unless it contains `</style` (any
    /// ASCII case), which is written as `<\/style` so it cannot end the block.
    pub fn push_style(&mut self, css: &str) {
        self.style_blocks.push(format!(
            "<style>{}</style>",
            escape_closing_tag(css, "</style")
        ));
    }

    /// Append a script block, given its inner JavaScript.
    ///
    /// The code is copied byte-for-byte unless it contains `</script` (any
    /// ASCII case), which is written as `<\/script` so it cannot end the block.
    pub fn push_script(&mut self, js: &str) {
        self.script_blocks.push(format!(
            "<script>{}</script>",
            escape_closing_tag(js, "</script")
        ));
    }

    pub fn style_blocks(&self) -> &[String] {
        &self.style_blocks
    }

    pub fn script_blocks(&self) -> &[String] {
        &self.script_blocks
    }

    /// Serialize: style blocks first, then script blocks, one per line
    pub fn render(&self) -> String {
        self.style_blocks
            .iter()
            .chain(&self.script_blocks)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Hash of the rendered text
    pub fn content_hash(&self) -> ContentHash {
        ContentHash::from_content(&self.render())
    }
}

/// Escape every ASCII case-insensitive occurrence of `tag` (e.g. `</script`)
/// as `<\/script`, so embedded content cannot close its block early.
fn escape_closing_tag(content: &str, tag: &str) -> String {
    let bytes = content.as_bytes();
    let needle = tag.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut i = 0;

    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            // `<` and `/` are ASCII, so both offsets are char boundaries
            out.push_str(&content[last..i + 1]);
            out.push('\\');
            last = i + 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    out.push_str(&content[last..]);
    out
}

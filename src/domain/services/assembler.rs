//! Inline Assembler
//!
//! Turns the finalized in-memory bundle into one [`InlineDocument`]:
//!
//! 1. collect stylesheet assets in emission order
//! 2. locate the single entry chunk
//! 3. join non-blank stylesheets into one `<style>` block (omitted when blank)
//! 4. wrap the entry chunk in a `<script>` block
//! 5. render style then script, newline separated
//! 6. register the result in the bundle under the configured output name
//!
//! Runs inside the orchestrator's finalization hook, before anything is
//! flushed, so it never reads files that may not exist yet.

use log::{debug, info};

use crate::domain::entities::{BuildArtifact, Bundle, InlineDocument};
use crate::domain::value_objects::{AssemblyConfig, ContentHash, CssSplitMode};
use crate::error::{InlineError, InlineResult};

/// Result of a successful assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub document: InlineDocument,
    /// File name of the entry chunk that became the script block
    pub entry: String,
    /// Stylesheets that were inlined, in order (blank ones included)
    pub stylesheets: Vec<String>,
}

impl Assembly {
    /// Rendered document text
    pub fn render(&self) -> String {
        self.document.render()
    }

    pub fn content_hash(&self) -> ContentHash {
        self.document.content_hash()
    }

    /// Every artifact the document was built from
    pub fn consumed(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.entry.as_str()).chain(self.stylesheets.iter().map(String::as_str))
    }
}

/// Builds the inline document for one run
#[derive(Debug, Clone, Copy)]
pub struct InlineAssembler<'a> {
    config: &'a AssemblyConfig,
}

impl<'a> InlineAssembler<'a> {
    pub fn new(config: &'a AssemblyConfig) -> Self {
        Self { config }
    }

    /// Stylesheet assets to inline, in emission order.
    ///
    /// With splitting disabled at most one stylesheet may exist, and it must
    /// carry the predictable `{base}.css` name.
    pub fn collect_stylesheets<'b>(&self, bundle: &'b Bundle) -> InlineResult<Vec<&'b BuildArtifact>> {
        let sheets: Vec<_> = bundle.stylesheets().collect();

        if self.config.split_mode() == CssSplitMode::Single {
            match sheets.as_slice() {
                [] => {}
                [only] => {
                    let expected = self.config.stylesheet_file_name();
                    if only.file_name() != expected {
                        return Err(InlineError::missing(
                            format!("stylesheet (found '{}' instead)", only.file_name()),
                            expected,
                        ));
                    }
                }
                more => {
                    return Err(InlineError::assembly(format!(
                        "css splitting is disabled but {} stylesheets were emitted: {}",
                        more.len(),
                        join_names(more)
                    )));
                }
            }
        }

        Ok(sheets)
    }

    /// The single entry-flagged chunk
    pub fn find_entry<'b>(&self, bundle: &'b Bundle) -> InlineResult<&'b BuildArtifact> {
        let entries: Vec<_> = bundle.entry_chunks().collect();
        match entries.as_slice() {
            [entry] => Ok(*entry),
            [] => Err(InlineError::assembly("no entry chunk was emitted")),
            more => Err(InlineError::assembly(format!(
                "expected exactly one entry chunk, found {}: {}",
                more.len(),
                join_names(more)
            ))),
        }
    }

    /// Build the document without touching the bundle
    pub fn assemble(&self, bundle: &Bundle) -> InlineResult<Assembly> {
        let sheets = self.collect_stylesheets(bundle)?;
        let entry = self.find_entry(bundle)?;

        let css: String = sheets
            .iter()
            .map(|sheet| sheet.content())
            .filter(|content| !content.trim().is_empty())
            .collect();

        let mut document = InlineDocument::new();
        if css.trim().is_empty() {
            debug!("No stylesheet content, omitting style block");
        } else {
            document.push_style(&css);
        }
        document.push_script(entry.content());

        Ok(Assembly {
            document,
            entry: entry.file_name().to_string(),
            stylesheets: sheets.iter().map(|s| s.file_name().to_string()).collect(),
        })
    }

    /// Assemble and register the document as a synthetic asset.
    ///
    /// When inputs are not retained, the consumed entry chunk and stylesheets
    /// are dropped from the bundle so only the document is flushed for them.
    pub fn emit(&self, bundle: &mut Bundle) -> InlineResult<Assembly> {
        let assembly = self.assemble(bundle)?;

        if !self.config.retain_inputs() {
            for name in assembly.consumed() {
                bundle.remove(name);
            }
        }
        bundle.register_asset(self.config.output_html_name(), assembly.render())?;

        info!(
            "Assembled {} from {} ({} stylesheet(s))",
            self.config.output_html_name(),
            assembly.entry,
            assembly.stylesheets.len()
        );
        Ok(assembly)
    }
}

fn join_names(artifacts: &[&BuildArtifact]) -> String {
    artifacts
        .iter()
        .map(|a| a.file_name())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Property tests for the inline assembler.

use proptest::prelude::*;

use html_inliner::{AssemblyConfig, BuildArtifact, Bundle, InlineAssembler};

fn css_body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}\\{[a-z:;0-9 ]{0,16}\\}").unwrap()
}

fn js_body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9().;= ]{1,32}").unwrap()
}

fn split_bundle(sheets: &[String], entry: &str) -> Bundle {
    let mut bundle = Bundle::new();
    for (i, css) in sheets.iter().enumerate() {
        bundle.emit(BuildArtifact::asset(format!("s{i}.css"), css.clone()));
    }
    bundle.emit(BuildArtifact::chunk("widget.js", entry, true));
    bundle
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: In split mode the style block is the emission-order concatenation.
    #[test]
    fn property_split_mode_concatenates_in_emission_order(
        sheets in proptest::collection::vec(css_body(), 0..6),
        entry in js_body(),
    ) {
        let config = AssemblyConfig::new("widget", "widget.html").with_css_splitting(true);
        let assembly = InlineAssembler::new(&config)
            .assemble(&split_bundle(&sheets, &entry))
            .unwrap();

        let expected_script = format!("<script>{entry}</script>");
        let rendered = assembly.render();
        if sheets.is_empty() {
            prop_assert_eq!(rendered, expected_script);
        } else {
            prop_assert_eq!(rendered, format!("<style>{}</style>\n{expected_script}", sheets.concat()));
        }
    }

    /// PROPERTY: Assembling the same bundle twice is byte-identical.
    #[test]
    fn property_assembly_is_idempotent(
        sheets in proptest::collection::vec(css_body(), 0..4),
        entry in js_body(),
    ) {
        let config = AssemblyConfig::new("widget", "widget.html").with_css_splitting(true);
        let bundle = split_bundle(&sheets, &entry);
        let assembler = InlineAssembler::new(&config);

        let first = assembler.assemble(&bundle).unwrap();
        let second = assembler.assemble(&bundle).unwrap();
        prop_assert_eq!(first.render(), second.render());
        prop_assert_eq!(first.content_hash(), second.content_hash());
    }

    /// PROPERTY: Whitespace-only stylesheets never produce a style block.
    #[test]
    fn property_blank_stylesheet_is_omitted(
        blank in "[ \t\n]{0,8}",
        entry in js_body(),
    ) {
        let config = AssemblyConfig::new("widget", "widget.html");
        let mut bundle = Bundle::new();
        bundle.emit(BuildArtifact::asset("widget.css", blank));
        bundle.emit(BuildArtifact::chunk("widget.js", entry.clone(), true));

        let assembly = InlineAssembler::new(&config).assemble(&bundle).unwrap();
        prop_assert!(assembly.document.style_blocks().is_empty());
        prop_assert_eq!(assembly.render(), format!("<script>{entry}</script>"));
    }

    /// PROPERTY: Embedded content never closes its block early, whatever its case.
    #[test]
    fn property_closing_tags_are_escaped(
        prefix in js_body(),
        tag in "</[sS][cC][rR][iI][pP][tT]",
        suffix in js_body(),
    ) {
        let config = AssemblyConfig::new("widget", "widget.html");
        let mut bundle = Bundle::new();
        bundle.emit(BuildArtifact::chunk("widget.js", format!("{prefix}{tag}>{suffix}"), true));

        let rendered = InlineAssembler::new(&config).assemble(&bundle).unwrap().render();
        prop_assert_eq!(rendered.to_ascii_lowercase().matches("</script").count(), 1);
        prop_assert!(rendered.ends_with("</script>"));
    }
}

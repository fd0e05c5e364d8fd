//! Property tests for the naming coordinator.

use proptest::prelude::*;

use html_inliner::NamingCoordinator;

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

fn candidate() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}\\.(js|svg|png|map|woff2)").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any candidate list containing a stylesheet maps to `{base}.css`.
    #[test]
    fn property_stylesheet_candidates_take_base_name(
        base in base_name(),
        mut others in proptest::collection::vec(candidate(), 0..4),
        stem in "[a-f0-9]{4,12}",
        upper in any::<bool>(),
        position in any::<prop::sample::Index>(),
    ) {
        let ext = if upper { ".CSS" } else { ".css" };
        let at = position.index(others.len() + 1);
        others.insert(at, format!("{stem}{ext}"));

        let naming = NamingCoordinator::new(base.clone());
        prop_assert_eq!(naming.asset_file_name(&others), format!("{base}.css"));
    }

    /// PROPERTY: Naming is stable - the same input always yields the same name.
    #[test]
    fn property_naming_is_deterministic(
        base in base_name(),
        names in proptest::collection::vec(candidate(), 0..4),
    ) {
        let naming = NamingCoordinator::new(base);
        prop_assert_eq!(naming.asset_file_name(&names), naming.asset_file_name(&names));
    }

    /// PROPERTY: Without a stylesheet the first candidate passes through unchanged.
    #[test]
    fn property_non_stylesheet_keeps_first_candidate(
        base in base_name(),
        names in proptest::collection::vec(candidate(), 1..4),
    ) {
        let naming = NamingCoordinator::new(base);
        prop_assert_eq!(naming.asset_file_name(&names), names[0].clone());
    }
}

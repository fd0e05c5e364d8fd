//! Property tests for bundle emission order and name de-duplication.

use std::collections::HashSet;

use proptest::prelude::*;

use html_inliner::{BuildArtifact, Bundle};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(a|b|c)(\\.css|\\.js)?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Emitting never drops or reorders artifacts, even on name collisions.
    #[test]
    fn property_emit_preserves_order_and_count(
        names in proptest::collection::vec(file_name(), 0..12),
    ) {
        let mut bundle = Bundle::new();
        let stored: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| bundle.emit(BuildArtifact::asset(name.clone(), i.to_string())))
            .collect();

        prop_assert_eq!(bundle.len(), names.len());
        let unique: HashSet<_> = stored.iter().collect();
        prop_assert_eq!(unique.len(), stored.len());

        let contents: Vec<String> = bundle.iter().map(|a| a.content().to_string()).collect();
        let expected: Vec<String> = (0..names.len()).map(|i| i.to_string()).collect();
        prop_assert_eq!(contents, expected);
    }
}

//! Property tests for decoding arbitrary manifests.

use proptest::prelude::*;

use atlantis_yaml::{ErrorKind, ParserValidator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_and_validate` never panics on arbitrary small input.
    #[test]
    fn property_parse_never_panics(
        content in "(?s).{0,256}"
    ) {
        let _ = ParserValidator::new().parse_and_validate(content.as_bytes());
    }

    /// PROPERTY: any top-level key outside the schema is a decode failure.
    #[test]
    fn property_unknown_top_level_key_is_decode_failure(
        key in "[a-z_]{1,12}".prop_filter("not a schema key", |k| {
            !matches!(k.as_str(), "version" | "projects" | "workflows")
        })
    ) {
        let yaml = format!("version: 2\n{}: 1\n", key);
        let err = ParserValidator::new().parse_and_validate(yaml.as_bytes()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    }
}

//! Properties of substitution and verification.

use std::path::Path;

use proptest::prelude::*;

use tle_builder::composer::{check_delimiter, compose};
use tle_builder::markers::{PGTLE_DELIMITER, SOURCE_PLACEHOLDER, VERSION_PLACEHOLDER};
use tle_builder::verifier::verify;

/// SQL-ish text that can never contain a marker or placeholder.
fn payload() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ;,()'\n\t_.*=<>-]{0,256}").unwrap()
}

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}").unwrap()
}

/// Free text around the tokens; braces and `$` excluded.
fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 \n-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a valid payload and complete template compose into an
    /// output with the version and payload and no placeholders left.
    #[test]
    fn property_round_trip(
        payload in payload(),
        version in version(),
        head in filler(),
        mid in filler(),
        tail in filler(),
    ) {
        let template = format!(
            "{head}{VERSION_PLACEHOLDER}{mid}{PGTLE_DELIMITER}{SOURCE_PLACEHOLDER}{PGTLE_DELIMITER}{tail}"
        );

        check_delimiter(&payload, Path::new("p.sql")).unwrap();
        let out = compose(&template, &payload, &version);

        prop_assert!(verify(&template, &out, Path::new("t")).is_ok());
        prop_assert_eq!(
            out,
            format!("{head}{version}{mid}{PGTLE_DELIMITER}{payload}{PGTLE_DELIMITER}{tail}")
        );
    }

    /// PROPERTY: the delimiter anywhere in the payload is rejected.
    #[test]
    fn property_delimiter_rejected_anywhere(
        before in payload(),
        after in payload(),
    ) {
        let source = format!("{before}{PGTLE_DELIMITER}{after}");
        prop_assert!(check_delimiter(&source, Path::new("p.sql")).is_err());
    }

    /// PROPERTY: dropping either placeholder from the template fails
    /// verification.
    #[test]
    fn property_incomplete_template_rejected(
        payload in payload(),
        text in filler(),
        keep_version in any::<bool>(),
    ) {
        let token = if keep_version { VERSION_PLACEHOLDER } else { SOURCE_PLACEHOLDER };
        let template = format!("{text}{token}{text}");

        let out = compose(&template, &payload, "2.0.0");

        prop_assert!(verify(&template, &out, Path::new("t")).is_err());
    }
}

//! Properties of whole builds against a temp project.

use std::fs;

use proptest::prelude::*;

use tle_builder::{build, BuildConfig, TleError};

fn payload() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ;,()'\n_.*=-]{0,128}").unwrap()
}

fn project(source: &str, template: &str) -> (tempfile::TempDir, BuildConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig::rooted_at(dir.path());
    fs::create_dir_all(config.source_path.parent().unwrap()).unwrap();
    fs::write(&config.source_path, source).unwrap();
    fs::write(&config.template_path, template).unwrap();
    (dir, config)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rebuilding with unchanged inputs gives identical bytes.
    #[test]
    fn property_build_is_idempotent(source in payload()) {
        let (_dir, config) = project(&source, "-- {{VERSION}}\n$_pgtle_$\n{{SOURCE}}\n$_pgtle_$\n");

        let first = build(config.clone()).unwrap();
        let first_bytes = fs::read(&config.output_path).unwrap();
        let second = build(config.clone()).unwrap();
        let second_bytes = fs::read(&config.output_path).unwrap();

        prop_assert_eq!(first_bytes, second_bytes);
        prop_assert_eq!(first.content_hash, second.content_hash);
    }

    /// PROPERTY: a payload with the delimiter never produces output.
    #[test]
    fn property_collision_writes_nothing(before in payload(), after in payload()) {
        let source = format!("{before}$_pgtle_${after}");
        let (_dir, config) = project(&source, "{{VERSION}} $_pgtle_${{SOURCE}}$_pgtle_$");

        let err = build(config.clone()).unwrap_err();

        prop_assert!(matches!(err, TleError::DelimiterCollision { .. }), "got {err:?}");
        prop_assert!(!config.output_path.exists());
    }
}

//! Library integration tests.

use bpk_envinfo::EnvInfoError;

#[test]
fn error_types_are_public() {
    let err = EnvInfoError::CommandFailed {
        command: "npm list --json".into(),
        code: Some(1),
    };
    assert!(err.to_string().contains("npm list --json"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> bpk_envinfo::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use bpk_envinfo::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["bpk-envinfo", "--skip-outdated", "--json"]);
    assert!(cli.info.skip_outdated);
    assert!(cli.info.json);
}

#[test]
fn package_helpers_are_public() {
    use bpk_envinfo::packages::{first_party_packages, is_first_party, parse_installed};

    assert!(is_first_party("react-native-bpk-component-button"));

    let tree = parse_installed(
        r#"{"dependencies": {"bpk-mixins": {"version": "1.0.0"}, "lodash": {"version": "4.17.21"}}}"#,
        "npm list --json",
    )
    .unwrap();
    let packages = first_party_packages(&tree);
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "bpk-mixins");
}

#[test]
fn version_helpers_are_public() {
    use bpk_envinfo::packages::OutdatedRecord;
    use bpk_envinfo::version::{format_version_info, normalize_runtime_version};

    assert_eq!(normalize_runtime_version("v18.2.0\n"), "18.2.0");
    assert_eq!(format_version_info("2.0.0", None).display, "2.0.0");

    let record = OutdatedRecord {
        current: Some("1.0.0".into()),
        wanted: "1.1.0".into(),
        latest: "1.1.0".into(),
    };
    assert!(format_version_info("1.0.0", Some(&record)).is_outdated);
    assert!(!format_version_info("1.1.0", Some(&record)).is_outdated);
}

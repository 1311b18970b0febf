use std::fs;
use tempfile::TempDir;

use workshop_cli::api::{ErrorKind, Parameter};
use workshop_cli::params::assemble;

const NO_FILES: &[&str] = &[];
const NO_ENV_FILES: &[&str] = &[];

#[test]
fn test_literals_keep_first_seen_order() {
    let params = assemble(&["b=2", "a=1", "b=3"], NO_FILES, NO_ENV_FILES).unwrap();

    assert_eq!(params, vec![Parameter::new("b", "3"), Parameter::new("a", "1")]);
}

#[test]
fn test_param_file_value_is_file_content() {
    let dir = TempDir::new().unwrap();
    let cert = dir.path().join("cert.pem");
    fs::write(&cert, "-----BEGIN CERTIFICATE-----\nabc\n").unwrap();

    let item = format!("cert={}", cert.display());
    let params = assemble(&["cert=placeholder".to_string()], &[item], NO_ENV_FILES).unwrap();

    assert_eq!(
        params,
        vec![Parameter::new("cert", "-----BEGIN CERTIFICATE-----\nabc\n")]
    );
}

#[test]
fn test_params_file_overrides_literal_flags() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join("session.env");
    fs::write(&env_file, "REGION=eu\n# comment\nTIER=gold\n").unwrap();

    let params = assemble(&["TIER=bronze", "OWNER=ops"], NO_FILES, &[&env_file]).unwrap();

    assert_eq!(
        params,
        vec![
            Parameter::new("TIER", "gold"),
            Parameter::new("OWNER", "ops"),
            Parameter::new("REGION", "eu"),
        ]
    );
}

#[test]
fn test_later_params_file_wins() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.env");
    let second = dir.path().join("second.env");
    fs::write(&first, "MODE=dev\nCOLOR=blue\n").unwrap();
    fs::write(&second, "MODE=prod\n").unwrap();

    let params = assemble(NO_FILES, NO_FILES, &[&first, &second]).unwrap();

    assert_eq!(
        params,
        vec![Parameter::new("MODE", "prod"), Parameter::new("COLOR", "blue")]
    );
}

#[test]
fn test_missing_params_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.env");

    let err = assemble(NO_FILES, NO_FILES, &[&missing]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert!(err.to_string().starts_with("cannot read parameters data file"));
}

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn workspace_with_source(content: &str) -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/main.rs"), content).unwrap();
    temp
}

fn catalog_path(root: &Path) -> std::path::PathBuf {
    root.join("src/i18n/locales/en.json")
}

#[test]
fn default_run_writes_catalog() {
    let temp = workspace_with_source("print_ok(\"Saved\");\n");

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total keys: 1"));

    assert_eq!(
        fs::read_to_string(catalog_path(temp.path())).unwrap(),
        "{\n    \"auto.msg.001\": \"Saved\"\n}\n"
    );
}

#[test]
fn check_mode_fails_when_strings_are_pending() {
    let temp = workspace_with_source("print_ok(\"Saved\");\n");

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .arg("--check")
        .assert()
        .code(1);
    assert!(!catalog_path(temp.path()).exists());

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .arg("--check")
        .assert()
        .success();
}

#[test]
fn corrupt_catalog_warns_and_recovers() {
    let temp = workspace_with_source("println!(\"Fresh\");\n");
    fs::create_dir_all(temp.path().join("src/i18n/locales")).unwrap();
    fs::write(catalog_path(temp.path()), "{broken").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is not valid JSON"));

    assert_eq!(
        fs::read_to_string(catalog_path(temp.path())).unwrap(),
        "{\n    \"auto.msg.001\": \"Fresh\"\n}\n"
    );
}

#[test]
fn missing_source_directory_fails() {
    let temp = tempfile::tempdir().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extraction failed"));
    assert!(!catalog_path(temp.path()).exists());
}

#[test]
fn config_file_redirects_scan_and_catalog() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("app")).unwrap();
    fs::write(temp.path().join("app/ui.rs"), "print_info(\"Welcome\");\n").unwrap();
    fs::write(
        temp.path().join("i18n-extract.toml"),
        "[scan]\nroot = \"app\"\n\n[catalog]\npath = \"locales/en.json\"\nkey_prefix = \"ui.msg\"\n",
    )
    .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("locales/en.json")).unwrap(),
        "{\n    \"ui.msg.001\": \"Welcome\"\n}\n"
    );
}

#[test]
fn init_writes_default_config() {
    let temp = tempfile::tempdir().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("i18n-extract")
        .current_dir(temp.path())
        .arg("--init")
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("i18n-extract.toml")).unwrap();
    assert!(written.contains("[scan]"));
    assert!(written.contains("auto.msg"));
}

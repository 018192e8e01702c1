use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

fn context_with_vanished_folder() -> TestContext {
    let ctx = TestContext::new();
    ctx.add("Kept");
    ctx.add("Gone");
    ctx.bind(1, &ctx.folder("kept"));
    let gone = ctx.folder("gone");
    ctx.bind(2, &gone);
    fs::remove_dir(&gone).unwrap();
    ctx
}

#[test]
fn validate_unbinds_vanished_folders() {
    let ctx = context_with_vanished_folder();

    ctx.cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot 2 (Gone)"));

    let config = ctx.read_config();
    assert!(config["dossiers"]["1"].is_string());
    assert!(config["dossiers"]["2"].is_null());
}

#[test]
fn validate_no_save_leaves_file_untouched() {
    let ctx = context_with_vanished_folder();
    let before = fs::read_to_string(ctx.config_path()).unwrap();

    ctx.cli()
        .args(["validate", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not saved"));

    assert_eq!(fs::read_to_string(ctx.config_path()).unwrap(), before);
}

#[test]
fn validate_reports_clean_registry() {
    let ctx = TestContext::new();
    ctx.add("Kept");
    ctx.bind(1, &ctx.folder("kept"));

    ctx.cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All bound folders exist"));
}

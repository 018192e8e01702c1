use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn init_creates_placeholder_slots() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 3 slot(s)"));

    let config = ctx.read_config();
    assert_eq!(config["noms_boutons"]["1"], "Slot 1");
    assert_eq!(config["noms_boutons"]["3"], "Slot 3");
    assert!(config["dossiers"]["2"].is_null());
}

#[test]
fn init_refuses_non_empty_registry() {
    let ctx = TestContext::new();
    ctx.add("Existing");

    ctx.cli().arg("init").assert().failure().stderr(predicate::str::contains("already has 1 slot"));
}

#[test]
fn path_prints_slot_file_location() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("path")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(ctx.config_path().to_str().unwrap()));
}

#[test]
fn explicit_config_flag_wins_over_environment() {
    let ctx = TestContext::new();
    let elsewhere = assert_fs::TempDir::new().unwrap();
    let other = elsewhere.child("nested").child("slots.json");

    ctx.cli().arg("--config").arg(other.path()).args(["add", "Elsewhere"]).assert().success();

    other.assert(predicate::str::contains("Elsewhere"));
    assert!(!ctx.config_path().exists());
}

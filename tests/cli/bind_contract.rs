use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn bind_stores_absolute_path_and_lists_folder_label() {
    let ctx = TestContext::new();
    ctx.add("Reports");
    let folder = ctx.folder("quarterly");

    ctx.cli()
        .arg("bind")
        .arg("1")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bound slot 1 to quarterly"));

    let config = ctx.read_config();
    assert_eq!(config["dossiers"]["1"], folder.to_str().unwrap());
    assert_eq!(config["noms_boutons"]["1"], "Reports");

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports").and(predicate::str::contains("quarterly")));
}

#[test]
fn bind_rejects_missing_folder_and_keeps_slot_unbound() {
    let ctx = TestContext::new();
    ctx.add("Reports");
    let missing = ctx.folder("scratch").join("does-not-exist");

    ctx.cli()
        .arg("bind")
        .arg("1")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Folder does not exist"));

    assert!(ctx.read_config()["dossiers"]["1"].is_null());
}

#[test]
fn bind_through_parent_component_labels_real_folder() {
    let ctx = TestContext::new();
    ctx.add("Up");
    let folder = ctx.folder("outer");
    let inner = ctx.folder("outer/inner");

    ctx.cli()
        .arg("bind")
        .arg("1")
        .arg(inner.join(".."))
        .assert()
        .success()
        .stdout(predicate::str::contains("Bound slot 1 to outer"));

    assert_eq!(ctx.read_config()["dossiers"]["1"], folder.to_str().unwrap());
}

#[test]
fn bind_unknown_slot_fails() {
    let ctx = TestContext::new();
    let folder = ctx.folder("anything");

    ctx.cli()
        .arg("bind")
        .arg("9")
        .arg(&folder)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Slot 9 not found"));
}

#[test]
fn unbind_clears_folder_but_keeps_name() {
    let ctx = TestContext::new();
    ctx.add("Reports");
    ctx.bind(1, &ctx.folder("quarterly"));

    ctx.cli().args(["unbind", "1"]).assert().success().stdout(predicate::str::contains("Unbound slot 1"));

    let config = ctx.read_config();
    assert!(config["dossiers"]["1"].is_null());
    assert_eq!(config["noms_boutons"]["1"], "Reports");
}

#[test]
fn rename_updates_name_only() {
    let ctx = TestContext::new();
    ctx.add("Reports");
    let folder = ctx.folder("quarterly");
    ctx.bind(1, &folder);

    ctx.cli().args(["rename", "1", "Finance"]).assert().success();

    let config = ctx.read_config();
    assert_eq!(config["noms_boutons"]["1"], "Finance");
    assert_eq!(config["dossiers"]["1"], folder.to_str().unwrap());
}

#[test]
fn invalid_slot_identifier_is_rejected_by_parser() {
    let ctx = TestContext::new();

    ctx.cli().args(["unbind", "0"]).assert().failure();
    ctx.cli().args(["unbind", "abc"]).assert().failure();
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn remove_deletes_slot_and_ids_are_not_reused() {
    let ctx = TestContext::new();
    ctx.add("A");
    ctx.add("B");
    ctx.add("C");

    ctx.cli()
        .args(["remove", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed slot 2"));
    ctx.add("D");

    let config = ctx.read_config();
    assert!(config["noms_boutons"].get("2").is_none());
    assert!(config["dossiers"].get("2").is_none());
    assert_eq!(config["noms_boutons"]["4"], "D");
}

#[test]
fn remove_missing_slot_is_a_no_op() {
    let ctx = TestContext::new();
    ctx.add("A");

    ctx.cli()
        .args(["remove", "7", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));

    assert_eq!(ctx.read_config()["noms_boutons"]["1"], "A");
}

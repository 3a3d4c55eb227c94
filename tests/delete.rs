use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn seed_db(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn removing_contact_by_id() {
    let (_dir, db) = seed_db(
        r#"[
            {"id":"a1","name":"Bo","email":"bo@x.com","phone":"222"},
            {"id":"a2","name":"Cy","email":"cy@x.com","phone":"333"}
        ]"#,
    );

    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_DB_PATH", &db)
        .args(&["remove", "--id", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact removed successfully"));

    // Only the other contact survives in the database file
    let data = fs::read_to_string(&db).unwrap();
    let contacts: Value = serde_json::from_str(&data).unwrap();

    assert_eq!(contacts.as_array().unwrap().len(), 1);
    assert_eq!(contacts[0]["id"], "a2");
}

#[test]
fn removing_unknown_id_keeps_collection() {
    let (_dir, db) = seed_db(
        r#"[
            {"id":"a1","name":"Bo","email":"bo@x.com","phone":"222"},
            {"id":"a2","name":"Cy","email":"cy@x.com","phone":"333"}
        ]"#,
    );

    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_DB_PATH", &db)
        .args(&["remove", "--id", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact removed successfully"));

    let data = fs::read_to_string(&db).unwrap();
    let contacts: Value = serde_json::from_str(&data).unwrap();

    assert_eq!(contacts.as_array().unwrap().len(), 2);
    assert_eq!(contacts[0]["id"], "a1");
    assert_eq!(contacts[1]["id"], "a2");
}

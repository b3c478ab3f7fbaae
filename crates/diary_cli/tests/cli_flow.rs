use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn diary(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_LOG_DIR").arg("--db").arg(db);
    cmd
}

#[test]
fn new_edit_list_delete_flow() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("diary.db");

    let output = diary(&db)
        .args(["new", "--title", "Hello", "--body", "World", "--date", "5000"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap().trim().to_string();

    diary(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id}\t5000\tHello\tWorld")));

    diary(&db)
        .args(["edit", id.as_str(), "--title", "Hello2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Hello2"));

    diary(&db)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Hello2\""));

    diary(&db)
        .args(["delete", id.as_str()])
        .assert()
        .success();

    diary(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No diary entries."));
}

#[test]
fn delete_unknown_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("diary.db");

    diary(&db)
        .args(["delete", "00000000-0000-4000-8000-000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_unknown_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("diary.db");

    diary(&db)
        .args(["show", "00000000-0000-4000-8000-000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diary entry not found"));
}

#[test]
fn negative_dates_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("diary.db");

    let output = diary(&db)
        .args(["new", "--title", "Before epoch", "--date", "-5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap().trim().to_string();

    diary(&db)
        .args(["edit", id.as_str(), "--date", "-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date: -7"));
}

#[test]
fn delete_error_message_is_operation_neutral() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("diary.db");

    diary(&db)
        .args(["delete", "00000000-0000-4000-8000-000000000002"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write diary entry"));
}

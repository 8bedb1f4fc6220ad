use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn qn(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quicknotes").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("QUICK_NOTES_STORAGE_KEY")
        .env_remove("QUICK_NOTES_SELECTED_KEY")
        .env_remove("QUICK_NOTES_DEBOUNCE_MS")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn create(data_dir: &Path, title: &str, content: &str) -> String {
    let output = qn(data_dir)
        .args(["new", "--title", title, "--content", content])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find(|l| l.contains("Note created:"))
        .and_then(|l| l.split_whitespace().last())
        .unwrap()
        .to_string()
}

#[test]
fn empty_store_lists_placeholder() {
    let temp = TempDir::new().unwrap();
    qn(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn create_then_list_and_search() {
    let temp = TempDir::new().unwrap();
    create(temp.path(), "Hello World", "first body");
    create(temp.path(), "bye", "second body");

    qn(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("bye"));

    qn(temp.path())
        .args(["ls", "--search", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("bye").not());
}

#[test]
fn records_use_default_keys_and_camel_case() {
    let temp = TempDir::new().unwrap();
    let id = create(temp.path(), "T", "C");

    let raw = fs::read_to_string(temp.path().join("quick-notes__v1")).unwrap();
    let notes: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(notes[0]["id"], id.as_str());
    assert_eq!(notes[0]["title"], "T");
    assert!(notes[0]["createdAt"].is_i64());
    assert!(notes[0]["updatedAt"].is_i64());

    let selected = fs::read_to_string(temp.path().join("quick-notes__selected")).unwrap();
    assert_eq!(selected, id);
}

#[test]
fn edit_and_show() {
    let temp = TempDir::new().unwrap();
    let id = create(temp.path(), "Draft", "");

    qn(temp.path())
        .args(["edit", &id[..6], "--content", "final text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated"));

    qn(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft"))
        .stdout(predicate::str::contains("final text"));
}

#[test]
fn delete_with_yes_clears_selection() {
    let temp = TempDir::new().unwrap();
    let id = create(temp.path(), "Doomed", "");

    qn(temp.path())
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    assert!(!temp.path().join("quick-notes__selected").exists());
    qn(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn delete_confirmed_on_stdin_removes_note() {
    let temp = TempDir::new().unwrap();
    let id = create(temp.path(), "Doomed", "");

    qn(temp.path())
        .args(["delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Note deleted"));

    qn(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn delete_declined_on_stdin_keeps_note() {
    let temp = TempDir::new().unwrap();
    let id = create(temp.path(), "Survivor", "");

    qn(temp.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));

    qn(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Survivor"));
}

#[test]
fn conflicting_storage_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    qn(temp.path())
        .env("QUICK_NOTES_SELECTED_KEY", "quick-notes__v1")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn unknown_id_is_an_error() {
    let temp = TempDir::new().unwrap();
    qn(temp.path())
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn corrupt_record_starts_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("quick-notes__v1"), "{{ definitely not json").unwrap();

    qn(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn storage_key_can_be_overridden_from_env() {
    let temp = TempDir::new().unwrap();
    qn(temp.path())
        .env("QUICK_NOTES_STORAGE_KEY", "work-notes")
        .args(["new", "--title", "Scoped"])
        .assert()
        .success();

    assert!(temp.path().join("work-notes").exists());
    assert!(!temp.path().join("quick-notes__v1").exists());
}

#[test]
fn config_file_is_read_from_data_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("quicknotes.toml"),
        "selected_key = \"current\"\ndebounce_ms = 10\n",
    )
    .unwrap();

    qn(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("selected_key = current"))
        .stdout(predicate::str::contains("debounce_ms = 10"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rolodex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.current_dir(home.path())
        .env("ROLODEX_HOME", home.path())
        .env_remove("ROLODEX_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn add_then_list() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .args(["add", "Alice", "555-1111", "555-2222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added: Alice"));

    rolodex(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:   Alice"))
        .stdout(predicate::str::contains("Phones: [1] 555-1111; [2] 555-2222"));

    let saved = fs::read_to_string(home.path().join("contacts.csv")).unwrap();
    assert_eq!(saved, "Name;Phone\nAlice;['555-1111', '555-2222']\n");
}

#[test]
fn empty_book_lists_message() {
    let home = TempDir::new().unwrap();
    rolodex(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found in the address book."));
    assert!(home.path().join("contacts.csv").exists());
}

#[test]
fn file_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("other.csv");

    rolodex(&home)
        .args(["--file", file.to_str().unwrap(), "add", "Bob"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "Name;Phone\nBob;[]\n");
    assert!(!home.path().join("contacts.csv").exists());
}

#[test]
fn configured_contacts_file_is_used() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .args(["config", "contacts-file", "book.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts-file set to book.csv"));

    rolodex(&home).args(["add", "Carol"]).assert().success();
    assert!(home.path().join("book.csv").exists());

    rolodex(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts-file = book.csv"));
}

#[test]
fn duplicate_add_fails() {
    let home = TempDir::new().unwrap();
    rolodex(&home).args(["add", "Alice"]).assert().success();
    rolodex(&home)
        .args(["add", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Alice' already exists"));
}

#[test]
fn phone_commands() {
    let home = TempDir::new().unwrap();
    rolodex(&home).args(["add", "Dana", "1"]).assert().success();
    rolodex(&home)
        .args(["add-phone", "Dana", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 phone number(s) added to Dana"));
    rolodex(&home)
        .args(["edit-phone", "Dana", "2", "20"])
        .assert()
        .success();
    rolodex(&home)
        .args(["delete-phone", "Dana", "1"])
        .assert()
        .success();

    rolodex(&home)
        .args(["show", "Dana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 20\n2. 3"));
}

#[test]
fn rename_and_delete() {
    let home = TempDir::new().unwrap();
    rolodex(&home).args(["add", "Bob", "555"]).assert().success();
    rolodex(&home)
        .args(["mv", "Bob", "Robert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name changed: Bob -> Robert"));
    rolodex(&home)
        .args(["show", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Bob' record not found"));
    rolodex(&home)
        .args(["rm", "Robert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record deleted: Robert"));

    let saved = fs::read_to_string(home.path().join("contacts.csv")).unwrap();
    assert_eq!(saved, "Name;Phone\n");
}

#[test]
fn malformed_rows_are_reported_and_kept_in_backup() {
    let home = TempDir::new().unwrap();
    let original = "Name;Phone\nAlice;['555-1111'\nBob;['555-2222']\n";
    fs::write(home.path().join("contacts.csv"), original).unwrap();

    rolodex(&home)
        .args(["show", "Bob"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: skipped line 2"))
        .stderr(predicate::str::contains("contacts.csv.bak"))
        .stdout(predicate::str::contains("1. 555-2222"));

    let saved = fs::read_to_string(home.path().join("contacts.csv")).unwrap();
    assert_eq!(saved, "Name;Phone\nBob;['555-2222']\n");
    let backup = fs::read_to_string(home.path().join("contacts.csv.bak")).unwrap();
    assert_eq!(backup, original);
}

#[test]
fn headerless_file_survives_list() {
    let home = TempDir::new().unwrap();
    let original = "Alice;['555-1111']\nBob;['555-2222']\n";
    fs::write(home.path().join("contacts.csv"), original).unwrap();

    rolodex(&home)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("has no Name;Phone header"))
        .stdout(predicate::str::contains("No records found in the address book."));

    let backup = fs::read_to_string(home.path().join("contacts.csv.bak")).unwrap();
    assert_eq!(backup, original);
}

#[test]
fn clean_file_gets_no_backup() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("contacts.csv"), "Name;Phone\nBob;[]\n").unwrap();

    rolodex(&home).arg("list").assert().success();
    assert!(!home.path().join("contacts.csv.bak").exists());
}

#[test]
fn skipped_rows_are_logged_at_warn() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("contacts.csv"),
        "Name;Phone\nAlice;['1']\nAlice;['2']\nCarol;not a list\n",
    )
    .unwrap();

    rolodex(&home)
        .env("RUST_LOG", "warn")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed row"))
        .stderr(predicate::str::contains(
            "duplicate contact in file, keeping the later row",
        ))
        .stderr(predicate::str::contains("1 duplicate row(s) replaced"));
}

#[test]
fn verbose_logs_load_and_save() {
    let home = TempDir::new().unwrap();
    rolodex(&home)
        .args(["--verbose", "add", "Gail"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded contacts"))
        .stderr(predicate::str::contains("saved contacts"));
}

#[test]
fn shell_is_the_default_and_saves_on_exit() {
    let home = TempDir::new().unwrap();
    rolodex(&home)
        .write_stdin("1\nEve\n555-7777\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added: Eve"))
        .stdout(predicate::str::contains("Name:   Eve"))
        .stdout(predicate::str::contains("See you later, Pal."));

    let saved = fs::read_to_string(home.path().join("contacts.csv")).unwrap();
    assert_eq!(saved, "Name;Phone\nEve;['555-7777']\n");
}

#[test]
fn shell_saves_at_end_of_input() {
    let home = TempDir::new().unwrap();
    rolodex(&home)
        .arg("shell")
        .write_stdin("add\nFrank\n\n")
        .assert()
        .success();

    let saved = fs::read_to_string(home.path().join("contacts.csv")).unwrap();
    assert_eq!(saved, "Name;Phone\nFrank;[]\n");
}

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn keeper(data_file: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keeper"));
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn greets_and_says_goodbye() {
    let tmp = tempdir().unwrap();
    let mut cmd = keeper(&tmp.path().join("keeper.json"));
    cmd.write_stdin("hello\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to keeper!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn unknown_command_is_reported_and_session_continues() {
    let tmp = tempdir().unwrap();
    let mut cmd = keeper(&tmp.path().join("keeper.json"));
    cmd.write_stdin("frobnicate\nhello\nexit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn add_contact_persists_across_sessions() {
    let tmp = tempdir().unwrap();
    let data_file = tmp.path().join("keeper.json");

    // name, phone, birthday, then six blanks (email + five address fields)
    let mut cmd = keeper(&data_file);
    cmd.write_stdin("add-contact\nAnn\n1234567890\n01.01.2000\n\n\n\n\n\n\nexit\n");
    cmd.assert().success().stdout(predicate::str::contains("Contact Ann added."));

    let mut cmd = keeper(&data_file);
    cmd.write_stdin("phone Ann\nshow-birthday Ann\nexit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("01.01.2000"));
}

#[test]
fn cancelled_add_is_not_persisted() {
    let tmp = tempdir().unwrap();
    let data_file = tmp.path().join("keeper.json");

    // EOF right after the name aborts the collection and ends the session
    let mut cmd = keeper(&data_file);
    cmd.write_stdin("add-contact\nAnn\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("interrupted"))
        .stdout(predicate::str::contains("Good bye!"));

    let mut cmd = keeper(&data_file);
    cmd.write_stdin("contacts\nexit\n");
    cmd.assert().success().stdout(predicate::str::contains("No contacts found"));
}

#[test]
fn quoted_arguments_stay_one_token() {
    let tmp = tempdir().unwrap();
    let data_file = tmp.path().join("keeper.json");

    let mut cmd = keeper(&data_file);
    cmd.write_stdin(
        "add-note\nshopping list\nmilk and bread\nfood\nadd-tag \"shopping list\" urgent\nnotes\nexit\n",
    );
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Note shopping list added."))
        .stdout(predicate::str::contains("food, urgent"));
}

#[test]
fn search_suggests_a_near_match() {
    let tmp = tempdir().unwrap();
    let data_file = tmp.path().join("keeper.json");

    let mut cmd = keeper(&data_file);
    cmd.write_stdin("add-contact\nAnn\n\n\n\n\n\n\n\n\nsearch-contacts Anne\nexit\n");
    cmd.assert().success().stdout(predicate::str::contains("Did you mean 'Ann'?"));
}

#[test]
fn validation_reprompts_instead_of_failing() {
    let tmp = tempdir().unwrap();
    let data_file = tmp.path().join("keeper.json");

    // bad phone once, then a good one
    let mut cmd = keeper(&data_file);
    cmd.write_stdin("add-contact\nAnn\n12345\n1234567890\n\n\n\n\n\n\n\nphone Ann\nexit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("phone number must contain exactly 10 digits"))
        .stdout(predicate::str::contains("1234567890"));
}

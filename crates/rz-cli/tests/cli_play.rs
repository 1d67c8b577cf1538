//! Integration tests for the `rz` CLI `play` command.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn razukan(save_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("razukan").unwrap();
    cmd.arg("--save-dir").arg(save_dir.path()).arg("--seed").arg("42");
    cmd
}

#[test]
fn starts_in_the_castle() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("normal\nlook\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tales of Razukan"))
        .stdout(predicate::str::contains("You wake up in a dimly lit room"))
        .stdout(predicate::str::contains("Locked directions: north"));
}

#[test]
fn difficulty_prompt_repeats_until_valid() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("impossible\nHARD\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid difficulty 'impossible'"))
        .stdout(predicate::str::contains("You wake up"));
}

#[test]
fn locked_door_and_key() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("easy\ngo north\nget key\nuse key\ngo north\nQUIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The north exit is locked."))
        .stdout(predicate::str::contains(
            "You used the key to unlock the door and it vanishes.",
        ))
        .stdout(predicate::str::contains("You go north. Now in Castle Hall."));
}

#[test]
fn unknown_commands_are_reported() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("normal\nxyzzy\nattack\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try 'help'."))
        .stdout(predicate::str::contains("Attack what?"));
}

#[test]
fn save_writes_a_slot_file() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("normal\nget key\nsave 3\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game saved."));

    let text = fs::read_to_string(dir.path().join("razukan_3.json")).unwrap();
    assert!(text.contains("\"player\""));
    assert!(text.contains("\"rooms\""));

    razukan(&dir)
        .write_stdin("normal\nload 3\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game loaded."))
        .stdout(predicate::str::contains("strange symbol, key"));
}

#[test]
fn corrupt_save_starts_over() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("razukan_1.json"), "not a save").unwrap();
    razukan(&dir)
        .write_stdin("normal\nload\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Save file corrupted. Started new game."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    razukan(&dir).write_stdin("").assert().success();
    razukan(&dir).write_stdin("normal\nlook\n").assert().success();
}

#[test]
fn quit_must_stand_alone() {
    let dir = TempDir::new().unwrap();
    razukan(&dir)
        .write_stdin("normal\nquit now\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try 'help'."))
        .stdout(predicate::str::contains("Inventory: "));
}

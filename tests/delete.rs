use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn directory_cmd(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("DIRECTORY_FILE").arg("--file").arg(file);
    cmd
}

fn add(file: &Path, name: &str) {
    directory_cmd(file)
        .args(["add", "--name", name, "--phone", "0801234567", "--email", "x@y.z"])
        .assert()
        .success();
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("adresar.json");

    // Attempt to delete from an empty directory
    directory_cmd(&file)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The directory is empty."));

    add(&file, "Patricia");
    add(&file, "Diane");

    // Attempt to delete non existing contact
    directory_cmd(&file)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' not found"));

    // Declined
    directory_cmd(&file)
        .args(["delete", "--name", "Diane"])
        .write_stdin("N\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete contact 'Diane'? (y/n): ",
        ))
        .stdout(predicate::str::contains("Deletion cancelled."));

    // Confirmed
    directory_cmd(&file)
        .args(["delete", "--name", "Diane"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Diane' deleted."));

    directory_cmd(&file)
        .args(["delete", "--name", "Patricia", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Patricia' deleted."));

    directory_cmd(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("The directory is empty.\n");
    Ok(())
}

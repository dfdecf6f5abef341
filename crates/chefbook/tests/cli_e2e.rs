#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn chefbook_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("chefbook"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CHEFBOOK_DATA_DIR")
        .env_remove("CHEFBOOK_CUSTOMERS_FILE")
        .env_remove("CHEFBOOK_BOOKINGS_FILE")
        .env_remove("CHEFBOOK_BIRTHDAY_WINDOW")
        .arg("--data-dir")
        .arg(temp.path().join("data"))
        .arg("--config")
        .arg(temp.path().join("chefbook.toml"));
    cmd
}

#[test]
fn test_customer_workflow() {
    let temp = TempDir::new().unwrap();
    let customers_csv = temp.path().join("data").join("customers.csv");

    // 1. Add
    chefbook_cmd(&temp)
        .args(["add", "Alice", "--phone", "0501112233", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added customer Alice."));
    assert!(customers_csv.exists());

    let header = fs::read_to_string(&customers_csv).unwrap();
    assert!(header.starts_with("id,name,phones,birthday,address,email,notes"));

    // 2. Duplicate names are refused
    chefbook_cmd(&temp)
        .args(["add", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // 3. Note with tags and separators
    chefbook_cmd(&temp)
        .args(["note", "add", "Alice", "Soup; no salt #4", "--tag", "allergy"])
        .assert()
        .success();

    // 4. Show reads everything back from disk
    chefbook_cmd(&temp)
        .args(["show", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0501112233"))
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains("[0] Soup; no salt #4 #allergy"));

    // 5. Find by tag
    chefbook_cmd(&temp)
        .args(["find", "--tag", "allergy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));

    // 6. Delete the only customer removes the file
    chefbook_cmd(&temp)
        .args(["delete", "Alice"])
        .assert()
        .success();
    assert!(!customers_csv.exists());

    chefbook_cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn test_invalid_input_fails_with_message() {
    let temp = TempDir::new().unwrap();

    chefbook_cmd(&temp)
        .args(["add", "Al"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("name"));

    chefbook_cmd(&temp)
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found: customer 'Nobody'"));
}

#[test]
fn test_booking_workflow() {
    let temp = TempDir::new().unwrap();

    chefbook_cmd(&temp).args(["add", "Alice"]).assert().success();
    chefbook_cmd(&temp)
        .args(["book", "Alice", "15.06.2099 20:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked Alice for 15.06.2099 20:00"));

    chefbook_cmd(&temp)
        .args(["bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15.06.2099 20:00  Alice"));

    chefbook_cmd(&temp)
        .args(["book", "Alice", "tomorrow"])
        .assert()
        .failure();

    chefbook_cmd(&temp)
        .args(["cancel", "no-such-booking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("booking 'no-such-booking'"));
}

#[test]
fn test_reset_requires_yes() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    chefbook_cmd(&temp).args(["add", "Alice"]).assert().success();
    chefbook_cmd(&temp).args(["reset"]).assert().failure();
    assert!(data.join("customers.csv").exists());

    chefbook_cmd(&temp)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 customer(s)"));
    assert!(!data.join("customers.csv").exists());
}

#[test]
fn test_config_file_sets_store_names() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chefbook.toml"),
        "customers_file = \".customers.csv\"\nbookings_file = \".bookings.csv\"\n",
    )
    .unwrap();

    chefbook_cmd(&temp).args(["add", "Alice"]).assert().success();
    assert!(temp.path().join("data").join(".customers.csv").exists());
}

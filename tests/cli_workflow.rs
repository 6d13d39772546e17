#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shelf_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.env("SHELF_HOME", home.as_os_str())
        .env_remove("SHELF_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn seed(home: &Path) {
    fs::write(
        home.join("library.json"),
        r#"[{"id":5,"title":"T","author":"A","year":"2000","status":"в наличии"}]"#,
    )
    .unwrap();
    fs::write(home.join("counter.txt"), "5").unwrap();
}

fn catalog(home: &Path) -> serde_json::Value {
    let content = fs::read_to_string(home.join("library.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_add_to_empty_home_creates_both_files() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book \"Dune\" saved."));

    assert_eq!(fs::read_to_string(temp.path().join("counter.txt")).unwrap(), "1");
    let books = catalog(temp.path());
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["year"], "1965");
    assert_eq!(books[0]["status"], "in stock");
}

#[test]
fn test_first_book_keeps_a_positive_id_across_runs() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();
    shelf_cmd(temp.path())
        .args(["add", "Solaris", "Lem", "1961"])
        .assert()
        .success();

    shelf_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("id: 1\nTitle: Dune"))
        .stdout(predicate::str::contains("id: 2\nTitle: Solaris"))
        .stdout(predicate::str::contains("id: 0\n").not());
}

#[test]
fn test_config_shows_and_reads_single_keys() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .args(["config", "counter-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counter.txt"));

    shelf_cmd(temp.path())
        .args(["config", "default-status", "lost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("default-status"));
    assert!(!temp.path().join("config.json").exists());
    assert!(!temp.path().join("library.json").exists());
}

#[test]
fn test_add_keeps_existing_records() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    shelf_cmd(temp.path())
        .args(["add", "X", "Y", "2001"])
        .assert()
        .success();

    let books = catalog(temp.path());
    assert_eq!(books.as_array().unwrap().len(), 2);
    assert_eq!(
        books[0],
        serde_json::json!({"id":5,"title":"T","author":"A","year":"2000","status":"в наличии"})
    );
    assert_eq!(books[1]["id"], 6);
    assert_eq!(fs::read_to_string(temp.path().join("counter.txt")).unwrap(), "6");
}

#[test]
fn test_remove_and_missing_id() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    shelf_cmd(temp.path())
        .args(["remove", "999"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Book with id 999 not found"));
    assert_eq!(catalog(temp.path()).as_array().unwrap().len(), 1);

    shelf_cmd(temp.path())
        .args(["rm", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book \"T\" removed."));
    assert_eq!(catalog(temp.path()), serde_json::json!([]));

    shelf_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The library has no books."));
}

#[test]
fn test_search_is_exact() {
    let temp = TempDir::new().unwrap();
    for (title, year) in [("One", "2000"), ("Two", "2000"), ("Three", "1999")] {
        shelf_cmd(temp.path())
            .args(["add", title, "Author", year])
            .assert()
            .success();
    }

    shelf_cmd(temp.path())
        .args(["search", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: One"))
        .stdout(predicate::str::contains("Title: Two"))
        .stdout(predicate::str::contains("Title: Three").not());

    shelf_cmd(temp.path())
        .args(["search", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books match the search query."));
}

#[test]
fn test_change_status() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    shelf_cmd(temp.path())
        .args(["status", "5", "выдана"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed to \"выдана\""));
    assert_eq!(catalog(temp.path())[0]["status"], "выдана");

    shelf_cmd(temp.path())
        .args(["status", "5", "nonsense"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid status"));
    assert_eq!(catalog(temp.path())[0]["status"], "выдана");
}

#[test]
fn test_invalid_input_is_reported() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .args(["add", "   ", "Author", "2000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid title"));

    shelf_cmd(temp.path())
        .args(["add", "Title", "Author", "3000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid year"));

    shelf_cmd(temp.path())
        .args(["remove", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid id"));

    assert!(!temp.path().join("counter.txt").exists());
}

#[test]
fn test_list_shows_records_under_heading() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    shelf_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Books in the library:"))
        .stdout(predicate::str::contains(
            "id: 5\nTitle: T\nAuthor: A\nYear: 2000\nStatus: в наличии\n",
        ));

    shelf_cmd(temp.path())
        .args(["ls", "--short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T / A (2000)"));
}

#[test]
fn test_corrupt_counter_fails_the_add() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("counter.txt"), "not a number").unwrap();

    shelf_cmd(temp.path())
        .args(["add", "X", "Y", "2001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage is corrupt"));
    assert!(!temp.path().join("library.json").exists());
}

#[test]
fn test_unreadable_catalog_is_never_overwritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("library.json"), "[{\"id\": 1,").unwrap();

    shelf_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing could be read"));

    shelf_cmd(temp.path())
        .args(["add", "X", "Y", "2001"])
        .assert()
        .failure();
    assert_eq!(
        fs::read_to_string(temp.path().join("library.json")).unwrap(),
        "[{\"id\": 1,"
    );
}

#[test]
fn test_config_changes_file_names() {
    let temp = TempDir::new().unwrap();

    shelf_cmd(temp.path())
        .args(["config", "catalog-file", "books.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-file set to books.json"));

    shelf_cmd(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-file = books.json"))
        .stdout(predicate::str::contains("default-status = in stock"));

    shelf_cmd(temp.path())
        .args(["add", "X", "Y", "2001"])
        .assert()
        .success();
    assert!(temp.path().join("books.json").exists());
    assert!(!temp.path().join("library.json").exists());
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other");

    shelf_cmd(temp.path())
        .args(["--data-dir", other.to_str().unwrap(), "add", "X", "Y", "2001"])
        .assert()
        .success();

    assert!(other.join("library.json").exists());
    assert!(!temp.path().join("library.json").exists());
}

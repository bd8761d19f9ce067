#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_cli_help() {
    // Arrange
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.arg("--help");

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_movies_list_help() {
    // Arrange
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["movies", "list", "--help"]);

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_movies_show_help() {
    // Arrange
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["movies", "show", "--help"]);

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--title"));
}

#[test]
fn test_movies_show_requires_title() {
    // Arrange
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["movies", "show"]);

    // Act & Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_invalid_base_url_rejected() {
    // Arrange
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["movies", "list", "--base-url", "not a url"]);

    // Act & Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--base-url"));
}

#[test]
fn test_config_show_default() {
    // Arrange
    let temp_dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["--dir", temp_dir.path().to_str().unwrap(), "config", "show"]);

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kareemy.github.io"));
}

#[test]
fn test_config_set_url_then_show() {
    // Arrange
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    let mut set_cmd = cargo_bin_cmd!("moviebuffs");
    set_cmd.args(["--dir", dir, "config", "set-url", "http://localhost:9999/"]);

    // Act
    set_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9999/"));

    // Assert
    let mut show_cmd = cargo_bin_cmd!("moviebuffs");
    show_cmd.args(["--dir", dir, "config", "show"]);
    show_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9999/"));
}

#[test]
fn test_movies_list_connection_refused() {
    // Arrange: nothing listens on port 1, so the fetch fails fast.
    let mut cmd = cargo_bin_cmd!("moviebuffs");
    cmd.args(["movies", "list", "--base-url", "http://127.0.0.1:1/"]);

    // Act & Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("catalog fetch failed (network)"));
}

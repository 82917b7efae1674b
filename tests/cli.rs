//! CLI argument parsing and URL building tests — no network I/O.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("placehold");
    cmd.env("PLACEHOLD_CONFIG", "/nonexistent/placehold.toml")
        .env_remove("PLACEHOLD_BASE_URL")
        .env_remove("PLACEHOLD_REPLAY")
        .env_remove("PLACEHOLD_REC")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn gray_url_without_text() {
    cmd()
        .args(["url", "--gray", "--no-random"])
        .assert()
        .success()
        .stdout("https://placehold.co/640x480/CCCCCC/000000/jpg\n");
}

#[test]
fn explicit_text_and_size() {
    cmd()
        .args(["url", "-w", "200", "-H", "100", "--gray", "--text", "well hi there", "-f", "PNG"])
        .assert()
        .success()
        .stdout("https://placehold.co/200x100/CCCCCC/000000/png?text=well+hi+there\n");
}

#[test]
fn random_url_shape() {
    cmd()
        .args(["url", "--format", "webp"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"^https://placehold\.co/640x480/[0-9A-F]{6}/(000000|FFFFFF)/webp\?text=[a-z]+\n$",
            )
            .unwrap(),
        );
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[service]\nbase_url = \"http://localhost:1234\"\n\n[defaults]\nwidth = 32\nheight = 16\nformat = \"gif\"\ngrayscale = true\n",
    )
    .unwrap();

    cmd()
        .args(["url", "--no-random", "--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout("http://localhost:1234/32x16/CCCCCC/000000/gif\n");
}

#[test]
fn invalid_format_exits_with_error() {
    cmd()
        .args(["url", "--format", "bmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image format \"bmp\""))
        .stderr(predicate::str::contains("jpg, jpeg, png, webp, gif"));
}

#[test]
fn zero_width_exits_with_error() {
    cmd()
        .args(["url", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image dimensions must be positive"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "not = valid = toml").unwrap();

    cmd()
        .args(["url", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_subcommand_exits_with_error() {
    cmd().assert().failure();
}

use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("eventdesk");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("eventdesk"));
}

#[test]
fn rejects_existing_output_without_force() {
    let dir = std::env::temp_dir().join("eventdesk-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("events.json");
    std::fs::write(&out, "[]").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("eventdesk");
    cmd.arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

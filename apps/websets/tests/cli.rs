use assert_cmd::Command;
use predicates::prelude::*;

fn websets() -> Command {
    let mut cmd = Command::cargo_bin("websets").unwrap();
    cmd.env_remove("EXA_API_KEY")
        .env_remove("EXA_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    websets()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("items"));
}

#[test]
fn tools_subcommand_lists_registry() {
    websets()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("create_webset"))
        .stdout(predicate::str::contains("get_webset_status"));
}

#[test]
fn create_without_key_prints_failure_envelope() {
    websets()
        .env("EXA_BASE_URL", "http://127.0.0.1:9")
        .args(["create", "robotics startups", "--no-wait"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"isError\": true"))
        .stdout(predicate::str::contains("EXA_API_KEY"));
}

#[test]
fn zero_count_is_rejected_by_parser() {
    websets()
        .args(["create", "q", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--count"));
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.arg("run")
        .arg("--quiet")
        .arg("-p")
        .arg("imagename-cli")
        .arg("--");
    cmd
}

#[test]
fn cli_no_args() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("USAGE"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBCOMMANDS:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn cli_check_bad_tag() {
    cli()
        .arg("check")
        .arg("library/ubuntu:£$%^&*")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag: Tag must match"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_check_missing_repository_part() {
    cli()
        .arg("check")
        .arg("library//ubuntu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Illegal use of empty name part"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_check_with_registry() {
    cli()
        .arg("check")
        .arg("docker.io/library/ubuntu")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok\n"))
        .stdout(predicate::str::contains("Using registry: docker.io"));
}

#[test]
fn cli_check_without_registry() {
    cli()
        .arg("check")
        .arg("ubuntu:20.04")
        .assert()
        .success()
        .stdout(predicate::eq("ok\n"));
}

#[test]
fn cli_fix() {
    cli()
        .arg("fix")
        .arg("library/My App:_v1")
        .assert()
        .success()
        .stdout(predicate::str::contains("repository: my-app"))
        .stdout(predicate::str::contains("canonical:  library/my-app:v1"))
        .stdout(predicate::str::contains("valid:      true"));
}

#[test]
fn cli_parse_lines() {
    cli()
        .arg("parse")
        .arg("ubuntu")
        .assert()
        .success()
        .stdout(predicate::str::contains("registry:   -"))
        .stdout(predicate::str::contains("namespace:  -"))
        .stdout(predicate::str::contains("repository: ubuntu"))
        .stdout(predicate::str::contains("tag:        -"));
}

#[test]
fn cli_parse_json() {
    let output = cli()
        .arg("parse")
        .arg("--json")
        .arg("docker.io/ubuntu:latest")
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["registry"], "docker.io");
    assert_eq!(report["namespace"], serde_json::Value::Null);
    assert_eq!(report["repository"], "ubuntu");
    assert_eq!(report["tag"], "latest");
    assert_eq!(report["canonical"], "docker.io/ubuntu:latest");
    assert_eq!(report["valid"], true);
}

#[test]
fn cli_parse_malformed() {
    cli()
        .arg("parse")
        .arg("///")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed image name"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_check_tags() {
    cli()
        .arg("check-tags")
        .arg("latest,,1.0,trusty")
        .assert()
        .success()
        .stdout(predicate::eq("ok\n"));
}

#[test]
fn cli_check_tags_empty_list() {
    cli()
        .arg("check-tags")
        .assert()
        .success()
        .stdout(predicate::eq("ok\n"));
}

#[test]
fn cli_check_tags_bad_tag() {
    cli()
        .arg("check-tags")
        .arg("latest,rc 1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag: Tag must match"))
        .stdout(predicate::str::is_empty());
}

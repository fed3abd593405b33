use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn vls(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vls").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let tmp = tempdir().unwrap();
    vls(tmp.path()).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn render_to_stdout() {
    let tmp = tempdir().unwrap();
    vls(tmp.path())
        .args(["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"<script type="application/ld+json">"#))
        .stdout(predicate::str::contains("mailto:contacto@venezuelanlegalservices.com"));
}

#[test]
fn render_writes_requested_file() {
    let tmp = tempdir().unwrap();
    let target = tmp.path().join("out/index.html");

    vls(tmp.path()).args(["render", "-o"]).arg(&target).assert().success();

    let html = fs::read_to_string(&target).unwrap();
    assert_eq!(html.matches("service-card").count(), 4);
}

#[test]
fn render_uses_configured_output_path() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("vls.toml"), "[output]\npath = \"site/index.html\"\n").unwrap();

    vls(tmp.path()).arg("render").assert().success();

    assert!(tmp.path().join("site/index.html").is_file());
}

#[test]
fn environment_overrides_contact_email() {
    let tmp = tempdir().unwrap();
    vls(tmp.path())
        .env("VLS__CONTACT__EMAIL", "hola@example.com")
        .args(["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"href="mailto:hola@example.com""#));
}

#[test]
fn json_ld_prints_structured_data() {
    let tmp = tempdir().unwrap();
    let output = vls(tmp.path()).arg("json-ld").assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["@type"], "LegalService");
    assert_eq!(value["mainEntity"]["mainEntity"].as_array().map(Vec::len), Some(3));
}

#[test]
fn missing_config_file_fails() {
    let tmp = tempdir().unwrap();
    vls(tmp.path())
        .args(["--config", "missing.toml", "json-ld"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

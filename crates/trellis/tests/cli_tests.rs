//! Integration tests for the trellis CLI

#![allow(deprecated)]

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use trellis_testkit::{temp_dir_in_workspace, write_config_file};

fn trellis(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version_flag() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}

#[test]
fn test_init_defaults_to_english() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    trellis(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("language: en"));

    let config = fs::read_to_string(root.join(".trellis/config.yaml")).unwrap();
    assert!(config.contains("language: en\n"));

    let index = fs::read_to_string(root.join(".trellis/spec/backend/index.md")).unwrap();
    assert!(index.contains("All documentation should be written in **English**."));
    assert!(root.join("AGENTS.md").is_file());
}

#[test]
fn test_init_with_chinese() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    trellis(root).args(["init", "--lang", "zh"]).assert().success();

    let guides = fs::read_to_string(root.join(".trellis/spec/guides/index.md")).unwrap();
    assert!(guides.contains("所有文档建议使用**中文**编写。"));
    assert!(!guides.contains("{{LANGUAGE_PROMPT}}"));
}

#[test]
fn test_init_rejects_unsupported_language() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    trellis(root)
        .args(["init", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_LANGUAGE"));

    assert!(!root.join(".trellis").exists());
}

#[test]
fn test_init_keeps_existing_language() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_config_file(root, "language: zh\n");

    trellis(root).arg("init").assert().success();

    let index = fs::read_to_string(root.join(".trellis/spec/frontend/index.md")).unwrap();
    assert!(index.contains("所有文档建议使用**中文**编写。"));
}

#[test]
fn test_init_twice_skips_existing_files() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    trellis(root).arg("init").assert().success();
    fs::write(root.join("AGENTS.md"), "edited\n").unwrap();

    trellis(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(root.join("AGENTS.md")).unwrap(), "edited\n");

    trellis(root).args(["init", "--force"]).assert().success();
    assert_ne!(fs::read_to_string(root.join("AGENTS.md")).unwrap(), "edited\n");
}

#[test]
fn test_config_show_outside_project() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: en"));
}

#[test]
fn test_config_show_json() {
    let temp = temp_dir_in_workspace();
    write_config_file(temp.path(), "language: zh\n");

    let output = trellis(temp.path())
        .args(["config", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["language"], "zh");
    assert_eq!(json["initialized"], true);
}

#[test]
fn test_config_show_from_subdirectory() {
    let temp = temp_dir_in_workspace();
    write_config_file(temp.path(), "language: zh\n");
    let subdir = temp.path().join("src").join("deep");
    fs::create_dir_all(&subdir).unwrap();

    trellis(&subdir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: zh"));
}

#[test]
fn test_config_show_corrupt_file_falls_back() {
    let temp = temp_dir_in_workspace();
    write_config_file(temp.path(), "language: [zh\n");

    trellis(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: en"));
}

#[test]
fn test_config_set_language() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    trellis(root).arg("init").assert().success();

    trellis(root)
        .args(["config", "set-language", "zh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language set to 'zh'"));

    let config = fs::read_to_string(root.join(".trellis/config.yaml")).unwrap();
    assert!(config.ends_with("language: zh\n"));
}

#[test]
fn test_config_set_language_outside_project_fails() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .args(["config", "set-language", "zh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trellis init"));
}

#[test]
fn test_templates_list() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend/index"))
        .stdout(predicate::str::contains(".trellis/spec/guides/index.md"));
}

#[test]
fn test_templates_list_json() {
    let temp = temp_dir_in_workspace();

    let output = trellis(temp.path())
        .args(["templates", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 19);
    assert_eq!(entries[0]["name"], "agents");
    assert_eq!(entries[0]["target"], "AGENTS.md");
}

#[test]
fn test_render_with_explicit_language() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .args(["render", "guides/index", "--lang", "zh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Thinking Guides\n"))
        .stdout(predicate::str::contains("> 所有文档建议使用**中文**编写。\n"));
}

#[test]
fn test_render_uses_project_language() {
    let temp = temp_dir_in_workspace();
    write_config_file(temp.path(), "language: zh\n");

    trellis(temp.path())
        .args(["render", "backend/error-handling"])
        .assert()
        .success()
        .stdout(predicate::str::contains("所有文档建议使用**中文**编写。"));
}

#[test]
fn test_render_unknown_template() {
    let temp = temp_dir_in_workspace();

    trellis(temp.path())
        .args(["render", "backend/nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_NOT_FOUND"));
}

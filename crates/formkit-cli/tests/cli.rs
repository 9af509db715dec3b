/*
 * cli.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the formkit binary.
 */

use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Shared fixture from the formkit crate
fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("../formkit/test-fixtures")
        .join(name)
}

fn formkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_formkit"))
        .args(args)
        .output()
        .expect("Failed to execute formkit")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "formkit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list() {
    let config = fixture_path("bootstrap.yaml");
    let output = formkit(&["list", "--config", config.to_str().unwrap()]);
    assert_eq!(
        stdout(&output),
        "default\n  default (default)\n  vertical_form\n  vertical_boolean\n\
         inline\n  default (default)\n  vertical_form\n  vertical_boolean\n  inline_form\n"
    );
}

#[test]
fn test_show_wrapper() {
    let config = fixture_path("bootstrap.yaml");
    let output = formkit(&[
        "show",
        "--config",
        config.to_str().unwrap(),
        "--context",
        "inline",
        "--wrapper",
        "inline_form",
    ]);
    let text = stdout(&output);
    assert!(text.starts_with("inline_form:\n"), "unexpected outline: {}", text);
    assert!(text.contains("use label"));
    assert!(text.contains("wrapper error (no tag)"));
}

#[test]
fn test_render_with_mapping() {
    let config = fixture_path("bootstrap.yaml");
    let output = formkit(&[
        "render",
        "--config",
        config.to_str().unwrap(),
        "--attribute",
        "tos",
        "--input-type",
        "boolean",
        "--label",
        "Accept",
        "--slot",
        "input=<input type=\"checkbox\">",
    ]);
    assert_eq!(
        stdout(&output),
        "<fieldset class=\"mb-3\"><div class=\"form-check\">\
         <input type=\"checkbox\"><label for=\"tos\" class=\"form-label\">Accept</label>\
         </div></fieldset>\n"
    );
}

#[test]
fn test_render_unknown_wrapper_fails() {
    let output = formkit(&["render", "--wrapper", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Couldn't find wrapper with name nope"),
        "unexpected stderr: {}",
        stderr
    );
}

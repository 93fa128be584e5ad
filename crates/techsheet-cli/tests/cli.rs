use assert_cmd::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(rel: &str) -> String {
    let path = repo_root().join("fixtures").join(rel);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path.to_string_lossy().to_string()
}

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("techsheet-cli"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn extract_prints_objects_as_json() {
    let assert = cli()
        .args(["extract", fixture("svg/sample.svg").as_str()])
        .assert()
        .success();
    assert_eq!(
        stdout_json(assert.get_output()),
        json!([
            { "id": "rect1", "type": "rect", "width": 100.0, "height": 50.0 },
            { "id": "rect2", "type": "rect", "width": 40.0, "height": 40.0 }
        ])
    );
}

#[test]
fn verify_passes_for_matching_spec() {
    let assert = cli()
        .args([
            "verify",
            "--spec",
            fixture("spec/sample.json").as_str(),
            fixture("svg/sample.svg").as_str(),
        ])
        .assert()
        .success();
    assert_eq!(stdout_json(assert.get_output()), json!([]));
}

#[test]
fn verify_exits_with_status_4_on_mismatch() {
    let assert = cli()
        .args([
            "verify",
            "--spec",
            fixture("spec/sample_wrong_width.json").as_str(),
            fixture("svg/sample.svg").as_str(),
        ])
        .assert()
        .code(4);
    assert_eq!(
        stdout_json(assert.get_output()),
        json!([{ "id": "rect1", "field": "width", "expected": 110.0, "actual": 100.0 }])
    );
}

#[test]
fn verify_tolerance_flag_widens_the_check() {
    cli()
        .args([
            "verify",
            "--tolerance",
            "10",
            "--spec",
            fixture("spec/sample_wrong_width.json").as_str(),
            fixture("svg/sample.svg").as_str(),
        ])
        .assert()
        .success();
}

#[test]
fn sheets_are_printed_even_with_mismatches() {
    let assert = cli()
        .args([
            "sheets",
            "--audience",
            "client",
            "--spec",
            fixture("spec/sample_wrong_width.json").as_str(),
            fixture("svg/sample.svg").as_str(),
        ])
        .assert()
        .success();
    let out = assert.get_output();
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Tech sheet for client:\n- rect1: 100×50 (rect)\n- rect2: 40×40 (rect)\n"
    );
    assert!(
        String::from_utf8_lossy(&out.stderr).contains("dimension mismatch"),
        "mismatch should be logged on stderr"
    );
}

#[test]
fn sheets_write_to_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("workshop.txt");

    cli()
        .args([
            "--audience",
            "workshop",
            "--locale",
            "ru",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture("svg/sample.svg").as_str(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read sheet");
    assert_eq!(
        text,
        "Тех.лист для цеха:\nID\tТип\tШирина\tВысота\nrect1\trect\t100\t50\nrect2\trect\t40\t40"
    );
}

#[test]
fn cdr_input_fails_with_unsupported_format() {
    let assert = cli().args(["extract", "drawing.cdr"]).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("CDR parsing is not implemented"), "{stderr}");
}

#[test]
fn unknown_extension_fails_with_invalid_input() {
    let assert = cli().args(["extract", "notes.txt"]).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Unsupported file type"), "{stderr}");
}

#[test]
fn usage_errors_exit_with_status_2() {
    cli().args(["extract"]).assert().code(2);
    cli()
        .args(["verify", fixture("svg/sample.svg").as_str()])
        .assert()
        .code(2);
    cli()
        .args(["--audience", "everyone", fixture("svg/sample.svg").as_str()])
        .assert()
        .code(2);
}

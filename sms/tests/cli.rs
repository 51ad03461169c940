//! Exit status and stream routing of the `sms` binary

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture is readable")
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sms-cli-{}-{name}", std::process::id()))
}

fn sms(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sms"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("sms runs")
}

fn sms_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sms"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("sms starts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("stdin accepts input");
    child.wait_with_output().expect("sms finishes")
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("utf-8 output")
}

fn assert_failed(output: &Output, message: &str) {
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {}", text(&output.stdout));
    let stderr = text(&output.stderr);
    assert!(stderr.starts_with("sms: ERROR: "), "stderr: {stderr}");
    assert!(stderr.contains(message), "stderr: {stderr}");
}

#[test]
fn reorder_writes_matrix_to_stdout() {
    let path = fixture("regression_3x3.sms");
    let output = sms(&["reorder", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(text(&output.stdout), read_fixture("regression_3x3.expected.sms"));
    assert!(output.stderr.is_empty(), "stderr: {}", text(&output.stderr));
}

#[test]
fn malformed_header_exits_with_failure() {
    let output = sms_with_stdin(&["reorder"], "3 3 X\n1 1 1\n0 0 0\n");
    assert_failed(&output, "Malformed SMS header at line 1");
}

#[test]
fn degenerate_weights_exit_with_failure() {
    let path = fixture("regression_3x3.sms");
    let output = sms(&[
        "reorder",
        "-a",
        "0",
        "-b",
        "0",
        "-c",
        "0",
        "-d",
        "0",
        "-e",
        "0",
        path.to_str().unwrap(),
    ]);
    assert_failed(&output, "weights");
}

#[test]
fn huge_header_exits_with_failure() {
    let output = sms_with_stdin(&["reorder"], &format!("{} 1 M\n0 0 0\n", usize::MAX));
    assert_failed(&output, "too large");
}

#[test]
fn reorder_in_place() {
    let path = scratch("in-place.sms");
    std::fs::write(&path, read_fixture("regression_3x3.sms")).unwrap();
    let name = path.to_str().unwrap();

    let output = sms(&["reorder", name, name]);

    assert!(output.status.success(), "stderr: {}", text(&output.stderr));
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        read_fixture("regression_3x3.expected.sms")
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn failed_run_leaves_output_untouched() {
    let input = scratch("bad-input.sms");
    let target = scratch("kept-output.sms");
    std::fs::write(&input, "2 2 M\n1 1 1\n3 3 1\n0 0 0\n").unwrap();
    std::fs::write(&target, "previous contents\n").unwrap();

    let output = sms(&["transpose", input.to_str().unwrap(), target.to_str().unwrap()]);

    assert_failed(&output, "out of range");
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "previous contents\n");
    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&target).unwrap();
}

#[test]
fn info_reads_standard_input() {
    let output = sms_with_stdin(&["info", "--short"], &read_fixture("regression_3x3.sms"));

    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(stdout.starts_with("rows:3 columns:3 nonzero:4"), "stdout: {stdout}");
}

#[cfg(target_os = "linux")]
#[test]
fn info_reads_unmappable_path() {
    let output = sms_with_stdin(&["info", "/dev/stdin"], &read_fixture("regression_3x3.sms"));

    assert!(output.status.success(), "stderr: {}", text(&output.stderr));
    let stdout = text(&output.stdout);
    assert!(stdout.contains("Rows: 3"), "stdout: {stdout}");
    assert!(stdout.contains("Non-zeros: 4"), "stdout: {stdout}");
}

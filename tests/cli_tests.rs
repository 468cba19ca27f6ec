// tests/cli_tests.rs
use boxsieve_nms::BBox;
use std::fs;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

fn boxsieve(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_boxsieve"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn boxsieve");

    let mut pipe = child.stdin.take().unwrap();
    // The binary may exit before reading stdin; only a closed pipe is tolerated.
    if let Err(e) = pipe.write_all(stdin.unwrap_or("").as_bytes()) {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "stdin write failed: {e}");
    }
    drop(pipe);

    child.wait_with_output().unwrap()
}

fn parse_boxes(output: &Output) -> Vec<BBox> {
    serde_json::from_slice(&output.stdout).expect("stdout is not a box list")
}

#[test]
fn test_stdin_bare_array() {
    let output = boxsieve(
        &["-"],
        Some("[[0,0,1,1],[5,5,6,6],[10,10,11,11]]"),
    );
    assert!(output.status.success());
    assert_eq!(
        parse_boxes(&output),
        vec![
            BBox::new(10.0, 10.0, 11.0, 11.0),
            BBox::new(5.0, 5.0, 6.0, 6.0),
            BBox::new(0.0, 0.0, 1.0, 1.0),
        ]
    );
}

#[test]
fn test_identical_boxes_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("boxes.json");
    let out = dir.path().join("kept.json");
    fs::write(&input, "[[0,0,10,10],[0,0,10,10]]").unwrap();

    let output = boxsieve(
        &[input.to_str().unwrap(), "--output", out.to_str().unwrap()],
        None,
    );
    assert!(output.status.success());

    let kept: Vec<BBox> = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(kept, vec![BBox::new(0.0, 0.0, 10.0, 10.0)]);
}

#[test]
fn test_threshold_flag_overrides_document() {
    // IoU of these two boxes is 0.64.
    let doc = r#"{"boxes": [[0,0,10,10],[2,2,10,10]], "threshold": 0.9}"#;

    let from_doc = boxsieve(&["-"], Some(doc));
    assert_eq!(parse_boxes(&from_doc).len(), 2);

    let from_flag = boxsieve(&["-", "--threshold", "0.5"], Some(doc));
    assert_eq!(parse_boxes(&from_flag).len(), 1);
}

#[test]
fn test_config_file_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"threshold": 0.9}"#).unwrap();

    let output = boxsieve(
        &["-", "--config", config.to_str().unwrap()],
        Some("[[0,0,10,10],[2,2,10,10]]"),
    );
    assert!(output.status.success());
    assert_eq!(parse_boxes(&output).len(), 2);
}

#[test]
fn test_strict_rejects_inverted_box() {
    let input = "[[0,0,10,10],[10,10,0,0]]";

    let permissive = boxsieve(&["-"], Some(input));
    assert!(permissive.status.success());

    let strict = boxsieve(&["-", "--strict"], Some(input));
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("box 1 has inverted corners"), "{stderr}");
}

#[test]
fn test_wrong_arity_fails() {
    let output = boxsieve(&["-"], Some("[[0,0,10]]"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly 4 coordinates"), "{stderr}");
}

#[test]
fn test_missing_file_fails() {
    let output = boxsieve(&["/nonexistent/boxes.json"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open boxes file"));
}

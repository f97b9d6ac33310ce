use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_markdown2html"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run markdown2html")
}

#[test]
fn converts_file_and_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("README.md");
    let output = dir.path().join("README.html");
    fs::write(&input, "# Title\n\n- a\n- b\n").expect("write input");

    let result = run(&[&input, &output]);

    assert!(result.status.success(), "expected success exit code");
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let html = fs::read_to_string(&output).expect("read output");
    assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[test]
fn missing_input_reports_and_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("output.html");

    let result = Command::new(env!("CARGO_BIN_EXE_markdown2html"))
        .current_dir(dir.path())
        .args(["nope.md", "output.html"])
        .env_remove("RUST_LOG")
        .output()
        .expect("run markdown2html");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.trim_end(), "Missing nope.md");
    assert!(!output.exists(), "output must not be created");
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.md");
    fs::write(&input, "x").expect("write input");

    let path: &Path = &input;
    for args in [vec![], vec![path], vec![path, path, path]] {
        let result = run(&args);
        assert_eq!(result.status.code(), Some(1), "args: {args:?}");
        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.starts_with("Usage: "), "stderr: {stderr}");
    }
    assert_eq!(fs::read_to_string(&input).expect("read input"), "x");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    fs::write(&input, "1. one\n").expect("write input");
    fs::write(&output, "stale content ".repeat(100)).expect("write output");

    let result = run(&[&input, &output]);

    assert!(result.status.success());
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "<ol>\n<li>one</li>\n</ol>"
    );
}

#[test]
fn unwritable_output_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.md");
    fs::write(&input, "text").expect("write input");
    let output = dir.path().join("no-such-dir").join("out.html");

    let result = run(&[&input, &output]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Failed to write"), "stderr: {stderr}");
}

#[test]
fn converting_own_output_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.md");
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");
    fs::write(&input, "# T\n\ntext **b**\n\n- i\n").expect("write input");

    assert!(run(&[&input, &first]).status.success());
    assert!(run(&[&first, &second]).status.success());

    let html = fs::read_to_string(&second).expect("read output");
    assert!(html.starts_with("<p><h1>T</h1>"), "got: {html}");
    assert!(html.ends_with("</ul></p>"), "got: {html}");
}

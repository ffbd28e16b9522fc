//! Integration tests for batch mode (-c/--command, script files, -o/--output)

use std::io::Write;
use std::process::{Command, Stdio};

fn cellpad(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    // Tests must not depend on a user's ~/.config/cellpad/config.toml.
    let config = tempfile::NamedTempFile::new().expect("temp config");
    let mut child = Command::new(env!("CARGO_BIN_EXE_cellpad"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute cellpad");

    {
        let mut child_stdin = child.stdin.take().expect("stdin");
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).expect("write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for cellpad");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn commands(lines: &[&str]) -> Vec<String> {
    lines.iter().flat_map(|l| ["-c".to_string(), l.to_string()]).collect()
}

fn run_commands(lines: &[&str]) -> (String, String, i32) {
    let args = commands(lines);
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    cellpad(&refs, None)
}

#[test]
fn test_sum_block() {
    let (stdout, _, code) = run_commands(&[
        "set A1 1",
        "set A2 2",
        "set B1 3",
        "set B2 4",
        "set C1 =SUM(A1:B2)",
        "get C1",
    ]);
    assert_eq!(stdout.trim(), "10");
    assert_eq!(code, 0);
}

#[test]
fn test_blank_cells_are_skipped() {
    let (stdout, _, code) = run_commands(&["set A1 1", "set B1 =SUM(A1:A2)", "get B1"]);
    assert_eq!(stdout.trim(), "1");
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_formula_is_shown_literally() {
    let (stdout, _, code) = run_commands(&["set A1 =FOO(A1)", "get A1"]);
    assert_eq!(stdout.trim(), "=FOO(A1)");
    assert_eq!(code, 0);
}

#[test]
fn test_print_grown_grid() {
    let (stdout, _, code) = run_commands(&["addrow", "addcol", "print"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2 + 11);
    assert!(lines[0].ends_with(" K |"));
    assert!(lines[12].starts_with("| 11 |"));
}

#[test]
fn test_copy_paste_at_edge() {
    let (stdout, _, code) = run_commands(&[
        "set A1 1",
        "set B1 2",
        "set A2 3",
        "set B2 4",
        "select A1:B2",
        "copy",
        "select J10",
        "paste",
        "get J10",
        "get I10",
        "get J9",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "1\n\n\n");
}

#[test]
fn test_bold_shows_in_table() {
    let (stdout, _, code) = run_commands(&["set A1 x", "select A1", "bold", "print"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("| 1 | **x** |"));
}

#[test]
fn test_error_exit_code() {
    let (_, stderr, code) = run_commands(&["paste"]);
    assert!(stderr.contains("No selection"));
    assert_eq!(code, 1);

    let (_, stderr, code) = run_commands(&["get a1"]);
    assert!(stderr.contains("Invalid cell address"));
    assert_eq!(code, 1);
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spreadsheet.json");
    let path_str = path.to_str().unwrap();
    let (_, _, code) = cellpad(&["-c", "set B1 hi", "-o", path_str], None);
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(r#"[["","hi","#));
    assert_eq!(content.matches('[').count(), 11);
}

#[test]
fn test_stdin_mode_continues_after_errors() {
    let (stdout, stderr, code) = cellpad(&[], Some("bogus\nset A1 7\nget A1\nq\nget A1\n"));
    assert_eq!(code, 0);
    assert!(stderr.contains("Unknown command: bogus"));
    assert_eq!(stdout, "7\n");
}

#[test]
fn test_script_file() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "# totals").unwrap();
    writeln!(script, "set A1 2.5").unwrap();
    writeln!(script, "set A2 2.5").unwrap();
    writeln!(script, "set A3 =SUM(A1:A2)").unwrap();
    writeln!(script, "get A3").unwrap();
    let (stdout, _, code) = cellpad(&[script.path().to_str().unwrap()], None);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_disabled_formulas_via_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[features]\nformulas = false").unwrap();
    let (stdout, _, code) = cellpad(
        &[
            "--config",
            config.path().to_str().unwrap(),
            "-c",
            "set A1 =SUM(A2:A3)",
            "-c",
            "get A1",
        ],
        None,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "=SUM(A2:A3)");
}

#[test]
fn test_oversized_selection_finishes() {
    let (stdout, _, code) = run_commands(&["set J10 z", "select A1:ZZ100000", "bold", "copy", "print"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("**z**"));
    assert_eq!(stdout.matches("**").count(), 2);
}

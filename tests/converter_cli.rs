use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_converter(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_converter"))
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading stdin on usage errors
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().unwrap()
}

#[test]
fn test_writes_tables_to_cwd() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_converter(dir.path(), &["-q"], "你 A\n好 A\n你好 B\n");
    assert!(output.status.success());

    let char_lua = std::fs::read_to_string(dir.path().join("char.lua")).unwrap();
    assert_eq!(
        char_lua,
        "--- @type non-ascii.Schema\nreturn {\n    [\"A\"] = {\"你\", \"好\"},\n}"
    );

    let word_lua = std::fs::read_to_string(dir.path().join("word.lua")).unwrap();
    assert_eq!(
        word_lua,
        "--- @type non-ascii.Schema\nreturn {\n    [\"B\"] = {\"你好\"},\n}"
    );

    let word_list = std::fs::read_to_string(dir.path().join("word_list.txt")).unwrap();
    assert_eq!(word_list, "你好\n");
}

#[test]
fn test_no_word_list() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_converter(dir.path(), &["-q", "--no-word-list"], "你 A\n");
    assert!(output.status.success());

    assert!(dir.path().join("char.lua").exists());
    assert!(!dir.path().join("word_list.txt").exists());
}

#[test]
fn test_output_dir_is_created() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_converter(dir.path(), &["-q", "-o", "out/lua"], "你 A\n");
    assert!(output.status.success());
    assert!(dir.path().join("out/lua/word.lua").exists());
}

#[test]
fn test_output_path_is_a_file() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("taken"), "x").unwrap();

    let output = run_converter(dir.path(), &["-q", "-o", "taken"], "你 A\n");
    assert_eq!(output.status.code(), Some(1));
}

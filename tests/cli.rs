use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_varcalc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to start varcalc: {e}"));

    child.stdin
         .take()
         .unwrap()
         .write_all(stdin)
         .unwrap();

    child.wait_with_output().unwrap()
}

fn assert_prints(args: &[&str], stdin: &[u8], expected: &str) {
    let output = run(args, stdin);
    assert!(output.status.success(),
            "varcalc {args:?} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected, "Args: {args:?}");
}

#[test]
fn program_on_stdin_prints_its_report() {
    assert_prints(&[], b"x = 2 + 3 * 4;", "x = 14\n");
}

#[test]
fn empty_stdin_prints_an_empty_line() {
    assert_prints(&[], b"", "\n");
}

#[test]
fn program_as_argument_is_interpreted() {
    assert_prints(&["a = 1; b = -a;"], b"", "a = 1 b = -1\n");
}

#[test]
fn program_file_is_interpreted() {
    assert_prints(&["--file", "tests/programs/nested.calc"],
                  b"",
                  include_str!("programs/nested.out"));
}

#[test]
fn failing_program_prints_error() {
    assert_prints(&[], b"x = y;", "error\n");
}

#[test]
fn missing_file_prints_error() {
    assert_prints(&["--file", "/nonexistent/program.calc"], b"", "error\n");
}

#[test]
fn non_utf8_stdin_prints_error() {
    assert_prints(&[], &[0xff], "error\n");
}

#[test]
fn unknown_flag_prints_error() {
    assert_prints(&["--bogus"], b"", "error\n");
}

#[test]
fn diagnostics_stay_off_stdout() {
    let output = run(&["-vvv"], b"x = 1;");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "x = 1\n");
}

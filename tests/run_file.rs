use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bfi").unwrap();
    cmd.env_remove("BFI_EXIT_ON_EOF").env_remove("RUST_LOG");
    cmd
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn prints_cell_value_and_trailing_newline() {
    let tf = source_file("+++.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn hello_world_with_comments() {
    let tf = source_file(
        "Prints a greeting.\n\
         ++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.\n\
         +++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.\n",
    );
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn comment_only_program_is_silent() {
    let tf = source_file("nothing to see here\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_file_is_silent() {
    let tf = source_file("");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_file_reports_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin()
        .arg(dir.path().join("nope.b"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot open file:"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    cargo_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let tf = source_file("+++.");
    cargo_bin()
        .arg("-v")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}\n")
        .stderr(predicate::str::contains("loaded program"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn dictionary(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", words.join("\n")).unwrap();
    file
}

fn wordwise() -> Command {
    Command::cargo_bin("wordwise").unwrap()
}

#[test]
fn test_known_word_exits_zero() {
    let dict = dictionary(&["hello", "world"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--no-color", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spelled correctly"));
}

#[test]
fn test_misspelled_word_exits_one_with_suggestions() {
    let dict = dictionary(&["hello", "world", "word", "row", "help"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--no-color", "wrold"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("spelled incorrectly")
                .and(predicate::str::contains("Did you mean"))
                .and(predicate::str::contains("world")),
        );
}

#[test]
fn test_invalid_word_is_rejected() {
    let dict = dictionary(&["hello"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--no-color", "wr0ld"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid word"));
}

#[test]
fn test_json_output() {
    let dict = dictionary(&["hello", "world"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--format", "json", "wrold"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("\"correct\": false")
                .and(predicate::str::contains("\"word\": \"wrold\"")),
        );
}

#[test]
fn test_interactive_session() {
    let dict = dictionary(&["hello", "world", "word", "row", "help"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--no-color"])
        .write_stdin("hello\nwrold\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter a word or \"quit\" to quit:")
                .and(predicate::str::contains("spelled correctly"))
                .and(predicate::str::contains("Did you mean")),
        );
}

#[test]
fn test_interactive_rejects_invalid_input() {
    let dict = dictionary(&["hello"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-timing", "--no-color"])
        .write_stdin("it's\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid word"));
}

#[test]
fn test_missing_dictionary_fails() {
    wordwise()
        .args(["--dictionary", "/nonexistent/words.txt", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open dictionary"));
}

#[test]
fn test_timing_line_prints_by_default() {
    let dict = dictionary(&["hello"]);

    wordwise()
        .args(["--dictionary"])
        .arg(dict.path())
        .args(["--no-color", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary loaded"));
}

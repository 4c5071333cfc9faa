use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

fn cmd() -> Command {
    Command::cargo_bin("list_distance").unwrap()
}

#[test]
fn part1_output_right_answer() {
    cmd()
        .arg("--part")
        .arg("1")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("Output: 11\n");
}

#[test]
fn part2_output_right_answer() {
    cmd()
        .arg("--part")
        .arg("2")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("Output: 31\n");
}

#[test]
fn reads_given_input_file() {
    cmd()
        .arg("--part")
        .arg("2")
        .arg("--input-path")
        .arg("tests/data/sample.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: 31"));
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .arg("--part")
        .arg("1")
        .arg("--input-path")
        .arg("tests/data/no_such_file.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Output:").not());
}

#[test]
fn malformed_line_fails() {
    cmd()
        .arg("--part")
        .arg("1")
        .write_stdin("1 2\n1 2 3\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Output:").not())
        .stderr(predicate::str::contains("Expected 2 numbers on line #2"));
}

#[test]
fn invalid_integer_fails() {
    cmd()
        .arg("--part")
        .arg("2")
        .write_stdin("1 x\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Output:").not())
        .stderr(predicate::str::contains("\"x\""));
}

#[test]
fn invalid_part_fails() {
    for part in ["0", "3", "-1"] {
        cmd()
            .arg("--part")
            .arg(part)
            .write_stdin(SAMPLE)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Output:").not())
            .stderr(predicate::str::contains(format!("Invalid part {}", part)));
    }
}

#[test]
fn missing_part_fails() {
    cmd()
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No part supplied"));
}

#[test]
fn huge_similarity_input_fails() {
    cmd()
        .arg("--part")
        .arg("2")
        .write_stdin("10000000000000000000 10000000000000000000\n1 10000000000000000000\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is larger than"));
}

#[test]
fn huge_distance_input_fails() {
    cmd()
        .arg("--part")
        .arg("1")
        .write_stdin("18446744073709551615 1\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Location ID 18446744073709551615 on line #1"));
}

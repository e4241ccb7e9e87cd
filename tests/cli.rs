use std::fs;

use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn sample_output_right_answer() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/sample.cav").arg("--no-write");

    cmd.assert()
        .success()
        .stdout(str::contains("13.06"))
        .stdout(str::contains("path 1 2 5."));
}

#[test]
fn cave_name_gets_extension_and_solution_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy("caves/sample.cav", dir.path().join("sample.cav")).unwrap();

    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg(dir.path().join("sample"));

    cmd.assert().success().stdout(str::contains("13.06"));
    let solution = fs::read_to_string(dir.path().join("sample.csn")).unwrap();
    assert_eq!(solution, "1 2 5");
}

#[test]
fn output_option_picks_solution_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("triangle_answer.txt");

    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/triangle.cav").arg("-o").arg(&output);

    cmd.assert().success().stdout(str::contains("distance 5.00"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 2");
}

#[test]
fn source_and_target_options() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/sample.cav")
        .arg("--no-write")
        .arg("-s")
        .arg("3")
        .arg("-t")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(str::contains("Cave 4 -> cave 2: distance 24.00, path 4 3 5 1 2."));
}

#[test]
fn disconnected_caves_output_no_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("disconnected.csn");

    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/disconnected.cav").arg("--output").arg(&output);

    cmd.assert().success().stderr(str::contains("unreachable"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "0");
}

#[test]
fn print_matrix_option() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/triangle.cav")
        .arg("--no-write")
        .arg("--print-matrix");

    cmd.assert()
        .success()
        .stdout(str::contains("{\n0.00,5.00\n5.00,0.00\n}"));
}

#[test]
fn verbose_option_logs_to_stderr() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/sample.cav").arg("--no-write").arg("-vv");

    cmd.assert()
        .success()
        .stdout(str::contains("13.06"))
        .stderr(str::contains("Finished reading cave file."))
        .stderr(str::contains("Settled cave."));
}

#[test]
fn missing_cave_file_fails() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/no_such_caves").arg("--no-write");

    cmd.assert()
        .failure()
        .stderr(str::contains("caves/no_such_caves.cav"))
        .stderr(str::contains("doesn't exist"));
}

#[test]
fn invalid_source_fails() {
    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg("caves/sample.cav")
        .arg("--no-write")
        .arg("--source")
        .arg("7");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid source node(7)"));
}

#[test]
fn malformed_cave_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.cav");
    fs::write(&input, "3,0,0,1,1").unwrap();

    let mut cmd = Command::cargo_bin("cave_path").unwrap();
    cmd.arg(&input).arg("--no-write");

    cmd.assert()
        .failure()
        .stderr(str::contains("x coordinate of node 2"));
}

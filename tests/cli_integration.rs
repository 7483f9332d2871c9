use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rxfind() -> Command {
    Command::cargo_bin("rxfind").unwrap()
}

fn scratch_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.c"), "int main() {}\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "notes\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("b.c"), "\n").unwrap();
    fs::create_dir(dir.path().join("sub").join("deep")).unwrap();
    fs::write(dir.path().join("sub").join("deep").join("c.c"), "\n").unwrap();
    dir
}

#[test]
fn matches_within_the_depth_budget() {
    let dir = scratch_tree();
    rxfind()
        .arg(dir.path())
        .args(["-r", r"\.c$", "-m", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.c"))
        .stdout(predicate::str::contains("b.c"))
        .stdout(predicate::str::contains("c.c").not());
}

#[test]
fn depth_zero_emits_the_root_alone() {
    let dir = scratch_tree();
    rxfind()
        .arg(dir.path())
        .args(["-m", "0"])
        .assert()
        .success()
        .stdout(format!("{}\n", dir.path().display()));
}

#[test]
fn nonmatching_pattern_stays_silent() {
    let dir = scratch_tree();
    rxfind()
        .arg(dir.path())
        .args(["-r", r"\.rs$", "-m", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn maxdepth_must_be_an_integer() {
    rxfind()
        .args([".", "-m", "abc"])
        .assert()
        .failure()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("integer"));
}

#[test]
fn negative_maxdepth_is_rejected() {
    rxfind()
        .args([".", "-m", "-1"])
        .assert()
        .failure()
        .code(254)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Illegal maxdepth"));
}

#[test]
fn missing_path_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    rxfind()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn stdin_filter_emits_only_the_matching_line() {
    rxfind()
        .args(["-r", r"\.c$"])
        .write_stdin("one.txt\ntwo.c\nthree.h\n")
        .assert()
        .success()
        .stdout("two.c\n");
}

#[test]
fn only_matches_extracts_joined_substrings() {
    rxfind()
        .args(["-r", "[0-9]+", "-o"])
        .write_stdin("abc 12 and 34\n")
        .assert()
        .success()
        .stdout("12 34\n");
}

#[test]
fn case_insensitive_flag_widens_the_match() {
    rxfind()
        .args(["-r", r"\.C$", "-i"])
        .write_stdin("lower.c\n")
        .assert()
        .success()
        .stdout("lower.c\n");
}

#[test]
fn bare_glob_pattern_is_sanitized_not_fatal() {
    rxfind()
        .args(["-r", "*"])
        .write_stdin("anything\n")
        .assert()
        .success()
        .stdout("anything\n");
}

#[cfg(unix)]
#[test]
fn action_fires_once_per_matched_subject() {
    let dir = scratch_tree();
    rxfind()
        .arg(dir.path())
        .args(["-r", r"\.c$", "-m", "1", "-q", "-a", "echo hit {}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hit"))
        .stdout(predicate::str::contains("a.c"))
        .stdout(predicate::str::contains("b.c").not());
}

#[cfg(unix)]
#[test]
fn quiet_mode_suppresses_match_lines() {
    let dir = scratch_tree();
    rxfind()
        .arg(dir.path())
        .args(["-r", r"\.c$", "-m", "2", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

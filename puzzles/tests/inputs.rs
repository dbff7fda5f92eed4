//! Solve the sample inputs end to end, from a file on disk and through the
//! `puzzles` binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use puzzles::{Answers, Puzzle, PuzzleError, read_input};

const HILLS: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

fn write_input(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("waypath-{}-{name}", std::process::id()));
    fs::write(&path, text).unwrap();
    path
}

fn puzzles_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_puzzles"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn solves_input_file() {
    let path = write_input("hills.txt", HILLS);
    let input = read_input(&path).unwrap();
    let answers = Puzzle::HillClimbing.solve(&input).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(answers, Answers { part1: 31, part2: 29 });
    assert_eq!(answers.to_string(), "part 1: 31\npart 2: 29");
}

#[test]
fn wrong_puzzle_for_input() {
    let err = Puzzle::Chitons.solve(HILLS).unwrap_err();
    assert!(matches!(err, PuzzleError::Grid(_)), "{err}");
    let err = Puzzle::Amphipod.solve(HILLS).unwrap_err();
    assert!(matches!(err, PuzzleError::Malformed(_)), "{err}");
}

#[test]
fn binary_prints_both_parts() {
    let path = write_input("bin-hills.txt", HILLS);
    let out = puzzles_bin().arg("hill-climbing").arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "part 1: 31\npart 2: 29\n");
}

#[test]
fn binary_reports_solver_errors() {
    let path = write_input("bin-bad.txt", "S?E\n");
    let out = puzzles_bin().arg("hill-climbing").arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: grid: invalid character"), "{stderr}");
}

#[test]
fn binary_reports_missing_file() {
    let out = puzzles_bin()
        .args(["chitons", "/definitely/not/here.txt"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: cannot read /definitely/not/here.txt"), "{stderr}");
}

#[test]
fn binary_rejects_unknown_puzzle() {
    let out = puzzles_bin().args(["tetris", "input.txt"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid value 'tetris'"), "{stderr}");
    assert!(stderr.contains("blizzard-basin"), "{stderr}");
}

#[test]
fn binary_requires_both_arguments() {
    let out = puzzles_bin().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: puzzles <PUZZLE> <FILE>"), "{stderr}");
}

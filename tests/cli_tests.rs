//! Command-line behaviour of the `af3-prep` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn af3_prep() -> Command {
    Command::cargo_bin("af3-prep").unwrap()
}

#[test]
fn test_convert_reports_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("complex.fasta");
    std::fs::write(&input, ">seq1\nACDEFG\n>seq2\nGGHIKL\n").unwrap();

    af3_prep()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("jobs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Job name: complex\n  - Sequences: 2"))
        .stdout(predicate::str::contains("  - Chain IDs: A, B"))
        .stdout(predicate::str::contains("Created 1 JSON files"))
        .stdout(predicate::str::contains("total job count: 1"));

    assert!(dir.path().join("jobs/complex.json").is_file());
}

#[test]
fn test_convert_split_with_seeds() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pair.fa");
    std::fs::write(&input, ">first protein\nMK\n>second\nLV\n").unwrap();

    af3_prep()
        .args(["convert", "--split", "--model-seeds", "1", "2", "3", "-o"])
        .arg(dir.path().join("jobs"))
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Header: first protein\n  - Sequence length: 2"))
        .stdout(predicate::str::contains("  - Header: second\n"));

    let text = std::fs::read_to_string(dir.path().join("jobs/pair_001_first_protein.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["modelSeeds"], serde_json::json!([1, 2, 3]));
    assert!(dir.path().join("jobs/pair_002_second.json").is_file());
}

#[test]
fn test_convert_missing_input_fails() {
    let dir = tempdir().unwrap();

    af3_prep()
        .arg("convert")
        .arg(dir.path().join("missing.fasta"))
        .arg("-o")
        .arg(dir.path().join("jobs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither a file nor a directory"));
}

#[test]
fn test_convert_unrecognized_extension_warns() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, ">a\nMK\n").unwrap();

    af3_prep()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("jobs"))
        .assert()
        .success()
        .stderr(predicate::str::contains("not a recognized FASTA extension"))
        .stdout(predicate::str::contains("Created 0 JSON files"));
}

#[test]
fn test_convert_json_format() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("m.fasta");
    std::fs::write(&input, ">a\nMK\n").unwrap();

    let output = af3_prep()
        .args(["--format", "json", "convert"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("jobs"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_jobs"], 1);
    assert_eq!(value["jobs"][0]["chain_ids"], serde_json::json!(["A"]));
}

#[test]
fn test_disorder_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("iupred");
    std::fs::create_dir(&input).unwrap();
    std::fs::write(input.join("p1.csv"), "# IUPred3\n1\tM\t0.2\n2\tK\t0.6\n3\tV\t0.9\n").unwrap();
    let output = dir.path().join("summary.csv");

    af3_prep()
        .arg("disorder")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary saved to"));

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "filename,median_disorder,fraction_disordered");
    assert!(lines[1].starts_with("p1,0.6,0.66"));
}

#[test]
fn test_structure_summary_without_stride() {
    let dir = tempdir().unwrap();
    let pdbs = dir.path().join("models");
    std::fs::create_dir(&pdbs).unwrap();
    std::fs::write(
        pdbs.join("model.pdb"),
        "ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00 88.00           N\n",
    )
    .unwrap();
    let output = dir.path().join("structure.csv");

    af3_prep()
        .arg("structure")
        .arg(&pdbs)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files processed successfully: 1"));

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("model,88.0,,,,,,,,"));
}

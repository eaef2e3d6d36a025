mod common;

use assert_cmd::Command;
use std::fs;
use tempfile::NamedTempFile;

use crate::common::{run_codonscan, run_codonscan_failing};

fn sequence_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn plain_output_lists_count_then_genes() {
    let input = sequence_file("atgtaaccccatgtag");
    let output = run_codonscan(&["-i", input.path().to_str().unwrap()]).unwrap();
    assert_eq!(output, "2 genes found\natgtaa\natgtag\n");
}

#[test]
fn overlapping_genes_are_both_reported() {
    let input = sequence_file("atgatgtaa");
    let output = run_codonscan(&["-i", input.path().to_str().unwrap()]).unwrap();
    assert_eq!(output, "2 genes found\natgatgtaa\natgtaa\n");
}

#[test]
fn sco_output_to_file() {
    let input = sequence_file("atgccctga\n");
    let out_tmp = NamedTempFile::new().unwrap();
    let stdout = run_codonscan(&[
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        out_tmp.path().to_str().unwrap(),
        "-f",
        "sco",
    ])
    .unwrap();

    assert!(stdout.is_empty());
    let written = fs::read_to_string(out_tmp.path()).unwrap();
    assert_eq!(written, "1\t9\t1\t9\n");
}

#[test]
fn fasta_output_names_genes_after_sequence() {
    let output = run_codonscan(&[
        "-i",
        "tests/data/contigs.fasta",
        "-t",
        "fasta",
        "-f",
        "fasta",
        "-j",
        "2",
    ])
    .unwrap();
    assert_eq!(
        output,
        ">contig_1_1 1..6 len=6\natgtaa\n>contig_1_2 11..16 len=6\natgtag\n>contig_2_1 3..11 len=9\natgccctga\n"
    );
}

#[test]
fn plain_output_names_each_fasta_record() {
    let output = run_codonscan(&["-i", "tests/data/contigs.fasta", "-t", "fasta"]).unwrap();
    assert_eq!(
        output,
        ">contig_1\n2 genes found\natgtaa\natgtag\n>contig_2\n1 genes found\natgccctga\n>contig_3\n0 genes found\n"
    );
}

#[test]
fn invalid_base_aborts_without_output() {
    let input = sequence_file("atgtaXaatg");
    let mut cmd = Command::cargo_bin("codonscan").unwrap();
    cmd.args(["-i", input.path().to_str().unwrap()]);

    let assert = cmd.assert().failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidBase"), "stderr: {stderr}");
    assert!(stderr.contains("offset: 5"), "stderr: {stderr}");
}

#[test]
fn uppercase_bases_are_rejected() {
    let input = sequence_file("ATGTAA");
    let stderr = run_codonscan_failing(&["-i", input.path().to_str().unwrap()]).unwrap();
    assert!(stderr.contains("offset: 0"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_fails() {
    let stderr = run_codonscan_failing(&["-i", "tests/data/does_not_exist.txt"]).unwrap();
    assert!(stderr.contains("IoError"), "stderr: {stderr}");
}

#[test]
fn unknown_format_fails() {
    let input = sequence_file("atgtaa");
    let stderr =
        run_codonscan_failing(&["-i", input.path().to_str().unwrap(), "-f", "gbk"]).unwrap();
    assert!(stderr.contains("Invalid output format"), "stderr: {stderr}");
}

#[test]
fn zero_threads_rejected() {
    let stderr = run_codonscan_failing(&[
        "-i",
        "tests/data/contigs.fasta",
        "-t",
        "fasta",
        "-j",
        "0",
    ])
    .unwrap();
    assert!(stderr.contains("Thread count must be at least 1"), "stderr: {stderr}");
}

#[test]
fn unterminated_start_is_warned_about() {
    let input = sequence_file("atgtaaatgccccc");
    let mut cmd = Command::cargo_bin("codonscan").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["-i", input.path().to_str().unwrap()]);

    let assert = cmd.assert().success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1 genes found\natgtaa\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("without an in-frame stop codon"), "stderr: {stderr}");
}

#[test]
fn quiet_suppresses_warnings() {
    let input = sequence_file("atgtaaatgccccc");
    let mut cmd = Command::cargo_bin("codonscan").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["-q", "-i", input.path().to_str().unwrap()]);

    let assert = cmd.assert().success();
    assert!(assert.get_output().stderr.is_empty());
}

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Motif hit at offset 0 followed by an ATG-initiated ORF of 66 bp ending in TAA
pub fn stop_terminated_orf() -> String {
    format!("AAAACCCCCATG{}TAA", "C".repeat(60))
}

/// Motif hit at offset 0 whose ORF runs off the end of the sequence (70 bp)
pub fn truncated_orf() -> String {
    format!("AAAACCCCCATG{}", "C".repeat(67))
}

/// Three records: one ORF, no ORFs, one truncated ORF
pub fn three_record_fasta() -> String {
    format!(
        ">alpha|sample 1\n{}\n>beta\n{}\n>gamma\n{}\n",
        stop_terminated_orf(),
        "ACGT".repeat(10),
        truncated_orf()
    )
}

pub fn write_fasta(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Runs the orfscan CLI and returns the written report
pub fn run_orfscan(input_file: &str, extra_args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = NamedTempFile::new()?;
    let mut cmd = Command::cargo_bin("orfscan")?;
    cmd.arg("-i")
        .arg(input_file)
        .arg("-o")
        .arg(output.path())
        .arg("-q")
        .args(extra_args);

    cmd.assert().success();
    Ok(std::fs::read_to_string(output.path())?)
}

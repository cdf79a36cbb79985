mod common;

use insta::assert_snapshot;

use crate::common::{run_orfscan, three_record_fasta, write_fasta};

#[test]
fn fasta_report_snapshot() {
    let input = write_fasta(&three_record_fasta());
    let report = run_orfscan(input.path().to_str().unwrap(), &[]).unwrap();
    assert_snapshot!("report", report.trim_end());
}

#[test]
fn gff_report_snapshot() {
    let input = write_fasta(&three_record_fasta());
    let report = run_orfscan(input.path().to_str().unwrap(), &["-f", "gff"]).unwrap();
    assert_snapshot!("report_gff", report.trim_end());
}

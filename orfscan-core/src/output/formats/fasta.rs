use std::io::Write;

use crate::{OrfScanError, results::ScanResults};

/// Write ORFs as FASTA records.
///
/// ```text
/// > <id>_ORF<n>|Length <length>|at position <start>
/// <nucleotides>
/// ```
///
/// `n` counts from 1 within each sequence and `start` is 1-based.
pub fn write_fasta_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), OrfScanError> {
    for (index, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            "> {}_ORF{}|Length {}|at position {}",
            results.sequence_info.id,
            index + 1,
            orf.length,
            orf.start_one_based()
        )?;
        writer.write_all(&orf.sequence)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ScanOutcome, SequenceInfo};
    use crate::types::{OrfEnd, OrfRecord};

    fn orf(start: usize, sequence: &str, end: OrfEnd) -> OrfRecord {
        OrfRecord {
            start,
            length: sequence.len(),
            sequence: sequence.as_bytes().to_vec(),
            end,
        }
    }

    fn create_test_results(orfs: Vec<OrfRecord>) -> ScanResults {
        ScanResults {
            sequence_info: SequenceInfo {
                id: "contig_1".to_string(),
                length: 500,
                motif_hits: orfs.len(),
                num_orfs: orfs.len(),
            },
            orfs,
            outcome: ScanOutcome::Completed,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_write_fasta_format_numbering_and_positions() {
        let results = create_test_results(vec![
            orf(9, "ATGCCCTAA", OrfEnd::StopCodon),
            orf(120, "ATGAAAAC", OrfEnd::Truncated),
        ]);
        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "> contig_1_ORF1|Length 9|at position 10\nATGCCCTAA\n\
             > contig_1_ORF2|Length 8|at position 121\nATGAAAAC\n"
        );
    }

    #[test]
    fn test_write_fasta_format_no_orfs_writes_nothing() {
        let results = create_test_results(vec![]);
        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results).unwrap();
        assert!(buffer.is_empty());
    }
}

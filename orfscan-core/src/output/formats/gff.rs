use std::io::Write;

use crate::{OrfScanError, constants::VERSION, results::ScanOutcome, results::ScanResults};

/// Write the GFF3 version pragma; once per file
pub fn write_gff_header<W: Write>(writer: &mut W) -> Result<(), OrfScanError> {
    writeln!(writer, "##gff-version 3")?;
    Ok(())
}

/// Write one sequence's ORFs as GFF3 features
pub fn write_gff_format<W: Write>(
    writer: &mut W,
    results: &ScanResults,
) -> Result<(), OrfScanError> {
    let info = &results.sequence_info;
    writeln!(
        writer,
        "# Sequence Data: seqhdr=\"{}\";seqlen={};motif_hits={}",
        info.id, info.length, info.motif_hits
    )?;
    if let ScanOutcome::Skipped { reason } = &results.outcome {
        writeln!(writer, "# Skipped: {}", reason)?;
    }

    for (index, orf) in results.orfs.iter().enumerate() {
        writeln!(
            writer,
            "{}\torfscan_v{}\tORF\t{}\t{}\t.\t+\t0\tID={}_ORF{};partial={}",
            info.id,
            VERSION,
            orf.start_one_based(),
            orf.end_one_based(),
            info.id,
            index + 1,
            orf.end.is_truncated()
        )?;
    }
    Ok(())
}

//! Output formatting for ORF scan results.
//!
//! ## Supported Formats
//!
//! - **FASTA**: header with identifier, ORF number, length and 1-based start,
//!   followed by the ORF nucleotides
//! - **GFF3**: General Feature Format version 3
//!
//! ## Examples
//!
//! ### Write a report file
//!
//! ```rust,no_run
//! use orfscan_core::{OrfAnalyzer, config::{OutputFormat, ScanConfig}};
//! use orfscan_core::output::write_results;
//! use std::fs::File;
//!
//! let analyzer = OrfAnalyzer::new(ScanConfig::default());
//! let results = analyzer.analyze_fasta_file("contigs.fasta")?;
//!
//! let mut report = File::create("ORFs.fa")?;
//! write_results(&mut report, &results, OutputFormat::Fasta)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Write to stdout
//!
//! ```rust,no_run
//! use orfscan_core::{OrfAnalyzer, config::{OutputFormat, ScanConfig}};
//! use orfscan_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = OrfAnalyzer::new(ScanConfig::default());
//! let results = analyzer.analyze_fasta_file("contigs.fasta")?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Gff)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{OrfScanError, config::OutputFormat, results::ScanResults};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod gff;
}

use formats::{
    fasta::write_fasta_format,
    gff::{write_gff_format, write_gff_header},
};

/// Writes scan results for a whole run in the specified format.
///
/// Sequences are written in the order given, so the report follows input
/// record order. Sequences without ORFs contribute no FASTA records.
///
/// # Arguments
///
/// * `writer` - Output writer (file, stdout, buffer, etc.)
/// * `results` - Per-sequence results, in input order
/// * `format` - Desired output format
///
/// # Errors
///
/// Returns [`OrfScanError::Io`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &[ScanResults],
    format: OutputFormat,
) -> Result<(), OrfScanError> {
    if format == OutputFormat::Gff {
        write_gff_header(writer)?;
    }
    for result in results {
        match format {
            OutputFormat::Fasta => write_fasta_format(writer, result)?,
            OutputFormat::Gff => write_gff_format(writer, result)?,
        }
    }
    writer.flush()?;
    Ok(())
}

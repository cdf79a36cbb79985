use crate::sequence::LoadWarning;
use crate::types::OrfRecord;

/// How scanning of one sequence ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanOutcome {
    /// Every window was scanned
    #[default]
    Completed,
    /// The sequence failed validation; it contributes no ORFs
    Skipped { reason: String },
}

impl ScanOutcome {
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// ORF scan results for one sequence.
///
/// # Examples
///
/// ```rust,no_run
/// use orfscan_core::{OrfAnalyzer, config::{OutputFormat, ScanConfig}};
/// use orfscan_core::output::write_results;
///
/// let analyzer = OrfAnalyzer::new(ScanConfig::default());
/// let results = analyzer.analyze_sequence("AAAACCCCCATG...", Some("contig_1".to_string()))?;
///
/// println!("Sequence: {}", results.sequence_info.id);
/// println!("Length: {} bp", results.sequence_info.length);
/// println!("ORFs: {}", results.orfs.len());
///
/// let mut output = std::fs::File::create("ORFs.fa")?;
/// write_results(&mut output, &[results], OutputFormat::Fasta)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanResults {
    /// ORFs in discovery order
    pub orfs: Vec<OrfRecord>,

    /// Information about the scanned sequence
    pub sequence_info: SequenceInfo,

    pub outcome: ScanOutcome,

    /// Loader findings for this sequence, such as a duplicated identifier
    pub warnings: Vec<LoadWarning>,
}

impl ScanResults {
    /// Number of ORFs that ran off the end of the sequence without a stop codon
    #[must_use]
    pub fn truncated_count(&self) -> usize {
        self.orfs.iter().filter(|orf| orf.end.is_truncated()).count()
    }
}

/// Information about a scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceInfo {
    /// Identifier from the FASTA header
    pub id: String,

    /// Length of the sequence in base pairs
    pub length: usize,

    /// Windows scoring above the motif threshold
    pub motif_hits: usize,

    /// Number of ORFs reported
    pub num_orfs: usize,
}

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::results::{ScanOutcome, ScanResults, SequenceInfo};
use crate::scanner::OrfScanner;
use crate::sequence::{LoadWarning, SequenceRecord, read_fasta_sequences};
use crate::types::OrfScanError;

/// High-level ORF scanning interface.
///
/// Loads sequences, scans them in parallel and returns results in input
/// order. A sequence that fails validation is reported as
/// [`ScanOutcome::Skipped`] without affecting the others.
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust,no_run
/// use orfscan_core::{OrfAnalyzer, config::ScanConfig};
///
/// let analyzer = OrfAnalyzer::new(ScanConfig::default());
/// let results = analyzer.analyze_fasta_file("contigs.fasta")?;
///
/// for result in &results {
///     println!("{}: {} ORFs", result.sequence_info.id, result.orfs.len());
/// }
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
///
/// ## Cancelling a long run
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use orfscan_core::{OrfAnalyzer, config::ScanConfig};
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let analyzer = OrfAnalyzer::new(ScanConfig::default()).with_cancellation(cancel.clone());
///
/// // From another thread:
/// cancel.store(true, Ordering::Relaxed);
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrfAnalyzer {
    /// Configuration for scanning and reporting
    pub config: ScanConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl OrfAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// ```rust
    /// use orfscan_core::{OrfAnalyzer, config::ScanConfig};
    ///
    /// let analyzer = OrfAnalyzer::new(ScanConfig::default());
    /// ```
    pub const fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Checks `flag` before each sequence; once it is set the run stops with
    /// [`OrfScanError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Scans every sequence of a FASTA file.
    ///
    /// Loader warnings are attached to the result of the sequence they
    /// concern, in [`ScanResults::warnings`].
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError`] if:
    /// - The file cannot be read
    /// - The FASTA content is empty or malformed
    /// - The configuration is invalid
    /// - The run is cancelled
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<ScanResults>, OrfScanError> {
        let loaded = read_fasta_sequences(path)?;
        let mut results = self.analyze_records(&loaded.records)?;

        for warning in loaded.warnings {
            let LoadWarning::DuplicateIdentifier { id } = &warning;
            if let Some(result) = results.iter_mut().find(|r| &r.sequence_info.id == id) {
                result.warnings.push(warning);
            }
        }
        Ok(results)
    }

    /// Scans a single sequence given as text.
    ///
    /// # Arguments
    ///
    /// * `sequence` - DNA sequence (A, T, G, C)
    /// * `id` - Optional identifier (defaults to "Sequence_1")
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::Config`] for an invalid configuration. Invalid
    /// bases do not fail the call; they yield a skipped result.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        id: Option<String>,
    ) -> Result<ScanResults, OrfScanError> {
        let record = SequenceRecord::new(
            id.unwrap_or_else(|| "Sequence_1".to_string()),
            sequence.as_bytes(),
        );
        let scanner = OrfScanner::new(&self.config)?;
        scan_record(&scanner, &record)
    }

    /// Scans loaded records in parallel, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::Config`] for an invalid configuration or thread
    /// pool failure, and [`OrfScanError::Cancelled`] if cancellation was
    /// requested before every sequence was scanned.
    pub fn analyze_records(
        &self,
        records: &[SequenceRecord],
    ) -> Result<Vec<ScanResults>, OrfScanError> {
        let scanner = OrfScanner::new(&self.config)?;

        let scan_all = || {
            records
                .par_iter()
                .map(|record| {
                    if self.is_cancelled() {
                        return Err(OrfScanError::Cancelled);
                    }
                    scan_record(&scanner, record)
                })
                .collect::<Result<Vec<_>, _>>()
        };

        let results = match self.config.num_threads {
            Some(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| {
                    OrfScanError::Config(format!("Failed to configure thread pool: {}", e))
                })?
                .install(scan_all)?,
            None => scan_all()?,
        };

        let total_orfs: usize = results.iter().map(|r| r.orfs.len()).sum();
        let skipped = results.iter().filter(|r| r.outcome.is_skipped()).count();
        info!(
            sequences = results.len(),
            orfs = total_orfs,
            skipped,
            "scan complete"
        );

        Ok(results)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

fn scan_record(
    scanner: &OrfScanner<'_>,
    record: &SequenceRecord,
) -> Result<ScanResults, OrfScanError> {
    let mut sequence_info = SequenceInfo {
        id: record.id.clone(),
        length: record.len(),
        ..Default::default()
    };

    match scanner.scan(&record.sequence) {
        Ok(scan) => {
            sequence_info.motif_hits = scan.motif_hits;
            sequence_info.num_orfs = scan.orfs.len();
            Ok(ScanResults {
                orfs: scan.orfs,
                sequence_info,
                outcome: ScanOutcome::Completed,
                warnings: Vec::new(),
            })
        }
        Err(e) if e.is_validation() => {
            warn!(id = %record.id, error = %e, "skipping sequence");
            Ok(ScanResults {
                orfs: Vec::new(),
                sequence_info,
                outcome: ScanOutcome::Skipped {
                    reason: e.to_string(),
                },
                warnings: Vec::new(),
            })
        }
        Err(e) => Err(e),
    }
}

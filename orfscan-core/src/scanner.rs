//! Motif-guided ORF scanning of a single sequence.
//!
//! ## Algorithm
//!
//! For every window offset `idx`:
//!
//! 1. Score the window with the [`MotifScorer`]; skip it unless it is a hit.
//! 2. Walk the in-frame codons `idx, idx + 3, ...` inside the window and keep
//!    the start codon with the highest preference. Ties keep the earliest.
//! 3. Extend the chosen start in frame to the first stop codon, or to the end
//!    of the sequence when there is none.
//! 4. Keep the ORF if it is long enough and its `(start, length)` key is new.
//!
//! Scanning always resumes at `idx + 1`, so nested and overlapping ORFs from
//! different windows are all reported.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::constants::{CODON_LENGTH, START_SCORE_FLOOR, TRAILING_BASES};
use crate::scoring::{MotifScorer, score_codon};
use crate::types::{OrfEnd, OrfRecord, OrfScanError};

/// ORFs found in one sequence, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceScan {
    pub orfs: Vec<OrfRecord>,
    /// Windows that scored above the threshold
    pub motif_hits: usize,
}

/// Scans sequences for motif-anchored ORFs.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::config::ScanConfig;
/// use orfscan_core::scanner::OrfScanner;
///
/// let config = ScanConfig::default();
/// let scanner = OrfScanner::new(&config)?;
///
/// let sequence = format!("AAAACCCCCATG{}TAA", "CCC".repeat(20));
/// let scan = scanner.scan(sequence.as_bytes())?;
///
/// assert_eq!(scan.orfs.len(), 1);
/// assert_eq!(scan.orfs[0].start, 9);
/// assert_eq!(scan.orfs[0].length, 66);
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrfScanner<'a> {
    config: &'a ScanConfig,
    scorer: MotifScorer,
}

impl<'a> OrfScanner<'a> {
    /// Creates a scanner for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::Config`] if the configuration is inconsistent.
    pub fn new(config: &'a ScanConfig) -> Result<Self, OrfScanError> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: MotifScorer::new(config.score_threshold),
        })
    }

    /// Scans one sequence to completion.
    ///
    /// # Errors
    ///
    /// Returns a validation error ([`OrfScanError::InvalidBase`]) as soon as a
    /// window contains a symbol outside `A`, `T`, `C`, `G`. ORFs found before
    /// that window are discarded along with the error.
    pub fn scan(&self, sequence: &[u8]) -> Result<SequenceScan, OrfScanError> {
        let mut scan = SequenceScan::default();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for (idx, window) in sequence.windows(self.scorer.width()).enumerate() {
            if !self.scorer.is_hit(window)? {
                continue;
            }
            scan.motif_hits += 1;

            let Some(orf) = self.candidate_at(sequence, idx) else {
                continue;
            };
            if orf.length < self.config.min_orf_length {
                trace!(idx, start = orf.start, length = orf.length, "ORF too short");
                continue;
            }
            if !seen.insert(orf.key()) {
                trace!(idx, start = orf.start, length = orf.length, "duplicate ORF");
                continue;
            }

            debug!(
                idx,
                start = orf.start,
                length = orf.length,
                end = %orf.end,
                "ORF accepted"
            );
            scan.orfs.push(orf);
        }

        debug!(
            threshold = self.scorer.threshold(),
            hits = scan.motif_hits,
            orfs = scan.orfs.len(),
            "sequence scanned"
        );
        Ok(scan)
    }

    /// Builds the ORF for the motif hit at `idx`, if the window holds a usable start.
    fn candidate_at(&self, sequence: &[u8], idx: usize) -> Option<OrfRecord> {
        let start = self.select_start(sequence, idx)?;
        let (end, orf_end) = self.extend_to_stop(sequence, start)?;

        Some(OrfRecord {
            start,
            length: end - start,
            sequence: sequence[start..end].to_vec(),
            end: orf_end,
        })
    }

    /// Highest-preference start codon in frame with `idx`, inside the window.
    ///
    /// A codon replaces the running best only with a strictly greater
    /// preference, starting from [`START_SCORE_FLOOR`].
    fn select_start(&self, sequence: &[u8], idx: usize) -> Option<usize> {
        let limit = (idx + self.config.window_size).min(sequence.len() - TRAILING_BASES);

        (idx..limit)
            .step_by(CODON_LENGTH)
            .map(|pos| (pos, &sequence[pos..pos + CODON_LENGTH]))
            .filter(|(_, codon)| self.config.is_start_codon(codon))
            .fold(None, |best: Option<(i32, usize)>, (pos, codon)| {
                let preference = score_codon(codon);
                let best_preference = best.map_or(START_SCORE_FLOOR, |(score, _)| score);
                if preference > best_preference {
                    Some((preference, pos))
                } else {
                    best
                }
            })
            .map(|(_, pos)| pos)
    }

    /// Exclusive end offset of the ORF starting at `start`.
    ///
    /// `None` when there is no codon after the start to examine.
    fn extend_to_stop(&self, sequence: &[u8], start: usize) -> Option<(usize, OrfEnd)> {
        let scan_end = sequence.len() - TRAILING_BASES;
        let first = start + CODON_LENGTH;
        if first >= scan_end {
            return None;
        }

        let stop = (first..scan_end)
            .step_by(CODON_LENGTH)
            .find(|&pos| self.config.is_stop_codon(&sequence[pos..pos + CODON_LENGTH]));

        Some(match stop {
            Some(pos) => (pos + CODON_LENGTH, OrfEnd::StopCodon),
            None => (sequence.len(), OrfEnd::Truncated),
        })
    }
}

//! # orfscan - motif-guided ORF scanner
//!
//! Finds open reading frames that begin near a Kozak-like translation
//! initiation motif. Every 13-nt window of each input sequence is scored
//! against a position weight matrix; windows above the threshold trigger a
//! search for a nearby in-frame start codon and extension to the first
//! in-frame stop codon.
//!
//! ## Features
//!
//! - **FASTA Input**: multi-record files with `|`-separated header metadata
//! - **Motif Scoring**: fixed 4x13 position weight matrix with excluded cells
//! - **Start Preference**: ATG over GTG, earliest codon on ties
//! - **Multiple Output Formats**: FASTA report and GFF3
//! - **Parallel Processing**: sequences are scanned independently using Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use orfscan_core::{OrfAnalyzer, config::ScanConfig};
//!
//! let analyzer = OrfAnalyzer::new(ScanConfig::default());
//!
//! let sequence = format!("AAAACCCCCATG{}TAA", "CCC".repeat(20));
//! let results = analyzer.analyze_sequence(&sequence, Some("contig_1".to_string()))?;
//!
//! assert_eq!(results.orfs.len(), 1);
//! assert_eq!(results.orfs[0].start, 9);
//! assert_eq!(results.orfs[0].length, 66);
//! # Ok::<(), orfscan_core::OrfScanError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for scanning and output
//! - [`constants`]: Motif matrix, codon tables and defaults
//! - [`engine`]: Parallel analysis over whole files
//! - [`scanner`]: Per-sequence ORF detection
//! - [`scoring`]: Motif and codon scoring
//! - [`sequence`]: FASTA loading
//! - [`results`]: Per-sequence scan results
//! - [`output`]: Report writers
//! - [`types`]: Core data types and the error type
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, OrfScanError>`](types::OrfScanError).
//! Whole-run failures cover:
//!
//! - Unreadable or malformed input files
//! - Invalid configuration
//! - I/O errors while writing the report
//! - Cancellation
//!
//! Invalid bases inside one sequence are not a run failure: that sequence is
//! reported as skipped and the others are scanned normally.

pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod scanner;
pub mod scoring;
pub mod sequence;
pub mod types;

pub use engine::OrfAnalyzer;
pub use types::OrfScanError;

use std::fmt;

use thiserror::Error;

/// Nucleotides accepted by the motif scorer, in scoring-matrix row order.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::types::Nucleotide;
///
/// assert_eq!(Nucleotide::from_byte(b'G'), Some(Nucleotide::G));
/// assert_eq!(Nucleotide::G.to_index(), 3);
/// assert_eq!(Nucleotide::from_byte(b'N'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleotide {
    /// Adenine
    A,
    /// Thymine
    T,
    /// Cytosine
    C,
    /// Guanine
    G,
}

impl Nucleotide {
    /// Parse an uppercase ASCII base. Lowercase and ambiguity codes are rejected.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'T' => Some(Self::T),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            _ => None,
        }
    }

    /// Row of this base in the motif matrix
    #[must_use]
    pub const fn to_index(self) -> usize {
        match self {
            Self::A => 0,
            Self::T => 1,
            Self::C => 2,
            Self::G => 3,
        }
    }
}

/// How an ORF ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrfEnd {
    /// Terminated by an in-frame stop codon, which is included in the ORF
    #[default]
    StopCodon,
    /// No in-frame stop codon before the end of the sequence; the ORF runs to
    /// the last base and its length need not be a multiple of three
    Truncated,
}

impl OrfEnd {
    #[must_use]
    pub const fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated)
    }
}

impl fmt::Display for OrfEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopCodon => write!(f, "stop"),
            Self::Truncated => write!(f, "truncated"),
        }
    }
}

/// A discovered open reading frame within one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrfRecord {
    /// 0-based offset of the start codon
    pub start: usize,
    /// Length in base pairs, equal to `sequence.len()`
    pub length: usize,
    /// Nucleotides from the start codon through the stop codon (or sequence end)
    pub sequence: Vec<u8>,
    /// Whether a stop codon closed the frame
    pub end: OrfEnd,
}

impl OrfRecord {
    /// Dedup key of this ORF within its sequence
    #[must_use]
    pub const fn key(&self) -> (usize, usize) {
        (self.start, self.length)
    }

    /// 1-based start position, as written in reports
    #[must_use]
    pub const fn start_one_based(&self) -> usize {
        self.start + 1
    }

    /// 1-based inclusive end position
    #[must_use]
    pub const fn end_one_based(&self) -> usize {
        self.start + self.length
    }
}

/// Error types that can occur while loading, scanning or reporting
#[derive(Error, Debug)]
pub enum OrfScanError {
    /// Malformed or empty input file
    #[error("Format error: {0}")]
    Format(String),
    /// A motif window of the wrong width
    #[error("Invalid window: expected {expected} bases, got {actual}")]
    InvalidWindow { expected: usize, actual: usize },
    /// A symbol outside A, T, C, G in a motif window
    #[error("Invalid base '{base}' at window position {position}")]
    InvalidBase { base: char, position: usize },
    /// Inconsistent scan configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The run was cancelled between sequences
    #[error("Scan cancelled")]
    Cancelled,
}

impl OrfScanError {
    /// True for errors that only invalidate the sequence being scanned
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidWindow { .. } | Self::InvalidBase { .. })
    }
}

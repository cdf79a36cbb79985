//! Sequence records and FASTA loading.
//!
//! ## Modules
//!
//! - [`io`]: FASTA file reading and parsing
//!
//! ## Examples
//!
//! ```rust
//! use orfscan_core::sequence::parse_fasta_sequences;
//!
//! let loaded = parse_fasta_sequences(">contig_1|len=8\nATCG\nGCTA\n")?;
//! assert_eq!(loaded.records[0].id, "contig_1");
//! assert_eq!(loaded.records[0].sequence, b"ATCGGCTA");
//! # Ok::<(), orfscan_core::types::OrfScanError>(())
//! ```

pub mod io;

pub use io::*;

/// One loaded nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header text after `>` up to the first `|`
    pub id: String,
    /// Concatenated sequence lines, verbatim
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

// =============================================================================
// Scanning parameters
// =============================================================================

/// Version string for orfscan
pub const VERSION: &str = "0.1.0";

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Width of the motif window, equal to the number of columns of [`MOTIF_MATRIX`]
pub const MOTIF_WIDTH: usize = 13;

/// A window must score strictly above this value to count as a motif hit
pub const DEFAULT_SCORE_THRESHOLD: f64 = 7.25;

/// Minimum ORF length in base pairs
pub const MIN_ORF_LENGTH: usize = 60;

/// Trailing bases that never begin a start codon or an in-frame stop scan step
pub const TRAILING_BASES: usize = 2;

/// Running best preference before any start codon is seen.
///
/// Start selection replaces the best only on a strictly greater preference, so a
/// codon scoring at the floor is never chosen.
pub const START_SCORE_FLOOR: i32 = -1;

/// Report file written when no output path is supplied
pub const DEFAULT_OUTPUT_PATH: &str = "ORFs.fa";

// =============================================================================
// Codon tables
// =============================================================================

/// Recognised start codons
pub const START_CODONS: [&str; 2] = ["ATG", "GTG"];

/// Recognised stop codons
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Start codon with the highest preference
pub const PREFERRED_START_CODON: &[u8; 3] = b"ATG";

/// Start codon with a negative preference
pub const SECONDARY_START_CODON: &[u8; 3] = b"GTG";

// =============================================================================
// Motif matrix
// =============================================================================

/// Number of nucleotide rows in the motif matrix
pub const NUCLEOTIDES: usize = 4;

/// Matrix cell that never contributes to a score, whatever the base.
const EX: Option<f64> = None;

const fn w(weight: f64) -> Option<f64> {
    Some(weight)
}

/// Position-specific scoring matrix, rows ordered A, T, C, G.
///
/// Columns 9..=11 favour an `ATG` start codon; the leading four columns favour
/// purines. `None` marks an excluded cell.
pub const MOTIF_MATRIX: [[Option<f64>; MOTIF_WIDTH]; NUCLEOTIDES] = [
    // A
    [
        w(0.5),
        w(0.5),
        w(0.5),
        w(0.5),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(2.0),
        EX,
        EX,
        w(0.5),
    ],
    // T
    [
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        EX,
        w(2.0),
        EX,
        w(0.0),
    ],
    // C
    [
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        EX,
        EX,
        EX,
        w(0.0),
    ],
    // G
    [
        w(0.5),
        w(0.5),
        w(0.5),
        w(0.5),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.0),
        w(0.5),
        EX,
        w(2.0),
        w(0.0),
    ],
];

// =============================================================================
// Test constants
// =============================================================================

/// Window that reaches the maximum motif score of 8.5
pub const TEST_MOTIF_HIT: &str = "AAAACCCCCATGA";

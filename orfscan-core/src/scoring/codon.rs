use crate::constants::{PREFERRED_START_CODON, SECONDARY_START_CODON};

/// Start codon preference: +1 for `ATG`, -1 for `GTG`, 0 for anything else.
///
/// A pure lookup; malformed input is not an error.
///
/// ```rust
/// use orfscan_core::scoring::score_codon;
///
/// assert_eq!(score_codon(b"ATG"), 1);
/// assert_eq!(score_codon(b"GTG"), -1);
/// assert_eq!(score_codon(b"TTG"), 0);
/// ```
#[must_use]
pub fn score_codon(codon: &[u8]) -> i32 {
    if codon == PREFERRED_START_CODON {
        1
    } else if codon == SECONDARY_START_CODON {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_codon_preferences() {
        assert_eq!(score_codon(b"ATG"), 1);
        assert_eq!(score_codon(b"GTG"), -1);
    }

    #[test]
    fn test_other_codons_score_zero() {
        let codons: [&[u8]; 7] = [b"TTG", b"TAA", b"CCC", b"atg", b"AT", b"ATGA", b""];
        for codon in codons {
            assert_eq!(score_codon(codon), 0, "codon {:?}", codon);
        }
    }
}

use crate::constants::{DEFAULT_SCORE_THRESHOLD, MOTIF_MATRIX, MOTIF_WIDTH, NUCLEOTIDES};
use crate::types::{Nucleotide, OrfScanError};

/// Scores windows against a position-specific matrix and applies the hit threshold.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::scoring::MotifScorer;
///
/// let scorer = MotifScorer::default();
/// assert_eq!(scorer.score(b"AAAACCCCCATGA")?, 8.5);
/// assert!(scorer.is_hit(b"AAAACCCCCATGA")?);
/// assert!(!scorer.is_hit(b"CCCCCCCCCATGC")?);
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifScorer {
    matrix: [[Option<f64>; MOTIF_WIDTH]; NUCLEOTIDES],
    threshold: f64,
}

impl Default for MotifScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_THRESHOLD)
    }
}

impl MotifScorer {
    /// Scorer over the fixed motif matrix with the given hit threshold
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            matrix: MOTIF_MATRIX,
            threshold,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of positions a window must have
    #[must_use]
    pub const fn width(&self) -> usize {
        MOTIF_WIDTH
    }

    /// Sum of matrix weights for the bases of `window`; excluded cells add nothing.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::InvalidWindow`] if the window is not exactly 13 bases
    /// - [`OrfScanError::InvalidBase`] for any symbol other than `A`, `T`, `C`, `G`
    pub fn score(&self, window: &[u8]) -> Result<f64, OrfScanError> {
        if window.len() != MOTIF_WIDTH {
            return Err(OrfScanError::InvalidWindow {
                expected: MOTIF_WIDTH,
                actual: window.len(),
            });
        }

        let mut score = 0.0;
        for (position, &base) in window.iter().enumerate() {
            let nucleotide =
                Nucleotide::from_byte(base).ok_or(OrfScanError::InvalidBase {
                    base: char::from(base),
                    position,
                })?;
            if let Some(weight) = self.matrix[nucleotide.to_index()][position] {
                score += weight;
            }
        }
        Ok(score)
    }

    /// True when the window scores strictly above the threshold.
    ///
    /// # Errors
    ///
    /// Same as [`MotifScorer::score`].
    pub fn is_hit(&self, window: &[u8]) -> Result<bool, OrfScanError> {
        Ok(self.score(window)? > self.threshold)
    }
}

/// Score a window against the fixed motif matrix.
///
/// # Errors
///
/// Same as [`MotifScorer::score`].
pub fn score_motif(window: &[u8]) -> Result<f64, OrfScanError> {
    MotifScorer::default().score(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_MOTIF_HIT;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_maximum_score_window() {
        let score = score_motif(TEST_MOTIF_HIT.as_bytes()).unwrap();
        assert!(approx_eq(score, 8.5));
    }

    #[test]
    fn test_excluded_cells_contribute_nothing() {
        // A at 0..=9 and 12 score; G at 10 and A at 11 are excluded.
        let score = score_motif(b"AAAAAAAAAAGAA").unwrap();
        assert!(approx_eq(score, 4.5));
        assert!(!MotifScorer::default().is_hit(b"AAAAAAAAAAGAA").unwrap());
    }

    #[test]
    fn test_negative_free_window_scores_zero() {
        let score = score_motif(b"CCCCCCCCCCCCC").unwrap();
        assert!(approx_eq(score, 0.0));
    }

    #[test]
    fn test_score_invariant_across_excluded_bases() {
        // Position 10 is excluded for A, C and G; position 11 for A, T and C.
        let scores_at = |position: usize, bases: &[u8]| -> Vec<f64> {
            bases
                .iter()
                .map(|&b| {
                    let mut window = *b"AAAACCCCCATGA";
                    window[position] = b;
                    score_motif(&window).unwrap()
                })
                .collect()
        };

        let at_10 = scores_at(10, b"ACG");
        assert!(at_10.iter().all(|&s| approx_eq(s, at_10[0])));
        assert!(approx_eq(at_10[0], 6.5));

        let at_11 = scores_at(11, b"ATC");
        assert!(at_11.iter().all(|&s| approx_eq(s, at_11[0])));
        assert!(approx_eq(at_11[0], 6.5));
    }

    #[test]
    fn test_threshold_is_strict() {
        // 0.5 * 3 (positions 1..=3) + 6 (ATG) + 0.5 (A at 12) = 8.0
        let window = b"CAAACCCCCATGA";
        assert!(approx_eq(score_motif(window).unwrap(), 8.0));
        assert!(MotifScorer::new(7.99).is_hit(window).unwrap());
        assert!(!MotifScorer::new(8.0).is_hit(window).unwrap());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let windows: [&[u8]; 4] = [b"", b"ATG", b"AAAACCCCCATG", b"AAAACCCCCATGAA"];
        for window in windows {
            match score_motif(window) {
                Err(OrfScanError::InvalidWindow { expected, actual }) => {
                    assert_eq!(expected, 13);
                    assert_eq!(actual, window.len());
                }
                other => panic!("Expected InvalidWindow, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_base_rejected() {
        match score_motif(b"AAAACNCCCATGA") {
            Err(OrfScanError::InvalidBase { base, position }) => {
                assert_eq!(base, 'N');
                assert_eq!(position, 5);
            }
            other => panic!("Expected InvalidBase, got {:?}", other),
        }
        assert!(score_motif(b"aaaaccccccatg").is_err());
    }

    #[test]
    fn test_scorer_accessors() {
        let scorer = MotifScorer::new(6.5);
        assert_eq!(scorer.width(), 13);
        assert!(approx_eq(scorer.threshold(), 6.5));
    }
}

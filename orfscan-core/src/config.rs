use crate::constants::{
    CODON_LENGTH, DEFAULT_SCORE_THRESHOLD, MIN_ORF_LENGTH, MOTIF_WIDTH, START_CODONS, STOP_CODONS,
};
use crate::types::{Nucleotide, OrfScanError};

/// Output format options for ORF reports.
///
/// # Formats
///
/// - **Fasta**: one header line and one sequence line per ORF
/// - **Gff**: General Feature Format version 3, one feature line per ORF
///
/// # Examples
///
/// ```rust
/// use orfscan_core::config::{OutputFormat, ScanConfig};
///
/// let config = ScanConfig {
///     output_format: OutputFormat::Gff,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// FASTA-style report.
    ///
    /// `> <id>_ORF<n>|Length <length>|at position <start>` followed by the
    /// ORF nucleotides.
    #[default]
    Fasta,

    /// General Feature Format version 3.
    ///
    /// Truncated ORFs carry `partial=true` in the attribute column.
    Gff,
}

impl OutputFormat {
    /// Parse a format name as accepted on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fasta" | "fa" => Some(Self::Fasta),
            "gff" | "gff3" => Some(Self::Gff),
            _ => None,
        }
    }
}

/// Configuration settings for an ORF scan.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use orfscan_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.window_size, 13);
/// assert_eq!(config.min_orf_length, 60);
/// ```
///
/// ## Relaxed thresholds on multiple threads
///
/// ```rust
/// use orfscan_core::config::ScanConfig;
///
/// let config = ScanConfig {
///     score_threshold: 6.0,
///     min_orf_length: 30,
///     num_threads: Some(4),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Width of the sliding motif window.
    ///
    /// Must equal the motif matrix width.
    ///
    /// **Default**: 13
    pub window_size: usize,

    /// A window is a motif hit only when its score is strictly greater.
    ///
    /// **Default**: 7.25
    pub score_threshold: f64,

    /// ORFs shorter than this are dropped.
    ///
    /// **Default**: 60
    pub min_orf_length: usize,

    /// Codons eligible as ORF starts.
    ///
    /// **Default**: `ATG`, `GTG`
    pub start_codons: Vec<String>,

    /// Codons that terminate an ORF.
    ///
    /// **Default**: `TAA`, `TAG`, `TGA`
    pub stop_codons: Vec<String>,

    /// Report format.
    ///
    /// **Default**: [`OutputFormat::Fasta`]
    pub output_format: OutputFormat,

    /// Number of threads used to scan sequences in parallel.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_size: MOTIF_WIDTH,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            min_orf_length: MIN_ORF_LENGTH,
            start_codons: START_CODONS.iter().map(|c| (*c).to_string()).collect(),
            stop_codons: STOP_CODONS.iter().map(|c| (*c).to_string()).collect(),
            output_format: OutputFormat::Fasta,
            num_threads: None,
        }
    }
}

impl ScanConfig {
    /// Checks that the settings are consistent with each other and with the
    /// fixed motif matrix.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::Config`] describing the first offending setting.
    pub fn validate(&self) -> Result<(), OrfScanError> {
        if self.window_size != MOTIF_WIDTH {
            return Err(OrfScanError::Config(format!(
                "window size {} does not match the motif matrix width {}",
                self.window_size, MOTIF_WIDTH
            )));
        }
        if !self.score_threshold.is_finite() {
            return Err(OrfScanError::Config(format!(
                "score threshold must be finite, got {}",
                self.score_threshold
            )));
        }
        if self.min_orf_length == 0 {
            return Err(OrfScanError::Config(
                "minimum ORF length must be positive".to_string(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(OrfScanError::Config(
                "thread count must be positive".to_string(),
            ));
        }
        validate_codons("start", &self.start_codons)?;
        validate_codons("stop", &self.stop_codons)?;
        Ok(())
    }

    pub(crate) fn is_start_codon(&self, codon: &[u8]) -> bool {
        self.start_codons.iter().any(|c| c.as_bytes() == codon)
    }

    pub(crate) fn is_stop_codon(&self, codon: &[u8]) -> bool {
        self.stop_codons.iter().any(|c| c.as_bytes() == codon)
    }
}

fn validate_codons(kind: &str, codons: &[String]) -> Result<(), OrfScanError> {
    if codons.is_empty() {
        return Err(OrfScanError::Config(format!("no {kind} codons configured")));
    }
    for codon in codons {
        let well_formed = codon.len() == CODON_LENGTH
            && codon.bytes().all(|b| Nucleotide::from_byte(b).is_some());
        if !well_formed {
            return Err(OrfScanError::Config(format!(
                "invalid {kind} codon '{codon}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.score_threshold, 7.25);
        assert_eq!(config.start_codons, vec!["ATG", "GTG"]);
        assert_eq!(config.stop_codons, vec!["TAA", "TAG", "TGA"]);
        assert_eq!(config.output_format, OutputFormat::Fasta);
    }

    #[test]
    fn test_window_size_must_match_matrix() {
        let config = ScanConfig {
            window_size: 12,
            ..Default::default()
        };
        match config.validate() {
            Err(OrfScanError::Config(msg)) => assert!(msg.contains("window size 12")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let config = ScanConfig {
            score_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrfScanError::Config(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = ScanConfig {
            num_threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrfScanError::Config(_))));
    }

    #[test]
    fn test_malformed_codons_rejected() {
        let config = ScanConfig {
            start_codons: vec!["AT".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrfScanError::Config(_))));

        let config = ScanConfig {
            stop_codons: vec!["TNA".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrfScanError::Config(_))));

        let config = ScanConfig {
            stop_codons: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrfScanError::Config(_))));
    }

    #[test]
    fn test_codon_membership() {
        let config = ScanConfig::default();
        assert!(config.is_start_codon(b"ATG"));
        assert!(config.is_start_codon(b"GTG"));
        assert!(!config.is_start_codon(b"TTG"));
        assert!(config.is_stop_codon(b"TGA"));
        assert!(!config.is_stop_codon(b"TGG"));
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("fasta"), Some(OutputFormat::Fasta));
        assert_eq!(OutputFormat::from_name("GFF"), Some(OutputFormat::Gff));
        assert_eq!(OutputFormat::from_name("gff3"), Some(OutputFormat::Gff));
        assert_eq!(OutputFormat::from_name("gbk"), None);
    }
}

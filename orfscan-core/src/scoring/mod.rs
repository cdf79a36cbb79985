//! Window and codon scoring.
//!
//! - [`motif`]: position-specific scoring of a fixed-width window
//! - [`codon`]: start codon preference lookup

pub mod codon;
pub mod motif;

pub use codon::score_codon;
pub use motif::{MotifScorer, score_motif};

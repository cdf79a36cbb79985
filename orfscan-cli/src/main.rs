//! # orfscan CLI - Motif-Guided ORF Scanner
//!
//! A command-line interface for scanning FASTA files for open reading frames
//! that start near a translation initiation motif.
//!
//! ## Usage
//!
//! ```bash
//! # Write ORFs.fa in the current directory
//! orfscan -i contigs.fasta
//!
//! # GFF3 output to a chosen file
//! orfscan -i contigs.fasta -f gff -o orfs.gff
//!
//! # Looser motif threshold, shorter ORFs, four threads
//! orfscan -i contigs.fasta --threshold 6.5 --min-length 45 -j 4
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA file
//! - `-o, --output <FILE>`: Output file (default: ORFs.fa)
//! - `-f, --format <FORMAT>`: Output format: fasta, gff (default: fasta)
//! - `--threshold <SCORE>`: Motif score threshold (default: 7.25)
//! - `--min-length <BP>`: Minimum ORF length (default: 60)
//! - `--window-size <BP>`: Motif window width (default: 13)
//! - `-j, --threads <N>`: Worker threads (default: all cores)
//! - `-q, --quiet`: Only log warnings and errors
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use orfscan_core::config::{OutputFormat, ScanConfig};
use orfscan_core::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SCORE_THRESHOLD, MIN_ORF_LENGTH, MOTIF_WIDTH,
};
use orfscan_core::output::write_results;
use orfscan_core::results::ScanResults;
use orfscan_core::*;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("orfscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Motif-guided open reading frame scanner")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file")
                .default_value(DEFAULT_OUTPUT_PATH),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: fasta, gff")
                .default_value("fasta"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("SCORE")
                .help(format!(
                    "Motif score a window must exceed to count as a hit [default: {}]",
                    DEFAULT_SCORE_THRESHOLD
                ))
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .value_name("BP")
                .help(format!("Minimum reported ORF length [default: {}]", MIN_ORF_LENGTH))
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("window-size")
                .long("window-size")
                .value_name("BP")
                .help(format!("Motif window width [default: {}]", MOTIF_WIDTH))
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .help("Number of worker threads (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Scan settings from the command line; options left out keep the
/// [`ScanConfig`] defaults.
fn scan_config(matches: &ArgMatches, output_format: OutputFormat) -> ScanConfig {
    let mut config = ScanConfig {
        output_format,
        num_threads: matches.get_one::<usize>("threads").copied(),
        ..Default::default()
    };
    if let Some(&window_size) = matches.get_one::<usize>("window-size") {
        config.window_size = window_size;
    }
    if let Some(&threshold) = matches.get_one::<f64>("threshold") {
        config.score_threshold = threshold;
    }
    if let Some(&min_length) = matches.get_one::<usize>("min-length") {
        config.min_orf_length = min_length;
    }
    config
}

/// Main entry point for the orfscan CLI application.
///
/// Parses command-line arguments, scans the input sequences and writes the
/// report in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("quiet"));

    let format_name = matches
        .get_one::<String>("format")
        .map_or("fasta", String::as_str);
    let output_format = OutputFormat::from_name(format_name)
        .ok_or_else(|| format!("Invalid output format: {}", format_name))?;

    let config = scan_config(&matches, output_format);
    config.validate()?;

    let input = matches
        .get_one::<String>("input")
        .ok_or("No input file given")?;
    let output = matches
        .get_one::<String>("output")
        .map_or(DEFAULT_OUTPUT_PATH, String::as_str);

    info!(input = %input, "scanning");
    let analyzer = OrfAnalyzer::new(config);
    let results = analyzer.analyze_fasta_file(input)?;

    let mut writer = BufWriter::new(File::create(output)?);
    write_results(&mut writer, &results, analyzer.config.output_format)?;

    info!(
        "Analysis complete! Found {} ORFs ({} truncated) in {} sequences, report written to {}",
        results.iter().map(|r| r.orfs.len()).sum::<usize>(),
        results.iter().map(ScanResults::truncated_count).sum::<usize>(),
        results.len(),
        output
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let matches = cli().try_get_matches_from(["orfscan", "-i", "in.fa"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("output").map(String::as_str),
            Some("ORFs.fa")
        );
        assert!(!matches.get_flag("quiet"));

        let config = scan_config(&matches, OutputFormat::Fasta);
        assert_eq!(config, ScanConfig::default());
        assert_eq!(config.score_threshold, DEFAULT_SCORE_THRESHOLD);
        assert_eq!(config.min_orf_length, MIN_ORF_LENGTH);
        assert_eq!(config.window_size, MOTIF_WIDTH);
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn test_cli_overrides_reach_config() {
        let matches = cli()
            .try_get_matches_from([
                "orfscan",
                "-i",
                "in.fa",
                "--threshold",
                "6.5",
                "--min-length",
                "30",
                "-j",
                "2",
            ])
            .unwrap();

        let config = scan_config(&matches, OutputFormat::Gff);
        assert_eq!(config.score_threshold, 6.5);
        assert_eq!(config.min_orf_length, 30);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.output_format, OutputFormat::Gff);
        assert_eq!(config.window_size, MOTIF_WIDTH);
    }

    #[test]
    fn test_help_shows_defaults_from_constants() {
        let help = cli().render_help().to_string();
        assert!(help.contains(&format!("[default: {}]", DEFAULT_SCORE_THRESHOLD)));
        assert!(help.contains(&format!("[default: {}]", MIN_ORF_LENGTH)));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(cli().try_get_matches_from(["orfscan"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_threshold() {
        assert!(
            cli()
                .try_get_matches_from(["orfscan", "-i", "in.fa", "--threshold", "high"])
                .is_err()
        );
    }
}

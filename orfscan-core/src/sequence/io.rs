use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bio::io::fasta;
use tracing::warn;

use super::SequenceRecord;
use crate::types::OrfScanError;

/// Non-fatal findings while loading a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A later record reused an identifier; its sequence replaced the earlier one
    DuplicateIdentifier { id: String },
}

/// Sequences in file order, one per distinct identifier.
#[derive(Debug, Clone, Default)]
pub struct LoadedSequences {
    pub records: Vec<SequenceRecord>,
    pub warnings: Vec<LoadWarning>,
}

/// Read sequences from a FASTA file using rust-bio.
///
/// # Errors
///
/// - [`OrfScanError::Io`] if the file cannot be read
/// - [`OrfScanError::Format`] if the file is empty, malformed or not UTF-8
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<LoadedSequences, OrfScanError> {
    let bytes = fs::read(path)?;
    let content = std::str::from_utf8(&bytes)
        .map_err(|e| OrfScanError::Format(format!("input is not valid UTF-8: {}", e)))?;
    parse_fasta_sequences(content)
}

/// Parse FASTA text into identifier-keyed sequences.
///
/// The identifier is the header text after `>` up to the first `|`, trimmed,
/// with inner whitespace kept as written. Blank lines are dropped before
/// parsing. A duplicated identifier keeps the position of its first occurrence
/// and the sequence of its last.
///
/// # Errors
///
/// Returns [`OrfScanError::Format`] when there are no records, when sequence
/// data precedes the first header, or when a header has no identifier.
pub fn parse_fasta_sequences(content: &str) -> Result<LoadedSequences, OrfScanError> {
    let (cleaned, identifiers) = normalize_lines(content)?;
    if identifiers.is_empty() {
        return Err(OrfScanError::Format("input contains no records".to_string()));
    }

    let reader = fasta::Reader::new(cleaned.as_bytes());
    let mut loaded = LoadedSequences::default();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut identifiers = identifiers.into_iter();

    for result in reader.records() {
        let record = result.map_err(|e| OrfScanError::Format(e.to_string()))?;
        let id = identifiers.next().ok_or_else(|| {
            OrfScanError::Format("more records than header lines".to_string())
        })?;
        let sequence = record.seq().to_vec();
        match positions.get(&id) {
            Some(&index) => {
                warn!(id = %id, "duplicate identifier, keeping the later sequence");
                loaded.records[index].sequence = sequence;
                loaded
                    .warnings
                    .push(LoadWarning::DuplicateIdentifier { id });
            }
            None => {
                positions.insert(id.clone(), loaded.records.len());
                loaded.records.push(SequenceRecord { id, sequence });
            }
        }
    }

    if identifiers.next().is_some() {
        return Err(OrfScanError::Format(
            "header lines without a parsed record".to_string(),
        ));
    }
    Ok(loaded)
}

/// Trims every line, drops blank ones and collects the header identifiers.
///
/// rust-bio splits headers at the first whitespace, so identifiers are taken
/// from the raw lines here. It also ends iteration at a record with neither
/// identifier nor sequence, so such headers are rejected up front.
fn normalize_lines(content: &str) -> Result<(String, Vec<String>), OrfScanError> {
    let mut cleaned = String::with_capacity(content.len());
    let mut identifiers = Vec::new();
    for (line_number, line) in content.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let id = identifier(header);
            if id.is_empty() {
                return Err(OrfScanError::Format(format!(
                    "header on line {} has an empty identifier",
                    line_number + 1
                )));
            }
            identifiers.push(id);
        }
        cleaned.push_str(line);
        cleaned.push('\n');
    }
    Ok((cleaned, identifiers))
}

/// Header text up to the first `|`, trimmed.
fn identifier(header: &str) -> String {
    header
        .split('|')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

//! FASTA record parser.
//!
//! Every line is trimmed of surrounding whitespace first. Lines then starting
//! with `>` open a new record whose label is the rest of the line. Every other
//! non-blank line is appended to the current record's sequence. Content before
//! the first marker is ignored.
//!
//! Files ending in `.gz` or `.bgz` are decompressed transparently.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::warn;

use crate::core::record::Record;
use crate::parsing::ParseError;
use crate::utils::validation::{check_record_limit, normalize_extension};

/// Record marker glyph
pub const RECORD_MARKER: char = '>';

/// Extensions recognised when none are configured
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".fasta", ".fas", ".fa", ".faa"];

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Extension of `path` after removing any compression suffix, lowercased and
/// with a leading dot (`reads.FA.gz` -> `.fa`).
pub fn fasta_extension(path: &Path) -> Option<String> {
    let inner = if is_gzipped(path) {
        Path::new(path.file_stem()?)
    } else {
        path
    };

    inner
        .extension()
        .and_then(|e| e.to_str())
        .map(normalize_extension)
}

/// Check if the path carries one of the recognised extensions.
///
/// `extensions` may be given with or without the leading dot, in any case.
pub fn has_fasta_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = fasta_extension(path) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| normalize_extension(candidate.as_ref()) == ext)
}

/// Parse FASTA text into records, preserving file order.
///
/// Records with no sequence lines at all are dropped with a warning. A record
/// whose content has no residue letters is kept; filtering happens later.
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the record limit is exceeded.
pub fn parse_fasta_text(text: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(label) = line.strip_prefix(RECORD_MARKER) {
            if let Some((label, sequence)) = current.take() {
                push_record(&mut records, label, sequence)?;
            }
            current = Some((label.to_string(), String::new()));
            continue;
        }

        if line.is_empty() {
            continue;
        }
        if let Some((_, sequence)) = current.as_mut() {
            sequence.push_str(line);
        }
    }

    if let Some((label, sequence)) = current.take() {
        push_record(&mut records, label, sequence)?;
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Record>, label: String, sequence: String) -> Result<(), ParseError> {
    if sequence.is_empty() {
        warn!("Dropping record '{label}': no sequence lines");
        return Ok(());
    }

    // Check record limit for DOS protection
    if check_record_limit(records.len()).is_some() {
        return Err(ParseError::TooManyRecords(records.len()));
    }

    records.push(Record::new(label, sequence));
    Ok(())
}

/// Read a FASTA file (plain or gzipped) and parse its records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidEncoding`
/// if it is not UTF-8 text, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    let text = read_text(path)?;
    parse_fasta_text(&text)
}

fn read_text(path: &Path) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        std::io::BufReader::new(file).read_to_end(&mut bytes)?;
    }

    Ok(String::from_utf8(bytes)?)
}

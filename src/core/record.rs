use std::path::{Path, PathBuf};

/// A single labelled sequence parsed from a FASTA file.
///
/// `label` is the definition line with only the leading `>` removed.
/// `raw_sequence` is the concatenation of the trimmed content lines, before
/// any residue filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub raw_sequence: String,
}

impl Record {
    pub fn new(label: impl Into<String>, raw_sequence: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw_sequence: raw_sequence.into(),
        }
    }
}

/// The ordered records of one input file, together with the job name derived
/// from that file.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Path the records were read from
    pub source: PathBuf,

    /// File base name without FASTA or compression extensions
    pub base_name: String,

    /// Records in file order
    pub records: Vec<Record>,
}

impl Batch {
    pub fn new(source: impl Into<PathBuf>, base_name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            source: source.into(),
            base_name: base_name.into(),
            records,
        }
    }

    /// Build a batch named after the file stem of `source`.
    pub fn from_path(source: &Path, records: Vec<Record>) -> Self {
        Self::new(source, base_name(source), records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// File name with the compression suffix (if any) and then the last
/// extension removed: `dir/complex.fasta.gz` -> `complex`.
#[must_use]
pub fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let without_compression = [".gz", ".bgz"]
        .iter()
        .find_map(|suffix| {
            let split = file_name.len().checked_sub(suffix.len())?;
            let tail = file_name.get(split..)?;
            (split > 0 && tail.eq_ignore_ascii_case(suffix)).then(|| &file_name[..split])
        })
        .unwrap_or(&file_name);

    Path::new(without_compression)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

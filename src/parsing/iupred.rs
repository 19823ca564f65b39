//! Parser for IUPred3 per-residue disorder tables.
//!
//! Rows are tab-separated `position, residue, score`. Blank lines and
//! anything after a `#` are ignored; there is no header row.

use std::path::Path;

use crate::parsing::ParseError;

/// One residue's disorder prediction
#[derive(Debug, Clone, PartialEq)]
pub struct DisorderRow {
    pub position: u64,
    pub residue: String,
    pub score: f64,
}

/// Parse an IUPred3 table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a row is malformed or there are no rows.
pub fn parse_iupred_file(path: &Path) -> Result<Vec<DisorderRow>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_iupred_text(&content)
}

/// Parse IUPred3 table text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row has fewer than 3 fields or
/// non-numeric position/score values, or if no rows are found.
pub fn parse_iupred_text(text: &str) -> Result<Vec<DisorderRow>, ParseError> {
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        if line.trim().is_empty() {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 3 fields"
            )));
        }

        let position = fields[0].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid position on line {line_num}: '{}'",
                fields[0]
            ))
        })?;
        let score = fields[2].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid score on line {line_num}: '{}'",
                fields[2]
            ))
        })?;

        rows.push(DisorderRow {
            position,
            residue: fields[1].to_string(),
            score,
        });
    }

    if rows.is_empty() {
        return Err(ParseError::InvalidFormat("No rows found".to_string()));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iupred_text() {
        let text = "# IUPred3 output\n# POS\tRES\tIUPRED2\n1\tM\t0.8123\n2\tK\t0.4\n\n3\tV\t0.55 # note\n";
        let rows = parse_iupred_text(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].residue, "M");
        assert!((rows[0].score - 0.8123).abs() < 1e-12);
        assert!((rows[2].score - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_parse_iupred_rejects_bad_score() {
        let err = parse_iupred_text("1\tM\tabc\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_iupred_rejects_short_rows() {
        assert!(parse_iupred_text("1\tM\n").is_err());
    }

    #[test]
    fn test_parse_iupred_empty() {
        assert!(parse_iupred_text("# only comments\n").is_err());
    }
}

//! Per-atom B-factors from PDB files, read with pdbtbx.
//!
//! Predicted structures store per-residue confidence (pLDDT) in the B-factor
//! column, so averaging it over all atoms gives a whole-model confidence.
//! Atoms with alternate locations count once: the location with the highest
//! occupancy is used, the first one on ties.

use std::path::Path;

use pdbtbx::{StrictnessLevel, PDB};

use crate::parsing::ParseError;

/// B-factors of every selected atom (ATOM and HETATM), across all models.
#[must_use]
pub fn b_factors(pdb: &PDB) -> Vec<f64> {
    let mut values = Vec::new();

    for model in pdb.models() {
        for residue in model.residues() {
            // (atom name, occupancy, b-factor) of the selected location
            let mut selected: Vec<(&str, f64, f64)> = Vec::new();

            for atom in residue.conformers().flat_map(|c| c.atoms()) {
                match selected.iter_mut().find(|slot| slot.0 == atom.name()) {
                    Some(slot) if atom.occupancy() > slot.1 => {
                        slot.1 = atom.occupancy();
                        slot.2 = atom.b_factor();
                    }
                    Some(_) => {}
                    None => selected.push((atom.name(), atom.occupancy(), atom.b_factor())),
                }
            }

            values.extend(selected.into_iter().map(|(_, _, b)| b));
        }
    }

    values
}

/// Read a PDB file and return its atom B-factors
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if pdbtbx cannot read the file.
pub fn parse_b_factors_file(path: &Path) -> Result<Vec<f64>, ParseError> {
    let (pdb, _warnings) = pdbtbx::open_pdb(path.to_string_lossy(), StrictnessLevel::Loose)
        .map_err(|errors| {
            ParseError::InvalidFormat(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    Ok(b_factors(&pdb))
}

/// Arithmetic mean, or None for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PDB_TEXT: &str = "\
ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00 90.00           N
ATOM      2  CA  MET A   1      11.104   6.134  -6.504  1.00 70.00           C
ATOM      3  CB ASER A   2      11.104   6.134  -6.504  0.60 40.00           C
ATOM      4  CB BSER A   2      11.104   6.134  -6.504  0.40 90.00           C
HETATM    5  O   HOH A 101      11.104   6.134  -6.504  1.00 50.00           O
END
";

    fn pdb_file(text: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".pdb").unwrap();
        temp.write_all(text.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_parse_b_factors_file() {
        let temp = pdb_file(PDB_TEXT);
        let mut values = parse_b_factors_file(temp.path()).unwrap();
        values.sort_by(f64::total_cmp);

        // The 0.40-occupancy CB location is not counted
        assert_eq!(values, vec![40.0, 50.0, 70.0, 90.0]);
        assert_eq!(mean(&values), Some(62.5));
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(mean(&[]), None);
    }
}

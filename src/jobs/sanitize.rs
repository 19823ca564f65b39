//! Residue filtering for sequences and filename-safe labels for split jobs.

/// The 20 standard amino acids accepted by the prediction pipeline
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Maximum number of characters of a record label kept in a split job name
pub const MAX_LABEL_CHARS: usize = 50;

/// Upper-case `sequence` and drop every character outside [`AMINO_ACIDS`].
///
/// An input with no residue letters yields an empty string.
///
/// # Examples
///
/// ```
/// use af3_prep::jobs::sanitize::sanitize_sequence;
///
/// assert_eq!(sanitize_sequence("acd-ef*g 12"), "ACDEFG");
/// assert_eq!(sanitize_sequence("123"), "");
/// ```
#[must_use]
pub fn sanitize_sequence(sequence: &str) -> String {
    sequence
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii() && AMINO_ACIDS.contains(&(*c as u8)))
        .collect()
}

/// Make a record label safe for use in a file name.
///
/// Characters other than alphanumerics, `-`, `_` and `.` become `_`, and the
/// result is cut to [`MAX_LABEL_CHARS`] characters.
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_LABEL_CHARS)
        .collect()
}

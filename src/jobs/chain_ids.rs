//! Chain identifier assignment.
//!
//! Identifiers follow `A..Z`, then two letters where the first letter is
//! `(i / 26) - 1` and the second `i % 26`: index 26 is `AA`, 51 is `AZ`,
//! 52 is `BA`. The two-letter range starts at index 26, not at 702 as a true
//! spreadsheet-column scheme would. Existing job files depend on this mapping,
//! so it must not change.

use crate::core::job::ChainId;

const ALPHABET_LEN: usize = 26;

/// Identifier for the zero-based position `index` within a batch.
#[must_use]
pub fn chain_id(index: usize) -> ChainId {
    if index < ALPHABET_LEN {
        ChainId(letter(index).to_string())
    } else {
        let first = letter(index / ALPHABET_LEN - 1);
        let second = letter(index % ALPHABET_LEN);
        ChainId(format!("{first}{second}"))
    }
}

/// Identifiers for a batch of `n` sequences, in position order.
///
/// # Examples
///
/// ```
/// use af3_prep::jobs::chain_ids::generate_ids;
///
/// let ids: Vec<String> = generate_ids(3).into_iter().map(|id| id.0).collect();
/// assert_eq!(ids, vec!["A", "B", "C"]);
/// ```
#[must_use]
pub fn generate_ids(n: usize) -> Vec<ChainId> {
    (0..n).map(chain_id).collect()
}

/// Character `offset` places after `A`.
///
/// Past index 701 the first letter runs beyond `Z` into the following code
/// points; the record limit keeps offsets far below the surrogate range.
fn letter(offset: usize) -> char {
    u32::try_from(offset)
        .ok()
        .and_then(|o| o.checked_add(u32::from(b'A')))
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

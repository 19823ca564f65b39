//! Centralized validation and helper functions.

/// Maximum number of records allowed in a single file (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len()).is_some() {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Normalize a file extension to lowercase with a single leading dot.
///
/// # Examples
///
/// ```
/// use af3_prep::utils::validation::normalize_extension;
///
/// assert_eq!(normalize_extension("FASTA"), ".fasta");
/// assert_eq!(normalize_extension(".Fa"), ".fa");
/// ```
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim().trim_start_matches('.').to_lowercase())
}

/// Normalize a list of extensions, dropping blanks and duplicates while
/// keeping the first occurrence order.
#[must_use]
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
    for ext in extensions {
        if ext.as_ref().trim().trim_start_matches('.').is_empty() {
            continue;
        }
        let ext = normalize_extension(ext.as_ref());
        if !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_normalize_extensions() {
        let exts = normalize_extensions(&[".FASTA", "fa", ".fa", "", "."]);
        assert_eq!(exts, vec![".fasta".to_string(), ".fa".to_string()]);
    }
}

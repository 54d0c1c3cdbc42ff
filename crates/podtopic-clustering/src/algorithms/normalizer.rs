//! Transcript text normalization.

/// Lowercase `text` and drop every character outside `[a-z0-9 ]`.
///
/// Dropped characters are removed, not replaced, so `"well-known"` becomes
/// `"wellknown"`. Non-ASCII letters are dropped after lowercasing.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

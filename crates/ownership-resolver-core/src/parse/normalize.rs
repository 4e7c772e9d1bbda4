//! Line and path normalization.
//!
//! Every consumer of the ownership file works on normalized lines:
//! lower-cased, backslash path separators, empty lines dropped. Comment
//! lines survive normalization; consumers that only want content lines
//! filter them out themselves.

/// Normalizes raw file content into the canonical line form.
///
/// Drops lines equal to the empty string, lower-cases everything, and
/// replaces `/` with `\`. Order is preserved.
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| normalize_path(line))
        .collect()
}

/// Normalizes a single path or line: lower-case, `/` → `\`.
pub fn normalize_path(path: &str) -> String {
    path.to_lowercase().replace('/', "\\")
}

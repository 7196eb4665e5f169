//! Comment line removal for query text.

/// Drops every line whose trimmed form starts with `#`.
///
/// All other lines, blank ones included, are kept verbatim and re-joined with `\n`.
pub fn remove_comments(section_text: &str) -> String {
    section_text
        .split('\n')
        .filter(|line| !line.trim().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

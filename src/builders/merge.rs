//! Duplicate detection and content merging for the ignore-file.
//!
//! All functions here are pure: they take the current file content and
//! return a decision or the new content. Content is handled as raw bytes so
//! a file in any encoding is appended to without being re-encoded. Existing
//! lines are never removed or reordered.

use bstr::ByteSlice;

/// Returns the first `len` characters of a template body (or all of it if
/// shorter).
pub fn template_prefix(body: &str, len: usize) -> &str {
    match body.char_indices().nth(len) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Heuristic check for a template that was already merged.
///
/// An empty file never contains a template. Otherwise the template counts as
/// present when its leading `prefix_len` characters occur anywhere in the
/// content, so an edited copy of the template may go unnoticed.
pub fn contains_template(content: &[u8], body: &str, prefix_len: usize) -> bool {
    !content.is_empty() && content.contains_str(template_prefix(body, prefix_len))
}

/// Appends a template to the existing content.
///
/// An empty file becomes exactly the template. Otherwise the template is
/// separated by a blank line and a `# <lang> template` heading.
pub fn merge_template(content: &[u8], lang: &str, body: &str) -> Vec<u8> {
    if content.is_empty() {
        return body.as_bytes().to_vec();
    }

    let mut merged = Vec::with_capacity(content.len() + body.len() + lang.len() + 16);
    merged.extend_from_slice(content);
    if !merged.ends_with(b"\n") {
        merged.push(b'\n');
    }
    merged.extend_from_slice(b"\n# ");
    merged.extend_from_slice(lang.as_bytes());
    merged.extend_from_slice(b" template\n");
    merged.extend_from_slice(body.as_bytes());
    merged
}

/// Returns `true` if a line equal to `entry` (both trimmed) is present.
pub fn contains_entry(content: &[u8], entry: &[u8]) -> bool {
    let entry = entry.trim();
    content.lines().any(|line| line.trim() == entry)
}

/// Appends `entry` as a new line.
pub fn append_entry(content: &[u8], entry: &[u8]) -> Vec<u8> {
    let mut updated = Vec::with_capacity(content.len() + entry.len() + 2);
    updated.extend_from_slice(content);
    if !updated.is_empty() && !updated.ends_with(b"\n") {
        updated.push(b'\n');
    }
    updated.extend_from_slice(entry);
    updated.push(b'\n');
    updated
}

//! Text shaping shared by the catalog and the label normalizer.
//!
//! Label blocks arrive as run-on text with erratic whitespace and inline
//! bullet markers; these helpers collapse them into bounded, readable
//! paragraphs.

/// Hard cap applied by [`clean_text`].
pub const CLEAN_TEXT_MAX: usize = 500;

/// Marker appended when a paragraph is cut mid-sentence.
const ELLIPSIS: &str = "...";

/// Lowercase and trim a free-text query.
///
/// Every resolution path starts here; the static catalog keys and alias
/// table entries are stored pre-normalized.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Collapse whitespace runs to single spaces, insert a line break before
/// each `•` bullet marker, trim, and cap at [`CLEAN_TEXT_MAX`] characters.
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let bulleted = collapsed.replace('•', "\n•");
    bulleted.trim().chars().take(CLEAN_TEXT_MAX).collect()
}

/// Clean `text` and bound it to `max_len` characters.
///
/// When the cleaned text overflows, prefer cutting at the last sentence
/// period inside the window — but only if that period lands past the window
/// midpoint. Otherwise cut hard and append an ellipsis, so the result never
/// exceeds `max_len + 3` characters.
pub fn extract_first_paragraph(text: &str, max_len: usize) -> String {
    let cleaned = clean_text(text);
    if cleaned.chars().count() <= max_len {
        return cleaned;
    }

    let truncated: String = cleaned.chars().take(max_len).collect();
    let mut last_period: Option<(usize, usize)> = None;
    for (pos, (byte_idx, ch)) in truncated.char_indices().enumerate() {
        if ch == '.' {
            last_period = Some((pos, byte_idx));
        }
    }

    match last_period {
        Some((pos, byte_idx)) if pos > max_len / 2 => truncated[..byte_idx + 1].to_string(),
        _ => truncated + ELLIPSIS,
    }
}

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `raw` to at most `max_width` terminal columns, ending in `…` (or
/// `...` in ASCII mode) when something was cut.
pub(crate) fn truncate_to_width(raw: &str, max_width: usize, ascii: bool) -> String {
    let trimmed = raw.trim();
    if trimmed.width() <= max_width {
        return trimmed.to_string();
    }

    let ellipsis = if ascii { "..." } else { "…" };
    let budget = max_width.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in trimmed.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max_width >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

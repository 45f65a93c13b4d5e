use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert!(matches!(truncate("api", 10), Cow::Borrowed("api")));
    }

    #[test]
    fn test_truncates_by_columns() {
        assert_eq!(truncate("checkout-service", 8), "checkou…");
        // Wide characters take two columns each
        assert_eq!(truncate("日本語のポッド", 6), "日本…");
        assert_eq!(truncate("anything", 0), "");
    }
}

//! Lexical normalization of raw hours text.
//!
//! Scraped hours strings mix full-width and half-width digits, several dash
//! variants, and arbitrary whitespace. This pass canonicalizes all of that
//! so the token resolvers downstream match against one form. No semantic
//! interpretation happens here.

/// Canonicalizes a raw hours string: full-width digits and colons become
/// half-width, every range-dash variant becomes `～`, and whitespace runs
/// collapse to a single space. Returns `None` for empty or whitespace-only
/// input — the caller treats that as "unknown hours".
pub(crate) fn normalize(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        let mapped = match ch {
            '０'..='９' => {
                // Full-width digits sit at U+FF10..U+FF19, a fixed offset
                // from ASCII.
                char::from_u32(u32::from(ch) - 0xFEE0).unwrap_or(ch)
            }
            '：' => ':',
            '〜' | '～' | '~' | '-' => '～',
            c if c.is_whitespace() => {
                pending_space = true;
                continue;
            }
            c => c,
        };
        if pending_space {
            if !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(mapped);
    }

    Some(out)
}

//! Output shortening for narrow displays

const PLACEHOLDER: &str = "...";

/// Smallest limit that still leaves one character on each side
const MIN_LIMIT: usize = PLACEHOLDER.len() + 2;

/// Shorten `s` to at most `limit` characters, keeping both ends
///
/// Strings that already fit are returned unchanged. Otherwise the head gets
/// the extra character when the remaining room is odd. Works on chars, so
/// multi-byte input is never split.
pub fn ellipsize(s: &str, limit: usize) -> String {
    let limit = limit.max(MIN_LIMIT);
    let len = s.chars().count();
    if len <= limit {
        return s.to_string();
    }

    let keep = limit - PLACEHOLDER.len();
    let head = keep.div_ceil(2);
    let tail = keep - head;

    let mut out = String::with_capacity(limit);
    out.extend(s.chars().take(head));
    out.push_str(PLACEHOLDER);
    out.extend(s.chars().skip(len - tail));
    out
}

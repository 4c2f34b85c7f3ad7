//! Log sanitization utilities
//!
//! A listing response is `{"data": [...], "total": N}`: the interesting bits
//! sit at both ends, while the middle is up to 50 recipes of descriptions and
//! nutrition blobs. Bodies are squeezed onto one line and the middle is
//! elided so a page fetch costs one readable log line.

/// Characters kept from the start of a body.
const HEAD_CHARS: usize = 192;
/// Characters kept from the end of a body (where `total` usually is).
const TAIL_CHARS: usize = 64;

/// Collapse every whitespace run (newlines from pretty-printed JSON or HTML
/// error pages included) into a single space.
fn squeeze_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Abbreviate a response body for logging.
///
/// Short bodies come back whitespace-squeezed but otherwise whole. Longer
/// ones keep their first [`HEAD_CHARS`] and last [`TAIL_CHARS`] characters
/// around a marker with the number of characters dropped.
pub fn abbreviate_body(body: &str) -> String {
    let flat = squeeze_whitespace(body);
    let len = flat.chars().count();
    if len <= HEAD_CHARS + TAIL_CHARS {
        return flat;
    }

    let head: String = flat.chars().take(HEAD_CHARS).collect();
    let tail: String = flat.chars().skip(len - TAIL_CHARS).collect();
    format!(
        "{head} ... [{} chars omitted] ... {tail}",
        len - HEAD_CHARS - TAIL_CHARS
    )
}

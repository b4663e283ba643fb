use crate::error::ValidationError;

pub const MIN_TRIMMED_LEN: usize = 10;
pub const MAX_RAW_LEN: usize = 5000;

/// Checks raw input text before it may be submitted.
///
/// Lengths are counted in UTF-16 code units, the way the browser measures
/// strings. The minimum applies to the trimmed text while the maximum applies
/// to the untrimmed text, so surrounding whitespace counts against the upper
/// bound only.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let trimmed = trim_browser_whitespace(text);
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if utf16_len(trimmed) < MIN_TRIMMED_LEN {
        return Err(ValidationError::TooShort);
    }
    if utf16_len(text) > MAX_RAW_LEN {
        return Err(ValidationError::TooLong);
    }
    Ok(())
}

/// Trims the characters `String.prototype.trim` removes: Unicode `White_Space`
/// plus the byte order mark, minus NEL (U+0085).
fn trim_browser_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}'))
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

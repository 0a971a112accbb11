//! Pure helpers behind the translation length widget.
//!
//! - **Limit extraction**: reads the `MAX_LENGTH: <n>` directive that `lang`
//!   strings carry on the first line of their comment.
//! - **Length measurement**: counts UTF-16 code units, the unit browsers use
//!   for string length and for the textarea the translation is typed in.

use common::model::entity::{Entity, MAX_LENGTH_MARKER, MAX_LENGTH_PREFIX};

use super::markup::ExtractText;

/// Maximum translation length declared for `entity`, if any.
///
/// Only entities in the countdown format are considered. The directive must
/// open the first line of the comment:
///
/// ```text
/// MAX_LENGTH: 140 (original comment text)
/// ```
///
/// A missing or malformed directive yields `None`.
pub fn get_limit(entity: Option<&Entity>) -> Option<i64> {
    let entity = entity?;
    if !entity.supports_countdown() {
        return None;
    }
    parse_max_length(entity.comment_first_line())
}

/// Parses the value of a `MAX_LENGTH` directive line.
///
/// The value is the text between the first `MAX_LENGTH: ` and the next space
/// (or the end of the line). It is read the way `parseInt(value, 10)` would:
/// `140abc` is 140, `abc` is nothing.
pub fn parse_max_length(line: &str) -> Option<i64> {
    if !line.starts_with(MAX_LENGTH_MARKER) {
        return None;
    }
    let value = line.split(MAX_LENGTH_PREFIX).nth(1)?;
    let token = value.split(' ').next()?;
    parse_int_prefix(token)
}

/// Lenient base-10 parse: skips leading whitespace, accepts one sign and reads
/// the longest run of ASCII digits that follows.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let trimmed = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Length of the text `markup` renders to, with tags removed and character
/// references resolved.
pub fn stripped_length(extractor: &dyn ExtractText, markup: &str) -> usize {
    utf16_len(&extractor.extract_text(markup))
}

use serde::{Deserialize, Serialize};

/// Format tag of strings that may carry a `MAX_LENGTH` directive in their comment.
pub const COUNTDOWN_FORMAT: &str = "lang";

/// Marker the first comment line must start with to declare a maximum length.
pub const MAX_LENGTH_MARKER: &str = "MAX_LENGTH";

/// Text that precedes the numeric value inside a `MAX_LENGTH` directive.
pub const MAX_LENGTH_PREFIX: &str = "MAX_LENGTH: ";

/// A localizable source string as delivered by the entity list.
///
/// The editor only reads it: the translation length widget picks the original
/// text from it and, for `lang` strings, the maximum length declared on the
/// first line of `comment`, e.g.
///
/// ```text
/// MAX_LENGTH: 140 (Tweet text shared from the download page)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Source-string syntax family (`po`, `lang`, `ftl`, ...).
    pub format: String,
    /// Translator-facing comment. Empty when the string has none.
    #[serde(default)]
    pub comment: String,
    /// Singular source text.
    pub original: String,
    /// Plural source text. Empty for strings without plural forms.
    #[serde(default)]
    pub original_plural: String,
}

impl Entity {
    /// Whether the comment of this entity may define a countdown limit.
    pub fn supports_countdown(&self) -> bool {
        self.format == COUNTDOWN_FORMAT
    }

    /// First line of the comment, where a length directive would live.
    pub fn comment_first_line(&self) -> &str {
        self.comment.split('\n').next().unwrap_or_default()
    }

    /// Source text matching the plural form being edited.
    ///
    /// `-1` (no plurals) and `0` select the singular original, every other
    /// index selects the plural one.
    pub fn original_for(&self, plural_form: i32) -> &str {
        match plural_form {
            -1 | 0 => &self.original,
            _ => &self.original_plural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(format: &str, comment: &str) -> Entity {
        Entity {
            format: format.to_string(),
            comment: comment.to_string(),
            original: "Hello".to_string(),
            original_plural: "Hellos".to_string(),
        }
    }

    #[test]
    fn only_lang_supports_countdown() {
        assert!(entity("lang", "").supports_countdown());
        assert!(!entity("po", "").supports_countdown());
        assert!(!entity("LANG", "").supports_countdown());
    }

    #[test]
    fn first_line_of_comment() {
        assert_eq!(entity("lang", "one\ntwo").comment_first_line(), "one");
        assert_eq!(entity("lang", "").comment_first_line(), "");
        assert_eq!(entity("lang", "\nsecond").comment_first_line(), "");
    }

    #[test]
    fn original_follows_plural_form() {
        let e = entity("po", "");
        assert_eq!(e.original_for(-1), "Hello");
        assert_eq!(e.original_for(0), "Hello");
        assert_eq!(e.original_for(1), "Hellos");
        assert_eq!(e.original_for(5), "Hellos");
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let e: Entity =
            serde_json::from_str(r#"{"format":"po","original":"Save"}"#).unwrap();
        assert_eq!(e.comment, "");
        assert_eq!(e.original_plural, "");
        assert_eq!(e.original, "Save");
    }

    #[test]
    fn ignores_unrelated_entity_fields() {
        let e: Entity = serde_json::from_str(
            r#"{"pk":12,"format":"lang","comment":"MAX_LENGTH: 10","original":"Go","original_plural":"","path":"main.lang"}"#,
        )
        .unwrap();
        assert!(e.supports_countdown());
        assert_eq!(e.comment_first_line(), "MAX_LENGTH: 10");
    }
}

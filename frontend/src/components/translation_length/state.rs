//! Derived state of the translation length widget.
//!
//! The widget keeps no state between renders: `LengthDisplay::compute` turns
//! the current props into what should be shown, and `view` only draws it.

use common::model::entity::Entity;

use super::helpers::{get_limit, stripped_length, utf16_len};
use super::markup::ExtractText;

/// The `TranslationLength` component. All of its data lives in props.
pub struct TranslationLength;

/// What the widget shows for a given set of props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthDisplay {
    /// No entity selected.
    Hidden,
    /// Characters left before the `MAX_LENGTH` limit. `overflow` is set once
    /// the translation is longer than allowed.
    Countdown { remaining: i64, overflow: bool },
    /// Raw translation length next to the length of the matching original.
    Comparison { translation: usize, original: usize },
}

impl LengthDisplay {
    pub fn compute(
        entity: Option<&Entity>,
        plural_form: i32,
        translation: &str,
        extractor: &dyn ExtractText,
    ) -> Self {
        let Some(entity) = entity else {
            return LengthDisplay::Hidden;
        };

        match get_limit(Some(entity)) {
            Some(limit) => {
                // MAX_LENGTH is defined for strings without HTML tags.
                let length = stripped_length(extractor, translation) as i64;
                let remaining = limit.saturating_sub(length);
                LengthDisplay::Countdown {
                    remaining,
                    overflow: remaining < 0,
                }
            }
            None => LengthDisplay::Comparison {
                translation: utf16_len(translation),
                original: utf16_len(entity.original_for(plural_form)),
            },
        }
    }
}

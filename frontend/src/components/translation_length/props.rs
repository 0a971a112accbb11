//! Defines the properties for the `TranslationLength` widget.

use std::rc::Rc;

use common::model::entity::Entity;
use yew::prelude::*;

use super::markup::TextExtractor;

/// Properties for the `TranslationLength` widget.
///
/// Everything the widget shows is derived from these on each render.
#[derive(Properties, PartialEq, Clone)]
pub struct TranslationLengthProps {
    /// The entity being translated. Nothing is rendered while it is `None`.
    #[prop_or_default]
    pub entity: Option<Rc<Entity>>,

    /// Plural form being edited: `-1` for strings without plurals, `0` for the
    /// singular, higher indices for plural variants.
    pub plural_form: i32,

    /// Current content of the translation editor. May contain HTML.
    pub translation: AttrValue,

    /// Turns the translation into the visible text counted against
    /// `MAX_LENGTH`. Defaults to the embedded parser.
    #[prop_or_default]
    pub extractor: TextExtractor,
}

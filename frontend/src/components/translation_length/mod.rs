//! Translation length widget.
//!
//! Shows how long the translation is next to the original string or, for
//! `lang` strings whose comment declares `MAX_LENGTH: <n>`, how many
//! characters are left. The countdown counts visible text only, so markup is
//! stripped first.
//!
//! Submodules
//! - `props`: the widget's Yew properties.
//! - `state`: the component type and the `LengthDisplay` derived from props.
//! - `helpers`: limit parsing and length measurement.
//! - `markup`: the markup-to-text capability (`ExtractText`) and its parsers.
//! - `view`: rendering.
//! - `styles`: the widget stylesheet, mounted once by the host page.

use yew::prelude::*;

mod helpers;
mod markup;
mod props;
mod state;
mod styles;
mod view;

pub use markup::TextExtractor;
pub use props::TranslationLengthProps;
pub use state::TranslationLength;
pub use styles::TRANSLATION_LENGTH_CSS;

impl Component for TranslationLength {
    type Message = ();
    type Properties = TranslationLengthProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TranslationLength
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

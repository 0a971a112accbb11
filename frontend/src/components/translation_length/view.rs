//! View rendering for the translation length widget.
//!
//! Countdown mode:
//! `<div class="translation-length"><div class="countdown"><span class="overflow">-2</span></div></div>`
//!
//! Comparison mode (translation length, then original length):
//! `<div class="translation-length"><div class="translation-vs-original"><span>7</span>|<span>5</span></div></div>`
//!
//! The stylesheet in `styles` is mounted once by the host page.

use yew::prelude::*;

use super::state::{LengthDisplay, TranslationLength};

pub fn view(_component: &TranslationLength, ctx: &Context<TranslationLength>) -> Html {
    let props = ctx.props();
    let display = LengthDisplay::compute(
        props.entity.as_deref(),
        props.plural_form,
        &props.translation,
        &props.extractor,
    );

    let content = match display {
        LengthDisplay::Hidden => return html! {},
        LengthDisplay::Countdown {
            remaining,
            overflow,
        } => build_countdown(remaining, overflow),
        LengthDisplay::Comparison {
            translation,
            original,
        } => build_comparison(translation, original),
    };

    html! {
        <div class="translation-length">
            { content }
        </div>
    }
}

fn build_countdown(remaining: i64, overflow: bool) -> Html {
    html! {
        <div class="countdown">
            <span class={classes!(overflow.then_some("overflow"))}>
                { remaining }
            </span>
        </div>
    }
}

fn build_comparison(translation: usize, original: usize) -> Html {
    html! {
        <div class="translation-vs-original">
            <span>{ translation }</span>
            { "|" }
            <span>{ original }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::model::entity::Entity;
    use yew::ServerRenderer;

    use crate::components::translation_length::{TextExtractor, TranslationLengthProps};

    use super::*;

    fn entity(format: &str, comment: &str, original: &str, original_plural: &str) -> Entity {
        Entity {
            format: format.to_string(),
            comment: comment.to_string(),
            original: original.to_string(),
            original_plural: original_plural.to_string(),
        }
    }

    async fn render(entity: Option<Entity>, plural_form: i32, translation: &str) -> String {
        let translation = translation.to_string();
        ServerRenderer::<TranslationLength>::with_props(move || TranslationLengthProps {
            entity: entity.map(Rc::new),
            plural_form,
            translation: translation.into(),
            extractor: TextExtractor::default(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_nothing_without_entity() {
        assert_eq!(render(None, 0, "Bonjour").await, "");
        assert_eq!(render(None, 2, "<b>x</b>").await, "");
    }

    #[tokio::test]
    async fn renders_comparison_translation_first() {
        let html = render(Some(entity("po", "", "Hello", "Hellos")), 0, "Bonjour").await;
        assert!(html.starts_with("<div class=\"translation-length\">"), "{html}");
        assert!(
            html.contains("<div class=\"translation-vs-original\"><span>7</span>|<span>5</span></div>"),
            "{html}"
        );
        assert!(!html.contains("countdown"), "{html}");
    }

    #[tokio::test]
    async fn renders_comparison_with_plural_original() {
        let e = entity("po", "", "%d file", "%d files in total");
        let html = render(Some(e), 2, "%d fichiers").await;
        assert!(html.contains("<span>11</span>|<span>17</span>"), "{html}");
    }

    #[tokio::test]
    async fn renders_countdown_without_overflow() {
        let e = entity("lang", "MAX_LENGTH: 20 (x)", "Hello world", "");
        let html = render(Some(e), -1, "<b>Hello</b> world").await;
        assert!(
            html.starts_with("<div class=\"translation-length\"><div class=\"countdown\">"),
            "{html}"
        );
        assert!(html.contains(">9</span>"), "{html}");
        assert!(!html.contains("overflow"), "{html}");
        assert!(!html.contains("translation-vs-original"), "{html}");
    }

    #[tokio::test]
    async fn renders_countdown_overflow_flag() {
        let e = entity("lang", "MAX_LENGTH: 10", "Download", "");
        let html = render(Some(e), -1, "abcdefghijkl").await;
        assert!(
            html.contains("<div class=\"countdown\"><span class=\"overflow\">-2</span></div>"),
            "{html}"
        );
    }

    #[tokio::test]
    async fn renders_plain_numbers() {
        let e = entity("po", "", "x", "");
        let html = render(Some(e), 0, &"a".repeat(1234)).await;
        assert!(html.contains("<span>1234</span>|<span>1</span>"), "{html}");
    }
}

//! Host page for the translation length widget.
//!
//! Plays the part of the editor around the widget: it loads sample entities
//! from the bundled fixture, lets the user pick an entity and a plural form,
//! and feeds the textarea content to `TranslationLength`.

use std::rc::Rc;

use common::model::entity::Entity;
use serde::Deserialize;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::translation_length::{
    TextExtractor, TranslationLength, TRANSLATION_LENGTH_CSS,
};

const FIXTURE: &str = include_str!("fixtures/entities.json");

/// Plural forms offered by the selector, with their labels.
const PLURAL_FORMS: &[(i32, &str)] = &[
    (-1, "No plurals"),
    (0, "Singular"),
    (1, "Plural 1"),
    (2, "Plural 2"),
];

#[derive(Deserialize)]
struct Fixture {
    entities: Vec<Entity>,
}

/// Parses the entity list of a fixture document.
fn load_entities(json: &str) -> serde_json::Result<Vec<Rc<Entity>>> {
    let fixture: Fixture = serde_json::from_str(json)?;
    Ok(fixture.entities.into_iter().map(Rc::new).collect())
}

pub enum Msg {
    SelectEntity(Option<usize>),
    SetPluralForm(i32),
    UpdateText(String),
}

pub struct App {
    entities: Vec<Rc<Entity>>,
    selected: Option<usize>,
    plural_form: i32,
    translation: String,
    extractor: TextExtractor,
}

impl App {
    fn selected_entity(&self) -> Option<Rc<Entity>> {
        self.selected
            .and_then(|index| self.entities.get(index))
            .cloned()
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let entities = match load_entities(FIXTURE) {
            Ok(entities) => {
                gloo_console::info!(format!("Loaded {} sample entities", entities.len()));
                entities
            }
            Err(err) => {
                gloo_console::error!(format!("Could not read the entity fixture: {}", err));
                Vec::new()
            }
        };

        Self {
            selected: if entities.is_empty() { None } else { Some(0) },
            entities,
            plural_form: -1,
            translation: String::new(),
            extractor: TextExtractor::browser(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectEntity(selected) => {
                self.selected = selected.filter(|index| *index < self.entities.len());
                true
            }
            Msg::SetPluralForm(plural_form) => {
                self.plural_form = plural_form;
                true
            }
            Msg::UpdateText(text) => {
                if self.translation != text {
                    self.translation = text;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_entity = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SelectEntity(select.value().parse::<usize>().ok())
        });
        let on_plural_form = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetPluralForm(select.value().parse::<i32>().unwrap_or(-1))
        });
        let on_input = link.callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateText(textarea.value())
        });

        html! {
            <div class="translation-editor">
                <style>{ TRANSLATION_LENGTH_CSS }</style>
                <div class="editor-controls">
                    <select onchange={on_entity}>
                        <option value="" selected={self.selected.is_none()}>{ "(no entity)" }</option>
                        { for self.entities.iter().enumerate().map(|(index, entity)| html! {
                            <option value={index.to_string()} selected={self.selected == Some(index)}>
                                { format!("[{}] {}", entity.format, entity.original) }
                            </option>
                        }) }
                    </select>
                    <select onchange={on_plural_form}>
                        { for PLURAL_FORMS.iter().map(|(form, label)| html! {
                            <option value={form.to_string()} selected={self.plural_form == *form}>
                                { *label }
                            </option>
                        }) }
                    </select>
                </div>
                <textarea
                    value={self.translation.clone()}
                    oninput={on_input}
                    rows={4}
                    cols={60}
                />
                <TranslationLength
                    entity={self.selected_entity()}
                    plural_form={self.plural_form}
                    translation={self.translation.clone()}
                    extractor={self.extractor.clone()}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixture_loads() {
        let entities = load_entities(FIXTURE).unwrap();
        assert_eq!(entities.len(), 4);
        assert!(entities[0].supports_countdown());
        assert_eq!(entities[2].original_plural, "");
        assert_eq!(entities[3].comment, "");
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        assert!(load_entities("{\"entities\": [{\"format\": \"po\"}]}").is_err());
        assert!(load_entities("not json").is_err());
    }
}

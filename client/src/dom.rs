//! DOM handles and effect application.
//!
//! `Dom` resolves every element the page components address once at boot.
//! Missing elements stay `None`; effects aimed at them are dropped, which is
//! how an absent element disables its feature without touching the others.

use interactions::effect::{Effect, Target};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

pub const YEAR_ID: &str = "year";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_ID: &str = "main-nav";
pub const NAV_ANCHOR_SELECTOR: &str = ".main-nav a[href^='#']";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const HERO_ROLE_SELECTOR: &str = ".hero-role";
pub const FORM_ID: &str = "contact-form";
pub const FORM_NOTE_ID: &str = "form-note";
pub const SUBMIT_ID: &str = "form-submit";
pub const NAME_FIELD_ID: &str = "cf-name";
pub const EMAIL_FIELD_ID: &str = "cf-email";
pub const MESSAGE_FIELD_ID: &str = "cf-message";
pub const BACK_TO_TOP_ID: &str = "back-to-top";

/// Elements resolved at boot.
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub root: Option<Element>,
    pub year: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav: Option<Element>,
    /// In-page anchors inside the nav, in document order.
    pub nav_links: Vec<Element>,
    /// Every anchor inside the nav, in-page or not.
    pub nav_anchors: Vec<Element>,
    pub sections: Vec<HtmlElement>,
    pub hero_role: Option<Element>,
    pub reveals: Vec<Element>,
    pub form: Option<Element>,
    pub form_note: Option<Element>,
    pub submit_button: Option<Element>,
    pub back_to_top: Option<Element>,
}

impl Dom {
    /// Resolve all handles from `document`, using `reveal_query` for the
    /// reveal-eligible cards.
    #[must_use]
    pub fn resolve(window: Window, document: Document, reveal_query: &str) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        let theme_toggle = by_id(THEME_TOGGLE_ID);
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|toggle| toggle.query_selector(THEME_ICON_SELECTOR).ok().flatten());
        let nav = by_id(NAV_ID);
        let nav_anchors = nav.as_ref().map_or_else(Vec::new, |nav| query_all(nav, "a"));

        Self {
            root: document.body().map(Element::from),
            year: by_id(YEAR_ID),
            theme_toggle,
            theme_icon,
            hamburger: by_id(HAMBURGER_ID),
            nav,
            nav_links: query_all(&document, NAV_ANCHOR_SELECTOR),
            nav_anchors,
            sections: query_all(&document, SECTION_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
            hero_role: document.query_selector(HERO_ROLE_SELECTOR).ok().flatten(),
            reveals: if reveal_query.is_empty() { Vec::new() } else { query_all(&document, reveal_query) },
            form: by_id(FORM_ID),
            form_note: by_id(FORM_NOTE_ID),
            submit_button: by_id(SUBMIT_ID),
            back_to_top: by_id(BACK_TO_TOP_ID),
            window,
            document,
        }
    }

    /// The element behind `target`, if the page has it.
    #[must_use]
    pub fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::ThemeIcon => self.theme_icon.as_ref(),
            Target::Hamburger => self.hamburger.as_ref(),
            Target::Nav => self.nav.as_ref(),
            Target::NavLink(index) => self.nav_links.get(index),
            Target::HeroRole => self.hero_role.as_ref(),
            Target::Reveal(index) => self.reveals.get(index),
            Target::Form => self.form.as_ref(),
            Target::FormNote => self.form_note.as_ref(),
            Target::SubmitButton => self.submit_button.as_ref(),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::Year => self.year.as_ref(),
        }
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Raw value of an input or textarea, empty if the field is missing.
    #[must_use]
    pub fn field_value(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        String::new()
    }

    /// Apply an element-level effect. Window-level effects (scroll,
    /// navigation, storage, timers, observers) are handled by the page.
    pub fn apply(&self, effect: &Effect) {
        let Some(el) = effect.target().and_then(|target| self.element(target)) else {
            return;
        };
        match effect {
            Effect::SetText { text, .. } => el.set_text_content(Some(text.as_str())),
            Effect::AddClass { class, .. } => {
                let _ = el.class_list().add_1(class);
            }
            Effect::RemoveClass { class, .. } => {
                let _ = el.class_list().remove_1(class);
            }
            Effect::SetClassName { class, .. } => el.set_class_name(class),
            Effect::SetAttribute { name, value, .. } => {
                let _ = el.set_attribute(name, value);
            }
            Effect::SetDisabled { disabled, .. } => {
                let _ = el.toggle_attribute_with_force("disabled", *disabled);
            }
            Effect::ResetForm => {
                if let Some(form) = el.dyn_ref::<HtmlFormElement>() {
                    form.reset();
                }
            }
            Effect::Unobserve(_)
            | Effect::ScrollTo { .. }
            | Effect::Navigate(_)
            | Effect::Persist { .. }
            | Effect::Schedule { .. } => {}
        }
    }
}

fn query_all(parent: &web_sys::Node, selector: &str) -> Vec<Element> {
    let list = match parent.dyn_ref::<Document>() {
        Some(doc) => doc.query_selector_all(selector),
        None => match parent.dyn_ref::<Element>() {
            Some(el) => el.query_selector_all(selector),
            None => return Vec::new(),
        },
    };
    let Ok(list) = list else {
        log::warn!("invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

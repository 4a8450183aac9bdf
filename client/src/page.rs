//! Page runtime: component state plus the effect/timer loop.
//!
//! ARCHITECTURE
//! ============
//! `Page` owns one instance of every component's state. Handlers borrow a
//! component, collect its effects, release the borrow, then hand the effects
//! to [`Page::run`]. Scheduled effects come back through [`Page::fire`] on a
//! `gloo-timers` timeout, so no handler re-enters a component synchronously.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use interactions::back_to_top::BackToTop;
use interactions::config::SiteConfig;
use interactions::contact::ContactForm;
use interactions::effect::{Effect, Timer};
use interactions::nav_menu::NavMenu;
use interactions::reveal::RevealSet;
use interactions::scroll_spy::ScrollSpy;
use interactions::theme::ThemeToggle;
use interactions::typing::Typewriter;
use web_sys::{IntersectionObserver, ScrollBehavior, ScrollToOptions};

use crate::components;
use crate::dom::Dom;
use crate::util::{site_config, storage};

pub struct Page {
    pub dom: Dom,
    pub config: SiteConfig,
    pub theme: RefCell<ThemeToggle>,
    pub menu: RefCell<NavMenu>,
    pub spy: ScrollSpy,
    pub typing: RefCell<Typewriter>,
    pub reveal: RefCell<RevealSet>,
    pub observer: RefCell<Option<IntersectionObserver>>,
    pub contact: RefCell<ContactForm>,
    pub back_to_top: Cell<BackToTop>,
}

/// Resolve the DOM, build component state, and install every component.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = site_config::load();
    let dom = Dom::resolve(window, document, &config.reveal_query());

    let hrefs = dom
        .nav_links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let page = Rc::new(Page {
        theme: RefCell::new(ThemeToggle::new(
            storage::read(&config.theme_storage_key).as_deref(),
            config.theme_storage_key.clone(),
        )),
        menu: RefCell::new(NavMenu::new()),
        spy: ScrollSpy::new(hrefs),
        typing: RefCell::new(Typewriter::new(config.phrases.clone())),
        reveal: RefCell::new(RevealSet::new(dom.reveals.len())),
        observer: RefCell::new(None),
        contact: RefCell::new(ContactForm::new(config.recipient.clone(), config.placeholder_marker.clone())),
        back_to_top: Cell::new(BackToTop::new()),
        dom,
        config,
    });

    components::year::install(&page);
    components::theme_toggle::install(&page);
    components::nav_menu::install(&page);
    components::scroll_spy::install(&page);
    components::typing::install(&page);
    components::reveal::install(&page);
    components::contact_form::install(&page);
    components::back_to_top::install(&page);
    log::debug!("page interactions installed");
}

impl Page {
    /// Apply effects in order.
    pub fn run(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.dom.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::Navigate(url) => {
                if let Err(err) = self.dom.window.location().set_href(&url) {
                    log::warn!("navigation failed: {err:?}");
                }
            }
            Effect::Persist { key, value } => {
                if !storage::write(&key, &value) {
                    log::debug!("{key} kept for this page only");
                }
            }
            Effect::Unobserve(index) => {
                if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), self.dom.reveals.get(index)) {
                    observer.unobserve(el);
                }
            }
            Effect::Schedule { delay_ms, timer } => {
                let page = Rc::clone(self);
                Timeout::new(delay_ms, move || page.fire(timer)).forget();
            }
            other => self.dom.apply(&other),
        }
    }

    /// A scheduled timer elapsed.
    pub fn fire(self: &Rc<Self>, timer: Timer) {
        let effects = match timer {
            Timer::ClearPulse(link) => self.spy.pulse_expired(link),
            Timer::ClearNote => self.contact.borrow().note_expired(),
            Timer::TypeTick => self.typing.borrow_mut().tick(),
        };
        self.run(effects);
    }
}

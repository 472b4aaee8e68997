//! Mobile navigation toggle and in-page anchor scrolling.
//!
//! The toggle flips the `open` class on the nav list and on the toggle button,
//! each from its own current class; a link click clears it from both. Fragment links scroll smoothly to their target,
//! leaving room for the fixed header.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::NavConfig;
use crate::consts::OPEN_CLASS;
use crate::dom::{has_class, listen, query, query_all, set_class, smooth_scroll_to, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (link selected); returns the new state.
    pub fn close(&mut self) -> bool {
        self.open = false;
        self.open
    }
}

/// What a click does to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

/// `open` class state for one element after `action`, given whether it has the class now.
#[must_use]
pub fn next_open(class_present: bool, action: MenuAction) -> bool {
    let mut menu = NavMenu::new(class_present);
    match action {
        MenuAction::Toggle => menu.toggle(),
        MenuAction::Close => menu.close(),
    }
}

/// Selector for an in-page link target, or `None` when `href` should navigate normally.
///
/// Only `#id` fragments qualify; the bare `#` and external URLs do not.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Scroll offset that lands `target_top` just below the fixed header.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

fn apply(action: MenuAction, elements: &[Element]) -> Result<(), PageError> {
    for el in elements {
        set_class(el, OPEN_CLASS, next_open(has_class(el, OPEN_CLASS), action))?;
    }
    Ok(())
}

/// Wire the hamburger toggle and close-on-link-click.
///
/// # Errors
///
/// Returns `Dom` for invalid selectors or a rejected listener registration.
pub fn mount_toggle(document: &Document, config: &NavConfig) -> Result<Mount, PageError> {
    let (Some(toggle), Some(menu)) =
        (document.get_element_by_id(&config.toggle_id), document.get_element_by_id(&config.menu_id))
    else {
        return Ok(Mount::Inactive);
    };
    let Some(list) = query(&menu, &config.list_selector)? else {
        return Ok(Mount::Inactive);
    };

    let targets = [list, toggle.clone()];

    {
        let targets = targets.clone();
        listen(&toggle, "click", move |_| {
            warn_on_err("nav: toggling menu", apply(MenuAction::Toggle, &targets));
        })?;
    }

    for link in query_all(document, &config.link_selector)? {
        let targets = targets.clone();
        listen(&link, "click", move |_| {
            warn_on_err("nav: closing menu", apply(MenuAction::Close, &targets));
        })?;
    }
    Ok(Mount::Active)
}

/// Override fragment-link clicks with an offset smooth scroll.
///
/// # Errors
///
/// Returns `Dom` for an invalid link selector or a rejected listener registration.
pub fn mount_anchor_scroll(
    window: &Window,
    document: &Document,
    config: &NavConfig,
    header_offset: f64,
) -> Result<Mount, PageError> {
    let links = query_all(document, &config.link_selector)?;
    if links.is_empty() {
        return Ok(Mount::Inactive);
    }

    for link in links {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            let target = match query(&document, selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(err) => {
                    log::debug!("nav: `{href}` is not a usable target: {err}");
                    return;
                }
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            event.prevent_default();
            smooth_scroll_to(&window, anchor_scroll_top(f64::from(target.offset_top()), header_offset));
        })?;
    }
    Ok(Mount::Active)
}

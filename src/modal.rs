//! Certificate modal: opener and closer elements plus Escape-to-dismiss.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::config::ModalConfig;
use crate::consts::OPEN_CLASS;
use crate::dom::{has_class, listen, query_all, set_class, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

/// Open/closed state of the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Escape closes; every other key is ignored. Returns whether the state changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}

/// Class state after `change`, starting from whether the `open` class is
/// currently present. `None` means the class stays as it is.
#[must_use]
pub fn next_class(class_present: bool, change: impl FnOnce(&mut Modal) -> bool) -> Option<bool> {
    let mut modal = Modal::new(class_present);
    change(&mut modal).then_some(modal.is_open())
}

fn update(element: &Element, change: impl FnOnce(&mut Modal) -> bool) {
    if let Some(open) = next_class(has_class(element, OPEN_CLASS), change) {
        warn_on_err("modal: updating", set_class(element, OPEN_CLASS, open));
    }
}

/// Wire openers, closers, and the document-level Escape handler.
///
/// Each handler reads the modal's current class, so a class added by markup
/// or another script is closed like one added here.
///
/// # Errors
///
/// Returns `Dom` for invalid selectors or a rejected listener registration.
pub fn mount(document: &Document, config: &ModalConfig) -> Result<Mount, PageError> {
    let Some(element) = document.get_element_by_id(&config.modal_id) else {
        return Ok(Mount::Inactive);
    };
    for opener in query_all(document, &config.opener_selector)? {
        let element = element.clone();
        listen(&opener, "click", move |_| update(&element, Modal::open))?;
    }

    for closer in query_all(document, &config.closer_selector)? {
        let element = element.clone();
        listen(&closer, "click", move |_| update(&element, Modal::close))?;
    }

    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        update(&element, |modal| modal.on_key(&key));
    })?;
    Ok(Mount::Active)
}

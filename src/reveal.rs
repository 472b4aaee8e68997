//! Reveal-on-scroll: elements flagged `data-animate` gain the `animated`
//! class the first time they enter the viewport.
//!
//! Browsers without `IntersectionObserver` get every flagged element
//! animated at load instead.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::RevealConfig;
use crate::consts::ANIMATED_CLASS;
use crate::dom::{has_class, query_all, set_class, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Watch each element and animate it on first intersection.
    Observe { threshold: f64 },
    /// No observer support; animate everything now.
    Immediate,
}

impl RevealMode {
    #[must_use]
    pub fn detect(has_observer: bool, threshold: f64) -> Self {
        if has_observer { Self::Observe { threshold } } else { Self::Immediate }
    }
}

/// What to do with one observer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAction {
    pub mark_animated: bool,
    pub unobserve: bool,
}

/// Reveal is one-shot: an intersecting element is animated once and then
/// never watched again. Entries reporting "not intersecting" are ignored.
#[must_use]
pub fn entry_action(is_intersecting: bool, already_animated: bool) -> EntryAction {
    EntryAction { mark_animated: is_intersecting && !already_animated, unobserve: is_intersecting }
}

fn observe(elements: &[Element], threshold: f64) -> Result<(), PageError> {
    let callback = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let action = entry_action(entry.is_intersecting(), has_class(&target, ANIMATED_CLASS));
            if action.mark_animated {
                warn_on_err("reveal: animating", set_class(&target, ANIMATED_CLASS, true));
            }
            if action.unobserve {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

/// Watch every flagged element, or animate them all when observation is unsupported.
///
/// # Errors
///
/// Returns `Dom` for an invalid selector or when the observer cannot be created.
pub fn mount(window: &Window, document: &Document, config: &RevealConfig) -> Result<Mount, PageError> {
    let elements = query_all(document, &config.selector)?;
    if elements.is_empty() {
        return Ok(Mount::Inactive);
    }

    let has_observer = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))?;
    match RevealMode::detect(has_observer, config.threshold) {
        RevealMode::Observe { threshold } => observe(&elements, threshold)?,
        RevealMode::Immediate => {
            log::debug!("reveal: no IntersectionObserver, animating {} elements now", elements.len());
            for el in &elements {
                set_class(el, ANIMATED_CLASS, true)?;
            }
        }
    }
    Ok(Mount::Active)
}

//! Thin web-sys helpers shared by the feature bindings.
//!
//! Every listener registered here lives for the lifetime of the page, so the
//! backing closures are handed to the JS side and never dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::PageError;

/// Anything that can resolve CSS selectors: the document or an element subtree.
pub trait Scope {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// The global window and its document.
///
/// # Errors
///
/// Fails outside a browser main thread.
pub fn window_and_document() -> Result<(Window, Document), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    Ok((window, document))
}

/// First element matching `selector` inside `scope`.
///
/// # Errors
///
/// Returns `Dom` when the selector is not valid CSS.
pub fn query(scope: &impl Scope, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(scope.select(selector)?)
}

/// All elements matching `selector` inside `scope`, in document order.
///
/// # Errors
///
/// Returns `Dom` when the selector is not valid CSS.
pub fn query_all(scope: &impl Scope, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = scope.select_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// Attach `handler` to `event` on `target` for the rest of the page's life.
///
/// # Errors
///
/// Returns `Dom` if the browser rejects the registration.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class` on `el` depending on `on`.
///
/// # Errors
///
/// Returns `Dom` for class names the token list rejects (e.g. containing spaces).
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), PageError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

#[must_use]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Current vertical scroll offset of the window.
///
/// # Errors
///
/// Returns `Dom` if the browser refuses the read.
pub fn scroll_y(window: &Window) -> Result<f64, PageError> {
    Ok(window.scroll_y()?)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Log a failed handler step; handlers never surface errors to the user.
pub fn warn_on_err(context: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

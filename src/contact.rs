//! Placeholder contact form: acknowledge locally, never submit.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, Window};

use crate::config::ContactConfig;
use crate::dom::{listen, query};
use crate::error::PageError;
use crate::feature::Mount;

/// Intercept submissions of the contact form.
///
/// The form has no backend: every submission is suppressed, acknowledged with
/// the configured notice, and cleared.
///
/// # Errors
///
/// Returns `Dom` for an invalid selector or a rejected listener registration.
pub fn mount(window: &Window, document: &Document, config: &ContactConfig) -> Result<Mount, PageError> {
    let Some(form) = query(document, &config.form_selector)? else {
        return Ok(Mount::Inactive);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        log::warn!("contact: `{}` is not a form", config.form_selector);
        return Ok(Mount::Inactive);
    };

    let window = window.clone();
    let target = form.clone();
    let notice = config.notice.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(err) = window.alert_with_message(&notice) {
            log::warn!("contact: alert failed: {}", PageError::from(err));
        }
        target.reset();
    })?;
    Ok(Mount::Active)
}

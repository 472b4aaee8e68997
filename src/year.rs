//! Footer copyright year, stamped once at load.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use web_sys::Document;

use crate::config::FooterConfig;
use crate::error::PageError;
use crate::feature::Mount;

#[must_use]
pub fn year_text(year: u32) -> String {
    year.to_string()
}

/// Write the current local calendar year into the footer element.
///
/// # Errors
///
/// Never fails today; the signature matches the other feature mounts.
pub fn mount(document: &Document, config: &FooterConfig) -> Result<Mount, PageError> {
    let Some(element) = document.get_element_by_id(&config.year_id) else {
        return Ok(Mount::Inactive);
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year_text(year)));
    Ok(Mount::Active)
}

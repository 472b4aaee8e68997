//! Page controller: resolve configuration and mount every feature once.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs a single time after the markup is parsed. Features are mounted in a
//! fixed order but do not depend on each other; the report records what each
//! one found on this particular page.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::feature::MountReport;
use crate::{carousel, contact, modal, nav, reveal, scroll, theme, year};

/// Resolve the effective configuration from an optional inline JSON override.
///
/// Absent or blank overrides give the defaults. A broken override is logged
/// and ignored so the page still gets its interactivity.
#[must_use]
pub fn resolve_config(inline: Option<&str>) -> PageConfig {
    match inline.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => PageConfig::default(),
        Some(raw) => match PageConfig::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err}");
                PageConfig::default()
            }
        },
    }
}

/// Configuration embedded in the page, if any.
#[must_use]
pub fn inline_config(document: &Document) -> PageConfig {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    resolve_config(inline.as_deref())
}

/// Display name of the `index`-th carousel in the mount report.
#[must_use]
pub fn carousel_name(index: usize) -> String {
    format!("carousel[{index}]")
}

/// Mount every feature against `document`.
///
/// Per-feature problems are recorded in the report; nothing here aborts the
/// remaining features.
pub fn mount_page(window: &Window, document: &Document, config: &PageConfig) -> MountReport {
    let mut report = MountReport::new();

    report.record("theme", theme::mount(window, document, &config.theme));
    report.record("nav-toggle", nav::mount_toggle(document, &config.nav));
    report.record(
        "anchor-scroll",
        nav::mount_anchor_scroll(window, document, &config.nav, config.scroll.header_offset),
    );
    report.record("section-highlight", scroll::mount_highlighter(window, document, &config.scroll, &config.nav));
    report.record("scroll-top", scroll::mount_scroll_top(window, document, &config.scroll));
    report.record("reveal", reveal::mount(window, document, &config.reveal));
    report.record("year", year::mount(document, &config.footer));
    report.record("contact", contact::mount(window, document, &config.contact));
    for (i, selectors) in config.carousels.0.iter().enumerate() {
        report.record(carousel_name(i), carousel::mount(document, selectors));
    }
    report.record("modal", modal::mount(document, &config.modal));

    for failed in report.failed() {
        log::warn!("{}: {:?}", failed.name, failed.state);
    }
    log::info!("folio mounted: {}", report.summary());
    report
}

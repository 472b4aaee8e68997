//! Scroll-driven behavior: active nav-link highlighting and the
//! scroll-to-top control.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::{NavConfig, ScrollConfig};
use crate::consts::{ACTIVE_CLASS, VISIBLE_CLASS};
use crate::dom::{listen, query_all, scroll_y, set_class, smooth_scroll_to, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

/// Layout of a tracked section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `scroll_y` falls in `[top - margin, top - margin + height]`.
    #[must_use]
    pub fn contains(&self, scroll_y: f64, margin: f64) -> bool {
        let start = self.top - margin;
        scroll_y >= start && scroll_y <= start + self.height
    }
}

/// Index of the section whose nav link should be active at `scroll_y`.
///
/// Sections are checked in document order and a later match replaces an
/// earlier one, so overlapping ranges resolve to the last section. `None`
/// means no section matched and existing marks stay as they are.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], margin: f64) -> Option<usize> {
    sections.iter().rposition(|bounds| bounds.contains(scroll_y, margin))
}

/// First link whose href points at `#section_id`.
#[must_use]
pub fn link_for_section(hrefs: &[Option<String>], section_id: &str) -> Option<usize> {
    hrefs.iter().position(|href| {
        href.as_deref()
            .and_then(|h| h.strip_prefix('#'))
            .is_some_and(|id| id == section_id)
    })
}

/// Whether a nav link points inside the page and so takes part in highlighting.
#[must_use]
pub fn is_fragment_href(href: Option<&str>) -> bool {
    href.is_some_and(|h| h.starts_with('#'))
}

/// `active` marks for every link at `scroll_y`, or `None` to leave them as they are.
///
/// `ids` and `bounds` describe the tracked sections in document order; `hrefs`
/// are the fragment links. Every link is cleared except the first one that
/// points at the active section.
#[must_use]
pub fn link_marks(
    scroll_y: f64,
    bounds: &[SectionBounds],
    ids: &[String],
    hrefs: &[Option<String>],
    margin: f64,
) -> Option<Vec<bool>> {
    let current = active_section(scroll_y, bounds, margin)?;
    let target = ids.get(current).and_then(|id| link_for_section(hrefs, id));
    Some((0..hrefs.len()).map(|i| Some(i) == target).collect())
}

/// Scroll-to-top visibility; the threshold itself still hides the control.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn section_bounds(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|s| SectionBounds::new(f64::from(s.offset_top()), f64::from(s.offset_height())))
        .collect()
}

fn highlight(window: &Window, sections: &[HtmlElement], links: &[Element], margin: f64) -> Result<(), PageError> {
    let y = scroll_y(window)?;
    let ids = sections.iter().map(|s| s.id()).collect::<Vec<_>>();
    let hrefs = links.iter().map(|l| l.get_attribute("href")).collect::<Vec<_>>();
    let Some(marks) = link_marks(y, &section_bounds(sections), &ids, &hrefs, margin) else {
        return Ok(());
    };
    for (link, active) in links.iter().zip(marks) {
        set_class(link, ACTIVE_CLASS, active)?;
    }
    Ok(())
}

/// Track `section[id]` elements and mark the matching nav link on scroll.
///
/// # Errors
///
/// Returns `Dom` for invalid selectors or a rejected listener registration.
pub fn mount_highlighter(
    window: &Window,
    document: &Document,
    config: &ScrollConfig,
    nav: &NavConfig,
) -> Result<Mount, PageError> {
    let mut sections = Vec::new();
    for el in query_all(document, &config.section_selector)? {
        if let Ok(section) = el.dyn_into::<HtmlElement>()
            && !section.id().is_empty()
        {
            sections.push(section);
        }
    }
    if sections.is_empty() {
        return Ok(Mount::Inactive);
    }
    let links = query_all(document, &nav.link_selector)?
        .into_iter()
        .filter(|link| is_fragment_href(link.get_attribute("href").as_deref()))
        .collect::<Vec<_>>();

    let margin = config.section_margin;
    let win = window.clone();
    listen(window, "scroll", move |_| {
        warn_on_err("scroll: highlighting nav", highlight(&win, &sections, &links, margin));
    })?;
    Ok(Mount::Active)
}

/// Show the scroll-to-top control past the threshold; scroll home on click.
///
/// # Errors
///
/// Returns `Dom` if a listener registration is rejected.
pub fn mount_scroll_top(window: &Window, document: &Document, config: &ScrollConfig) -> Result<Mount, PageError> {
    let Some(button) = document.get_element_by_id(&config.scroll_top_id) else {
        return Ok(Mount::Inactive);
    };

    let threshold = config.scroll_top_threshold;
    {
        let win = window.clone();
        let button = button.clone();
        listen(window, "scroll", move |_| {
            let result = scroll_y(&win).and_then(|y| set_class(&button, VISIBLE_CLASS, scroll_top_visible(y, threshold)));
            warn_on_err("scroll: scroll-top visibility", result);
        })?;
    }

    let win = window.clone();
    listen(&button, "click", move |_| smooth_scroll_to(&win, 0.0))?;
    Ok(Mount::Active)
}

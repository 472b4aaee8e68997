//! Image carousels: a ring index over a fixed slide list, with prev/next
//! buttons.
//!
//! DESIGN
//! ======
//! [`mount`] is a factory. Every call builds an independent instance with
//! its own index; the page controller calls it once per selector family.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::CarouselSelectors;
use crate::consts::SLIDE_ACTIVE_CLASS;
use crate::dom::{Scope, has_class, listen, query, query_all, set_class, warn_on_err};
use crate::error::PageError;
use crate::feature::Mount;

/// Ring index over `len` slides. `len` is never zero and `index < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides starting at `initial`, or at 0 when
    /// `initial` is absent or out of range. `None` for an empty slide list.
    #[must_use]
    pub fn new(len: usize, initial: Option<usize>) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let index = initial.filter(|i| *i < len).unwrap_or(0);
        Some(Self { index, len })
    }

    /// Start at the first slide already flagged active.
    #[must_use]
    pub fn from_active_flags(flags: &[bool]) -> Option<Self> {
        Self::new(flags.len(), flags.iter().position(|active| *active))
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_active(self, slide: usize) -> bool {
        slide == self.index
    }

    /// Move by `offset` slides, wrapping at both ends; returns the new index.
    pub fn step(&mut self, offset: isize) -> usize {
        let shift = offset.unsigned_abs() % self.len;
        self.index = if offset >= 0 {
            (self.index + shift) % self.len
        } else {
            (self.index + self.len - shift) % self.len
        };
        self.index
    }

    pub fn forward(&mut self) -> usize {
        self.step(1)
    }

    pub fn back(&mut self) -> usize {
        self.step(-1)
    }
}

fn show(slides: &[Element], carousel: Carousel) -> Result<(), PageError> {
    for (i, slide) in slides.iter().enumerate() {
        set_class(slide, SLIDE_ACTIVE_CLASS, carousel.is_active(i))?;
    }
    Ok(())
}

fn optional(scope: &impl Scope, selector: &str) -> Result<Option<Element>, PageError> {
    if selector.trim().is_empty() {
        return Ok(None);
    }
    query(scope, selector)
}

/// Build one carousel instance from its selector family.
///
/// A missing root or an empty slide list leaves the carousel inactive. A
/// missing prev or next button only leaves that direction unwired.
///
/// # Errors
///
/// Returns `Dom` for invalid selectors or a rejected listener registration.
pub fn mount(document: &Document, selectors: &CarouselSelectors) -> Result<Mount, PageError> {
    let Some(root) = query(document, &selectors.root)? else {
        return Ok(Mount::Inactive);
    };
    let slides = query_all(&root, &selectors.slide)?;
    let flags = slides.iter().map(|s| has_class(s, SLIDE_ACTIVE_CLASS)).collect::<Vec<_>>();
    let Some(carousel) = Carousel::from_active_flags(&flags) else {
        return Ok(Mount::Inactive);
    };

    let state = Rc::new(Cell::new(carousel));
    let slides = Rc::new(slides);
    let buttons = [(optional(&root, &selectors.prev)?, -1), (optional(&root, &selectors.next)?, 1)];
    for (button, offset) in buttons {
        let Some(button) = button else {
            continue;
        };
        let state = Rc::clone(&state);
        let slides = Rc::clone(&slides);
        listen(&button, "click", move |_| {
            let mut carousel = state.get();
            carousel.step(offset);
            state.set(carousel);
            warn_on_err("carousel: showing slide", show(&slides, carousel));
        })?;
    }
    log::debug!("carousel {}: {} slides, starting at {}", selectors.root, carousel.slide_count(), carousel.index());
    Ok(Mount::Active)
}

//! Interaction layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page once its
//! markup is parsed. It wires independent DOM behaviors (theme toggle,
//! mobile nav, scroll spy, reveal animations, carousels, a modal) and keeps
//! each feature's decision logic in plain Rust so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Resolves config and mounts every feature |
//! | [`config`] | Selectors and layout constants, overridable from inline JSON |
//! | [`feature`] | Per-feature mount outcomes and the startup report |
//! | [`theme`] | Light/dark toggle and its persisted preference |
//! | [`nav`] | Mobile menu toggle and anchor smooth-scroll |
//! | [`scroll`] | Active-section highlighting and the scroll-to-top control |
//! | [`reveal`] | One-shot reveal-on-intersection animation |
//! | [`carousel`] | Ring-index carousel factory |
//! | [`modal`] | Certificate modal open/close/Escape |
//! | [`contact`] | Placeholder contact form interceptor |
//! | [`year`] | Footer year stamp |
//! | [`dom`] | Shared web-sys helpers |
//! | [`error`] | Config and DOM error types |
//! | [`consts`] | Class names, keys, and layout constants |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod controller;
pub mod dom;
pub mod error;
pub mod feature;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod year;

use wasm_bindgen::prelude::*;

fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("folio: logger already set: {err}")));
    }
}

/// Entry point run when the wasm module is instantiated.
///
/// # Errors
///
/// Returns a JS error when there is no window or document to mount on.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    let (window, document) = dom::window_and_document().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let config = controller::inline_config(&document);
    controller::mount_page(&window, &document, &config);
    Ok(())
}

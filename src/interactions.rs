use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use log::debug;

use crate::config;

/// Id an in-page link points at, if any. `"#"` alone points nowhere.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: Option<f64>) -> f64 {
    let offset = header_height.unwrap_or(config::DEFAULT_HEADER_HEIGHT_PX) + config::ANCHOR_EXTRA_OFFSET_PX;
    target_top + scroll_y - offset
}

// Stand-in until analytics is wired up.
pub fn track_cta(cta: &str) {
    debug!("[Konnex] CTA click: {}", cta);
}

fn header_height(document: &web_sys::Document) -> Option<f64> {
    document
        .get_element_by_id("header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
}

/// Returns true when the click was an in-page jump we handled.
fn smooth_scroll(anchor: &Element) -> bool {
    let Some(href) = anchor.get_attribute("href") else {
        return false;
    };
    let Some(id) = anchor_target_id(&href) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };

    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        header_height(&document),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Page-wide click delegation: CTA tracking and smooth in-page anchors.
#[hook]
pub fn use_page_interactions() {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(origin) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Ok(Some(cta)) = origin.closest("[data-cta]") {
            if let Some(name) = cta.get_attribute("data-cta") {
                track_cta(&name);
            }
        }

        if let Ok(Some(anchor)) = origin.closest("a[href^=\"#\"]") {
            if smooth_scroll(&anchor) {
                e.prevent_default();
            }
        }
    });
}

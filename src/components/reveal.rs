use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use log::debug;

use crate::config;
use crate::viewport::{is_in_view, prefers_reduced_motion, query_all, ViewportObserver};

pub const REVEAL_SELECTORS: &[&str] = &[
    ".integration-item",
    ".problem-content",
    ".problem-visual",
    ".bento-card",
    ".case-card",
    ".pricing-card",
    ".faq-item",
    ".cta-final-box",
    ".section-header",
];

pub fn stagger_delay_ms(index: usize) -> u32 {
    (index % config::REVEAL_STAGGER_CYCLE) as u32 * config::REVEAL_STAGGER_MS
}

fn reveal(el: &Element) {
    let _ = el.class_list().add_1("reveal-in");
}

/// Fades in sections as they scroll into view.
///
/// Only elements that start below the fold are hidden; anything visible on
/// load stays as it is. A fallback timer reveals the rest in case the
/// observer never fires.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let mut armed = None;
            if !prefers_reduced_motion() {
                armed = arm();
            }
            move || drop(armed)
        },
        (),
    );
}

fn arm() -> Option<(ViewportObserver, Timeout)> {
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;

    let mut pending = Vec::new();
    for (i, el) in query_all(&REVEAL_SELECTORS.join(",")).into_iter().enumerate() {
        let rect = el.get_bounding_client_rect();
        if is_in_view(rect.top(), rect.bottom(), viewport_height) {
            continue;
        }
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("transition-delay", &format!("{}ms", stagger_delay_ms(i)));
        }
        let _ = el.class_list().add_1("reveal-ready");
        pending.push(el);
    }
    if pending.is_empty() {
        return None;
    }
    debug!("Scroll reveal armed for {} elements", pending.len());

    let observer = ViewportObserver::new(0.01, Some("0px 0px 60px 0px"), |entries, observer| {
        for entry in entries.into_iter().filter(|e| e.is_intersecting()) {
            let target = entry.target();
            reveal(&target);
            observer.unobserve(&target);
        }
    })?;
    for el in &pending {
        observer.observe(el);
    }

    let fallback = Timeout::new(config::REVEAL_FALLBACK_MS, move || {
        for el in &pending {
            if !el.class_list().contains("reveal-in") {
                reveal(el);
            }
        }
    });
    Some((observer, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_cycles_every_five() {
        let delays: Vec<u32> = (0..7).map(stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, 70, 140, 210, 280, 0, 70]);
    }
}

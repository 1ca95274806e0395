use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Window};

use crate::config;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLLED_THRESHOLD_PX
}

/// The new header flag for this frame, or `None` when it is unchanged.
pub fn scrolled_update(current: bool, scroll_y: f64) -> Option<bool> {
    let next = header_scrolled(scroll_y);
    (next != current).then_some(next)
}

pub fn menu_toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

/// Scroll listener that updates the header at most once per frame.
struct HeaderScrollWatch {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl HeaderScrollWatch {
    fn attach(is_scrolled: UseStateHandle<bool>) -> Option<Self> {
        let window = web_sys::window()?;
        let ticking = Rc::new(Cell::new(false));
        let applied = Cell::new(*is_scrolled);

        let on_frame = {
            let window = window.clone();
            let ticking = ticking.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                if let Some(next) = scrolled_update(applied.get(), window.scroll_y().unwrap_or(0.0)) {
                    applied.set(next);
                    is_scrolled.set(next);
                }
                ticking.set(false);
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let on_frame = on_frame.clone();
            Closure::wrap(Box::new(move || {
                if ticking.get() {
                    return;
                }
                if window.request_animation_frame((*on_frame).as_ref().unchecked_ref()).is_ok() {
                    ticking.set(true);
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { window, on_scroll, _on_frame: on_frame })
    }
}

impl Drop for HeaderScrollWatch {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
    }
}

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub href: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let watch = HeaderScrollWatch::attach(is_scrolled);
                move || drop(watch)
            },
            (),
        );
    }

    use_effect_with_deps(
        |open| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        },
        *menu_open,
    );

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open = *menu_open;

    html! {
        <header id="header" class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"Konnex"}</a>
                <nav class="nav-desktop">
                    { for props.links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="nav-link">{&link.label}</a>
                    }) }
                    <a href="#contact" class="nav-cta" data-cta="nav">{"Free assessment"}</a>
                </nav>
                <button
                    id="mobileToggle"
                    class="burger-menu"
                    aria-controls="mobileMenu"
                    aria-expanded={open.to_string()}
                    aria-label={menu_toggle_label(open)}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div
                id="mobileMenu"
                class={classes!("mobile-menu", open.then(|| "mobile-menu-open"))}
                aria-hidden={(!open).to_string()}
                style={open.then(|| "display: flex;")}
            >
                { for props.links.iter().map(|link| html! {
                    <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>{&link.label}</a>
                }) }
                <a href="#contact" class="nav-cta" data-cta="nav-mobile" onclick={close_menu.clone()}>
                    {"Free assessment"}
                </a>
            </div>
        </header>
    }
}

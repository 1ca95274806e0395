use std::collections::HashSet;

use yew::prelude::*;

use crate::viewport::{query_all, ViewportObserver};

const WATCHED: &str = "#pricing, .footer";

/// Which watched sections are currently on screen.
#[derive(Debug, Default)]
pub struct VisibleSections {
    visible: HashSet<String>,
}

impl VisibleSections {
    /// Records one observer entry and says whether the bar should hide.
    pub fn update(&mut self, key: &str, intersecting: bool) -> bool {
        if intersecting {
            self.visible.insert(key.to_string());
        } else {
            self.visible.remove(key);
        }
        !self.visible.is_empty()
    }
}

fn section_key(el: &web_sys::Element) -> String {
    let id = el.id();
    if id.is_empty() {
        el.class_name()
    } else {
        id
    }
}

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    pub href: AttrValue,
    pub label: AttrValue,
}

/// Mobile bottom bar, hidden while pricing or the footer is on screen.
#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let targets = query_all(WATCHED);
                let mut sections = VisibleSections::default();
                let observer = if targets.is_empty() {
                    None
                } else {
                    ViewportObserver::new(0.1, None, move |entries, _| {
                        let mut any_visible = false;
                        for entry in entries {
                            any_visible = sections.update(&section_key(&entry.target()), entry.is_intersecting());
                        }
                        hidden.set(any_visible);
                    })
                };
                if let Some(observer) = &observer {
                    for target in &targets {
                        observer.observe(target);
                    }
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div class="mobile-sticky" style={(*hidden).then(|| "display: none;")}>
            <a href={props.href.clone()} class="mobile-sticky-cta" data-cta="mobile-sticky">{&props.label}</a>
        </div>
    }
}

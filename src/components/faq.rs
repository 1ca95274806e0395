use yew::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

/// Accordion rule: at most one answer open, clicking the open one closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Classes of the inner panel. The outer `.faq-item` wrapper keeps a fixed
/// class so the reveal classes added to it outside Yew survive re-renders.
pub fn entry_classes(open: bool) -> Classes {
    classes!("faq-entry", open.then(|| "open"))
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let FaqItemProps { index, entry, open, on_toggle } = props;
    let index = *index;
    let trigger_id = format!("faq-trigger-{}", index);
    let answer_id = format!("faq-answer-{}", index);

    let onclick = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    let onkeydown = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(index);
            }
        })
    };

    html! {
        <div class="faq-item">
          <div class={entry_classes(*open)}>
            <button
                id={trigger_id.clone()}
                class="faq-trigger"
                aria-expanded={open.to_string()}
                aria-controls={answer_id.clone()}
                onclick={onclick}
                onkeydown={onkeydown}
            >
                <span class="question-text">{&entry.question}</span>
                <span class="toggle-icon">{if *open { "−" } else { "+" }}</span>
            </button>
            <div id={answer_id} class="faq-answer" role="region" aria-labelledby={trigger_id} hidden={!*open}>
                <p>{&entry.answer}</p>
            </div>
          </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |clicked: usize| {
            open.set(toggle_open(*open, clicked));
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-header">{"Frequently asked questions"}</h2>
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <FaqItem
                    index={index}
                    entry={entry.clone()}
                    open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reveal::REVEAL_SELECTORS;

    #[test]
    fn opening_one_closes_the_other() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }

    #[test]
    fn open_state_stays_off_the_revealed_wrapper() {
        assert!(REVEAL_SELECTORS.contains(&".faq-item"));
        for open in [false, true] {
            assert!(!entry_classes(open).contains("faq-item"));
        }
        assert_eq!(entry_classes(true).to_string(), "faq-entry open");
        assert_eq!(entry_classes(false).to_string(), "faq-entry");
    }
}

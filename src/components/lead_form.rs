use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use crate::config;
use crate::lead::record::LeadRecord;
use crate::lead::submission::{FormSubmissionState, SubmissionCoordinator, SubmissionError};
use crate::lead::validate::PhoneField;
use crate::lead::webhook::send_lead;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    #[prop_or_else(|| AttrValue::from(config::get_lead_webhook_url()))]
    pub endpoint: AttrValue,
    #[prop_or(config::CHAT_REDIRECT.map(AttrValue::from))]
    pub chat_redirect: Option<AttrValue>,
}

pub enum LeadFormMsg {
    SetName(String),
    PhoneInput(String),
    PhoneBlur,
    Submit,
    Resolved(Result<(), SubmissionError>),
    Revert(u32),
}

pub struct LeadForm {
    name: String,
    phone: PhoneField,
    coordinator: SubmissionCoordinator,
    last_lead: Option<LeadRecord>,
    phone_ref: NodeRef,
}

impl LeadForm {
    // The mask can leave the text unchanged (a rejected letter, say), in which
    // case the rendered value does not diff and the DOM keeps the raw keystroke.
    fn write_back_phone(&self) {
        if let Some(input) = self.phone_ref.cast::<HtmlInputElement>() {
            if input.value() != self.phone.display() {
                input.set_value(self.phone.display());
            }
        }
    }

    fn focus_phone(&self) {
        if let Some(input) = self.phone_ref.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }

    fn open_chat(&self, ctx: &Context<Self>) {
        let (Some(number), Some(lead)) = (ctx.props().chat_redirect.as_ref(), self.last_lead.as_ref()) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(&lead.chat_link(number), "_blank", "noopener");
        }
    }
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            phone: PhoneField::default(),
            coordinator: SubmissionCoordinator::default(),
            last_lead: None,
            phone_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetName(name) => {
                self.name = name;
                false
            }
            LeadFormMsg::PhoneInput(raw) => {
                self.phone.input(&raw);
                self.write_back_phone();
                true
            }
            LeadFormMsg::PhoneBlur => {
                self.phone.blur();
                true
            }
            LeadFormMsg::Submit => match self.coordinator.submit(&self.name, &mut self.phone) {
                Ok(lead) => {
                    info!("Submitting lead for {}", lead.phone_formatted);
                    self.last_lead = Some(lead.clone());
                    let endpoint = ctx.props().endpoint.clone();
                    ctx.link().send_future(async move {
                        LeadFormMsg::Resolved(send_lead(&endpoint, &lead).await)
                    });
                    true
                }
                Err(e) if e.focuses_phone() => {
                    debug!("Lead form blocked: {}", e);
                    self.focus_phone();
                    true
                }
                Err(e) => {
                    debug!("Ignoring submit: {}", e);
                    false
                }
            },
            LeadFormMsg::Resolved(outcome) => {
                if let Some(revert) = self.coordinator.resolve(outcome) {
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(revert.delay_ms).await;
                        LeadFormMsg::Revert(revert.attempt)
                    });
                } else if self.coordinator.state() == FormSubmissionState::Succeeded {
                    self.open_chat(ctx);
                }
                true
            }
            LeadFormMsg::Revert(attempt) => {
                self.coordinator.revert(attempt);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });
        let button = self.coordinator.button();
        let error = self.phone.error();

        html! {
            <form id="lead-form" class="lead-form" onsubmit={onsubmit} novalidate={true}>
                <style>
                {r#".lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    width: 100%;
                    max-width: 420px;
                }
                .lead-form input {
                    padding: 0.9rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.04);
                    color: #fff;
                    font-size: 1rem;
                    transition: border-color 0.2s ease;
                }
                .field-error {
                    color: #ff5a5f;
                    font-size: 0.85rem;
                }
                .btn-submit {
                    padding: 1rem;
                    border: none;
                    border-radius: 10px;
                    background: linear-gradient(45deg, #25d366, #1ea952);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: opacity 0.2s ease, background 0.2s ease;
                }
                .btn-submit.is-loading {
                    opacity: 0.6;
                    pointer-events: none;
                }
                .btn-submit.is-success {
                    background: #1e7d45;
                    cursor: default;
                }
                .btn-submit.is-error {
                    background: #c0392b;
                }"#}
                </style>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your name"
                    autocomplete="name"
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        LeadFormMsg::SetName(input.value())
                    })}
                />
                <input
                    id="contact-whatsapp"
                    ref={self.phone_ref.clone()}
                    type="tel"
                    inputmode="numeric"
                    placeholder="(11) 99999-9999"
                    autocomplete="tel-national"
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby="phone-error"
                    style={format!("border-color: {};", self.phone.border_color())}
                    value={self.phone.display().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        LeadFormMsg::PhoneInput(input.value())
                    })}
                    onblur={link.callback(|_: FocusEvent| LeadFormMsg::PhoneBlur)}
                />
                <span id="phone-error" class="field-error" role="alert" hidden={error.is_none()}>
                    { error.map(|e| e.to_string()).unwrap_or_default() }
                </span>
                <button
                    type="submit"
                    class={button.class}
                    disabled={button.disabled}
                    aria-busy={(self.coordinator.state() == FormSubmissionState::Submitting).to_string()}
                    data-cta="lead-form"
                >
                    { button.label }
                </button>
            </form>
        }
    }
}

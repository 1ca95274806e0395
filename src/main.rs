use yew::prelude::*;
use log::{info, Level};

mod config;
mod interactions;
mod viewport;
mod lead {
    pub mod mask;
    pub mod validate;
    pub mod record;
    pub mod submission;
    pub mod webhook;
}
mod components {
    pub mod carousel;
    pub mod faq;
    pub mod hero;
    pub mod lead_form;
    pub mod nav;
    pub mod reveal;
    pub mod sticky_cta;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting landing page, leads go to {}", config::get_lead_webhook_url());
    yew::Renderer::<App>::new().render();
}

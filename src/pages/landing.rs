use yew::prelude::*;

use crate::components::carousel::{Testimonial, TestimonialCarousel};
use crate::components::faq::{Faq, FaqEntry};
use crate::components::hero::Hero;
use crate::components::lead_form::LeadForm;
use crate::components::nav::{Nav, NavLink};
use crate::components::reveal::use_scroll_reveal;
use crate::components::sticky_cta::StickyCta;
use crate::interactions::use_page_interactions;

fn nav_links() -> Vec<NavLink> {
    [
        ("#how-it-works", "How it works"),
        ("#cases", "Cases"),
        ("#pricing", "Pricing"),
        ("#faq", "FAQ"),
    ]
    .into_iter()
    .map(|(href, label)| NavLink { href: href.into(), label: label.into() })
    .collect()
}

fn testimonials() -> Vec<Testimonial> {
    [
        (
            "We stopped missing weekend leads. Konnex books appointments while we sleep.",
            "Mariana Costa",
            "Dental clinic owner",
        ),
        (
            "First reply time went from hours to seconds. Our close rate followed.",
            "Rafael Lima",
            "Real estate broker",
        ),
        (
            "Setup took one afternoon and the team finally focuses on qualified conversations.",
            "Juliana Alves",
            "Marketing agency lead",
        ),
    ]
    .into_iter()
    .map(|(quote, author, role)| Testimonial { quote: quote.into(), author: author.into(), role: role.into() })
    .collect()
}

fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "Do I need a new WhatsApp number?",
            "No. Konnex connects to your existing WhatsApp Business number through the official API.",
        ),
        (
            "How long does setup take?",
            "Most teams are live in under a week, including the conversation flows we write with you.",
        ),
        (
            "Can a human take over a conversation?",
            "Yes. Any agent can jump in at any time and the assistant steps back automatically.",
        ),
        (
            "Is there a contract?",
            "Plans are monthly. Cancel whenever you want, no fees.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry { question: question.into(), answer: answer.into() })
    .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();
    use_page_interactions();

    html! {
        <div class="landing-page">
            <Nav links={nav_links()} />
            <main>
                <Hero />

                <section class="integrations">
                    { for ["WhatsApp", "Instagram", "Google Calendar", "RD Station", "HubSpot"].iter().map(|name| html! {
                        <div class="integration-item">{*name}</div>
                    }) }
                </section>

                <section class="problem">
                    <div class="problem-content">
                        <h2 class="section-header">{"Every unanswered message is a lost sale"}</h2>
                        <p>{"Leads who wait more than five minutes for a reply rarely convert. Your team cannot be online around the clock. Konnex can."}</p>
                    </div>
                    <div class="problem-visual">
                        <img src="/assets/unanswered.webp" alt="Unanswered WhatsApp messages" loading="lazy" />
                    </div>
                </section>

                <section id="how-it-works" class="bento">
                    <h2 class="section-header">{"How it works"}</h2>
                    <div class="bento-card">{"Instant replies to every new conversation"}</div>
                    <div class="bento-card">{"Qualification questions tailored to your business"}</div>
                    <div class="bento-card">{"Appointments booked straight into your calendar"}</div>
                    <div class="bento-card">{"Hot leads handed to your sales team with full context"}</div>
                </section>

                <section id="cases" class="cases">
                    <h2 class="section-header">{"What our clients say"}</h2>
                    <TestimonialCarousel testimonials={testimonials()} />
                </section>

                <section id="pricing" class="pricing">
                    <h2 class="section-header">{"Pricing"}</h2>
                    <div class="pricing-card">
                        <h3>{"Essential"}</h3>
                        <p class="price">{"R$ 497/month"}</p>
                        <a href="#contact" class="btn-primary" data-cta="pricing-essential">{"Start now"}</a>
                    </div>
                    <div class="pricing-card featured">
                        <h3>{"Pro"}</h3>
                        <p class="price">{"R$ 997/month"}</p>
                        <a href="#contact" class="btn-primary" data-cta="pricing-pro">{"Start now"}</a>
                    </div>
                </section>

                <Faq entries={faq_entries()} />

                <section id="contact" class="cta-final">
                    <div class="cta-final-box">
                        <h2>{"Get your free assessment"}</h2>
                        <p>{"Leave your name and WhatsApp. We will map where you are losing leads."}</p>
                        <LeadForm />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{"© Konnex. All rights reserved."}</p>
            </footer>
            <StickyCta href="#contact" label="Free assessment" />
        </div>
    }
}

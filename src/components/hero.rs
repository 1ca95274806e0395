use yew::prelude::*;

use crate::viewport::prefers_reduced_motion;

const TIMELINE_DELAY_MS: u32 = 150;
const METRIC_STAGGER_MS: u32 = 180;

/// Where a stage starts relative to the timeline.
#[derive(Clone, Copy, Debug)]
enum Start {
    /// Overlaps the end of the previous sequenced stage by this much.
    Overlap(u32),
    /// Fixed offset from the start of the timeline.
    At(u32),
}

#[derive(Clone, Copy, Debug)]
struct Stage {
    part: &'static str,
    start: Start,
    duration_ms: u32,
    rise_px: u32,
}

const STAGES: &[Stage] = &[
    Stage { part: "hero-badge", start: Start::Overlap(0), duration_ms: 600, rise_px: 18 },
    Stage { part: "hero-headline", start: Start::Overlap(300), duration_ms: 700, rise_px: 24 },
    Stage { part: "hero-sub", start: Start::Overlap(300), duration_ms: 600, rise_px: 16 },
    Stage { part: "hero-actions", start: Start::Overlap(250), duration_ms: 500, rise_px: 16 },
    Stage { part: "hero-microcopy", start: Start::Overlap(200), duration_ms: 500, rise_px: 0 },
    Stage { part: "hero-proof", start: Start::Overlap(200), duration_ms: 500, rise_px: 8 },
    Stage { part: "dashboard-mockup", start: Start::At(250), duration_ms: 900, rise_px: 32 },
    Stage { part: "float-metric", start: Start::At(650), duration_ms: 600, rise_px: 16 },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub part: &'static str,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub rise_px: u32,
}

/// Resolves the stage table into absolute delays.
pub fn entrance_timeline() -> Vec<Entrance> {
    let mut cursor = 0u32;
    STAGES
        .iter()
        .map(|stage| {
            let start = match stage.start {
                Start::Overlap(overlap) => {
                    let start = cursor.saturating_sub(overlap);
                    cursor = start + stage.duration_ms;
                    start
                }
                Start::At(at) => at,
            };
            Entrance {
                part: stage.part,
                delay_ms: TIMELINE_DELAY_MS + start,
                duration_ms: stage.duration_ms,
                rise_px: stage.rise_px,
            }
        })
        .collect()
}

fn entrance_style(timeline: &[Entrance], part: &str, nth: u32) -> Option<String> {
    let entrance = timeline.iter().find(|e| e.part == part)?;
    Some(format!(
        "--rise: {}px; animation: hero-rise {}ms cubic-bezier(0.22, 1, 0.36, 1) {}ms both;",
        entrance.rise_px,
        entrance.duration_ms,
        entrance.delay_ms + nth * METRIC_STAGGER_MS,
    ))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let timeline = use_memo(
        |_| if prefers_reduced_motion() { Vec::new() } else { entrance_timeline() },
        (),
    );
    let style = |part: &str| entrance_style(&timeline, part, 0);

    html! {
        <section id="hero" class="hero">
            <style>
            {r#"@keyframes hero-rise {
                from { opacity: 0; transform: translateY(var(--rise)); }
                to { opacity: 1; transform: translateY(0); }
            }"#}
            </style>
            <div class="hero-content">
                <span class="hero-badge" style={style("hero-badge")}>{"Automated WhatsApp sales desk"}</span>
                <h1 class="hero-headline" style={style("hero-headline")}>
                    {"Stop losing leads while your team is offline"}
                </h1>
                <p class="hero-sub" style={style("hero-sub")}>
                    {"Konnex answers, qualifies and books every WhatsApp conversation, 24/7, and hands hot leads to your sales team."}
                </p>
                <div class="hero-actions" style={style("hero-actions")}>
                    <a href="#contact" class="btn-primary" data-cta="hero-primary">{"Get a free assessment"}</a>
                    <a href="#how-it-works" class="btn-ghost" data-cta="hero-secondary">{"See how it works"}</a>
                </div>
                <p class="hero-microcopy" style={style("hero-microcopy")}>
                    {"Free assessment. No credit card."}
                </p>
                <div class="hero-proof" style={style("hero-proof")}>
                    {"Trusted by 120+ clinics and agencies"}
                </div>
            </div>
            <div class="hero-visual">
                <div class="dashboard-mockup" style={style("dashboard-mockup")}>
                    <img src="/assets/dashboard.webp" alt="Konnex dashboard" loading="eager" />
                </div>
                { for ["+38% conversions", "< 30s first reply", "24/7 coverage"].iter().enumerate().map(|(i, metric)| html! {
                    <div class="float-metric" style={entrance_style(&timeline, "float-metric", i as u32)}>
                        {*metric}
                    </div>
                }) }
            </div>
        </section>
    }
}

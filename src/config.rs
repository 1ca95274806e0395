
#[cfg(debug_assertions)]
pub fn get_lead_webhook_url() -> &'static str {
    "http://localhost:3001/webhook/lead"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_lead_webhook_url() -> &'static str {
    "https://hooks.konnex.com.br/webhook/lead"  // Production lead webhook
}

/// How long the submit button shows its error label before reverting.
pub const SUBMIT_ERROR_REVERT_MS: u32 = 3_000;

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 40.0;

pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 72.0;
pub const ANCHOR_EXTRA_OFFSET_PX: f64 = 16.0;

pub const REVEAL_STAGGER_MS: u32 = 70;
pub const REVEAL_STAGGER_CYCLE: usize = 5;
pub const REVEAL_FALLBACK_MS: u32 = 2_000;

/// WhatsApp number opened after a successful lead, if any.
/// Left off until sales confirms they want the chat handoff.
pub const CHAT_REDIRECT: Option<&str> = None;

use serde::Serialize;

use crate::lead::mask::mask_phone;

/// One lead, built at submit time and sent straight to the webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    #[serde(rename = "phoneRaw")]
    pub phone_raw_digits: String,
    #[serde(rename = "phoneFormatted")]
    pub phone_formatted: String,
}

impl LeadRecord {
    /// `phone_digits` must already be validated as a complete number.
    pub fn new(name: &str, phone_digits: String) -> Self {
        Self {
            name: name.trim().to_string(),
            phone_formatted: mask_phone(&phone_digits),
            phone_raw_digits: phone_digits,
        }
    }

    /// `wa.me` link that opens a chat with the sales number, greeting prefilled.
    pub fn chat_link(&self, sales_number: &str) -> String {
        let text = format!(
            "Olá! Me chamo {} e gostaria de receber uma avaliação gratuita do Konnex. Meu WhatsApp: {}",
            self.name, self.phone_formatted
        );
        format!("https://wa.me/{}?text={}", sales_number, urlencoding::encode(&text))
    }
}

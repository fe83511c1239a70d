use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsappMatch {
    /// Open a chat with a phone number, optionally prefilled.
    Send { phone: String, text: Option<String> },
    /// Join a group through an invite code.
    Invite { code: String },
}

static WA_ME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"wa\.me/\+?([0-9]+)").unwrap());
static API_SEND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"api\.whatsapp\.com/send/?\?(?:.*&)?phone=\+?([0-9]+)").unwrap()
});
static INVITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"chat\.whatsapp\.com/(?:invite/)?([A-Za-z0-9]+)").unwrap()
});
static TEXT_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]text=([^&#]*)").unwrap());

/// The `text=` value is kept percent-encoded as it appeared in the URL.
fn prefilled_text(url: &str) -> Option<String> {
    TEXT_PARAM_REGEX
        .captures(url)
        .map(|caps| caps[1].to_string())
        .filter(|text| !text.is_empty())
}

pub fn recognize(url: &str) -> Option<WhatsappMatch> {
    let send = WA_ME_REGEX
        .captures(url)
        .or_else(|| API_SEND_REGEX.captures(url));
    if let Some(caps) = send {
        return Some(WhatsappMatch::Send {
            phone: caps[1].to_string(),
            text: prefilled_text(url),
        });
    }

    INVITE_REGEX.captures(url).map(|caps| WhatsappMatch::Invite {
        code: caps[1].to_string(),
    })
}

pub fn build(web_url: &str, m: &WhatsappMatch) -> DeepLinkResult {
    let path = match m {
        WhatsappMatch::Send { phone, text } => match text {
            Some(text) => format!("send?phone={phone}&text={text}"),
            None => format!("send?phone={phone}"),
        },
        WhatsappMatch::Invite { code } => format!("chat?code={code}"),
    };

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("whatsapp://{path}")),
        android: Some(intent_uri(
            &path,
            &[("scheme", "whatsapp"), ("package", "com.whatsapp")],
        )),
        platform: Platform::Whatsapp,
    }
}

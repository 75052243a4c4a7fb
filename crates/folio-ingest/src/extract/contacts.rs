//! Contact and social link extraction

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Minimum digit count for a token to be taken as a phone number.
const MIN_PHONE_DIGITS: usize = 7;

/// Social categories, tried in order; the first matching needle wins.
const SOCIAL_RULES: &[(&str, &[&str])] = &[
    ("LinkedIn", &["linkedin"]),
    ("GitHub", &["github"]),
    ("Telegram", &["//t.me", "telegram"]),
    ("Twitter", &["twitter", "//x.com", "//www.x.com"]),
    ("Instagram", &["instagram"]),
];

pub const WEBSITE: &str = "Website";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("valid email regex")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+?\(?\d[\d \t().\-]{5,}\d").expect("valid phone regex"))
}

fn location_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?im)^[^\S\n]*(?:Location|Город|City|Страна|Country)(?:[^\S\n]*:[^\S\n]*|[^\S\n]+)(\S.*)$",
        )
        .expect("valid location regex")
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"https?://[^\s<>"')\]]+"#).expect("valid url regex"))
}

/// First email address in `text`.
pub fn find_email(text: &str) -> Option<String> {
    email_re().find(text).map(|m| m.as_str().to_string())
}

fn find_phone(text: &str) -> Option<String> {
    phone_re()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .map(str::to_string)
}

fn find_location(text: &str) -> Option<String> {
    location_re()
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|location| !location.is_empty())
}

/// Scan the contacts section for `email`, `phone` and `location`.
///
/// Keys are only present when a value was found.
pub fn extract_contacts(text: &str) -> BTreeMap<String, String> {
    let mut contacts = BTreeMap::new();
    if let Some(email) = find_email(text) {
        contacts.insert("email".to_string(), email);
    }
    // Emails can carry digit runs; keep them out of the phone scan.
    let without_emails = email_re().replace_all(text, " ");
    if let Some(phone) = find_phone(&without_emails) {
        contacts.insert("phone".to_string(), phone);
    }
    if let Some(location) = find_location(text) {
        contacts.insert("location".to_string(), location);
    }
    contacts
}

fn classify_url(url: &str) -> Option<&'static str> {
    let lower = url.to_lowercase();
    SOCIAL_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| lower.contains(needle)))
        .map(|(name, _)| *name)
}

/// Collect `http(s)` links by platform. First URL per platform wins; the
/// first unrecognised URL becomes `Website`.
pub fn extract_socials(text: &str) -> BTreeMap<String, String> {
    let mut socials = BTreeMap::new();
    for m in url_re().find_iter(text) {
        let url = m.as_str().trim_end_matches(&['.', ',', ';', ':', '!', '?'][..]);
        let key = classify_url(url).unwrap_or(WEBSITE);
        socials
            .entry(key.to_string())
            .or_insert_with(|| url.to_string());
    }
    socials
}

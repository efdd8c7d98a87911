//! Data types returned by the Mailinator API.

use serde::Serialize;
use std::collections::HashMap;

/// Header name to header value, both trimmed. Names are unique.
pub type Headers = HashMap<String, String>;

/// Summary row from an inbox listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxMessage {
    /// Recipient address.
    pub to: String,
    /// Message ID, usable with [`crate::get_email`].
    pub id: String,
    /// Age of the message in seconds when the inbox was fetched.
    pub seconds_ago: u64,
    /// Server timestamp, passed through as reported.
    pub time: i64,
    pub subject: String,
    /// Full sender line, e.g. `Alice <alice@example.com>`.
    pub from_full: String,
    /// Short sender name.
    pub from: String,
    pub been_read: bool,
    /// Sending IP as reported by the server.
    pub ip: String,
}

/// Full content of one email, together with the remaining API quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub api_inbox_fetches_left: u32,
    pub api_email_fetches_left: u32,
    pub forwards_left: u32,
    pub id: String,
    pub seconds_ago: u64,
    pub to: String,
    pub time: i64,
    pub subject: String,
    pub from_full: String,
    pub headers: Headers,
    /// Body parts in the order the server listed them.
    pub parts: Vec<EmailPart>,
}

impl Email {
    /// Look up a top-level header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Get a body part by position.
    pub fn part(&self, index: usize) -> Option<&EmailPart> {
        self.parts.get(index)
    }
}

/// One MIME body part of an [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPart {
    pub headers: Headers,
    /// Body as delivered by the server, without transfer decoding.
    pub body: String,
}

impl EmailPart {
    /// Look up a part header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .or_else(|| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(content_type: &str, body: &str) -> EmailPart {
        EmailPart {
            headers: Headers::from([("Content-Type".to_string(), content_type.to_string())]),
            body: body.to_string(),
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let p = part("text/plain", "hello");
        assert_eq!(p.header("content-type"), Some("text/plain"));
        assert_eq!(p.header("Content-Type"), Some("text/plain"));
        assert_eq!(p.header("x-missing"), None);
    }

    #[test]
    fn part_by_position() {
        let email = Email {
            api_inbox_fetches_left: 1,
            api_email_fetches_left: 2,
            forwards_left: 3,
            id: "m1".into(),
            seconds_ago: 0,
            to: "test@x.com".into(),
            time: 0,
            subject: String::new(),
            from_full: String::new(),
            headers: Headers::new(),
            parts: vec![part("text/plain", "a"), part("text/html", "<b>a</b>")],
        };
        assert_eq!(email.part(1).map(|p| p.body.as_str()), Some("<b>a</b>"));
        assert!(email.part(2).is_none());
        assert_eq!(email.header("subject"), None);
    }
}

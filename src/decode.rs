//! Turns Mailinator JSON responses into typed values.
//!
//! Each builder reads its fields by name and fails on the first missing or
//! mistyped one. Field paths in errors are dotted, e.g. `data.parts[1].body`.

use crate::models::{Email, EmailPart, Headers, InboxMessage};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::str::FromStr;

type Object = Map<String, Value>;

/// Decode the body of an `/inbox` response.
pub(crate) fn inbox(root: &Value) -> Result<Vec<InboxMessage>> {
    let root = as_object(root, "<root>")?;
    reject_api_error(root, "messages")?;

    let messages = match root.get("messages") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(Error::invalid("messages", "an array")),
        None => return Err(Error::missing("messages")),
    };

    messages
        .iter()
        .enumerate()
        .map(|(i, item)| inbox_message(item, &format!("messages[{i}]")))
        .collect()
}

/// Decode the body of an `/email` response.
pub(crate) fn email(root: &Value) -> Result<Email> {
    let root = as_object(root, "<root>")?;
    reject_api_error(root, "data")?;

    let api_inbox_fetches_left = integer(root, "", "apiInboxFetchesLeft")?;
    let api_email_fetches_left = integer(root, "", "apiEmailFetchesLeft")?;
    let forwards_left = integer(root, "", "forwardsLeft")?;

    let data = as_object(field(root, "", "data")?, "data")?;

    let headers = header_map(field(data, "data", "headers")?, "data.headers")?;

    let parts = match data.get("parts") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| email_part(item, &format!("data.parts[{i}]")))
            .collect::<Result<_>>()?,
        Some(_) => return Err(Error::invalid("data.parts", "an array")),
    };

    Ok(Email {
        api_inbox_fetches_left,
        api_email_fetches_left,
        forwards_left,
        id: text(data, "data", "id")?,
        seconds_ago: integer(data, "data", "seconds_ago")?,
        to: text(data, "data", "to")?,
        time: integer(data, "data", "time")?,
        subject: text(data, "data", "subject")?,
        from_full: text(data, "data", "fromfull")?,
        headers,
        parts,
    })
}

pub(crate) fn inbox_message(value: &Value, path: &str) -> Result<InboxMessage> {
    let obj = as_object(value, path)?;

    Ok(InboxMessage {
        to: text(obj, path, "to")?,
        id: text(obj, path, "id")?,
        seconds_ago: integer(obj, path, "seconds_ago")?,
        time: integer(obj, path, "time")?,
        subject: text(obj, path, "subject")?,
        from_full: text(obj, path, "fromfull")?,
        from: text(obj, path, "from")?,
        been_read: boolean(obj, path, "been_read")?,
        ip: text(obj, path, "ip")?,
    })
}

fn email_part(value: &Value, path: &str) -> Result<EmailPart> {
    let obj = as_object(value, path)?;
    let headers_path = join(path, "headers");

    Ok(EmailPart {
        headers: header_map(field(obj, path, "headers")?, &headers_path)?,
        body: text(obj, path, "body")?,
    })
}

/// Map a JSON object of headers to trimmed name/value pairs.
///
/// Entries are applied in document order, so when two names collide after
/// trimming the later value is kept.
pub(crate) fn header_map(value: &Value, path: &str) -> Result<Headers> {
    let obj = as_object(value, path)?;
    let mut headers = Headers::with_capacity(obj.len());

    for (name, value) in obj {
        let value = match value {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        };
        headers.insert(name.trim().to_string(), value);
    }

    Ok(headers)
}

/// Fail with the server's message when it sent `{"error": ...}` instead of `expected`.
fn reject_api_error(root: &Object, expected: &str) -> Result<()> {
    if root.contains_key(expected) {
        return Ok(());
    }
    match root.get("error") {
        Some(Value::String(message)) => Err(Error::Api(message.clone())),
        Some(other) => Err(Error::Api(other.to_string())),
        None => Ok(()),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid(path, "an object"))
}

fn field<'a>(obj: &'a Object, path: &str, key: &str) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| Error::missing(join(path, key)))
}

/// Read a scalar as text. Numbers and booleans use their JSON spelling.
fn text(obj: &Object, path: &str, key: &str) -> Result<String> {
    match field(obj, path, key)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::invalid(join(path, key), "a string")),
    }
}

/// Read an integer sent either as a JSON number or as a numeric string.
fn integer<T: FromStr>(obj: &Object, path: &str, key: &str) -> Result<T> {
    let raw = match field(obj, path, key)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return Err(Error::invalid(join(path, key), "an integer")),
    };
    raw.parse()
        .map_err(|_| Error::invalid(join(path, key), "an integer"))
}

fn boolean(obj: &Object, path: &str, key: &str) -> Result<bool> {
    field(obj, path, key)?
        .as_bool()
        .ok_or_else(|| Error::invalid(join(path, key), "a boolean"))
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

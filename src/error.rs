//! Error type shared by every Mailinator call.

/// Errors returned by the Mailinator client.
///
/// Variants fall into two classes. Transport errors ([`Error::Request`],
/// [`Error::Status`]) mean the response never arrived in usable form. Decode
/// errors ([`Error::Json`], [`Error::Api`], [`Error::MissingField`],
/// [`Error::InvalidField`]) mean a response arrived but did not have the
/// expected shape. Use [`Error::is_transport`] and [`Error::is_decode`] to tell
/// them apart.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection, DNS, TLS, timeout or URL construction failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and no error message.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The response body is not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// The server replied with `{"error": "..."}`, e.g. when the rate limit is hit.
    #[error("Mailinator API error: {0}")]
    Api(String),

    /// A required key is absent from the response.
    #[error("missing field `{field}` in response")]
    MissingField { field: String },

    /// A key is present but its value has the wrong type or cannot be parsed.
    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl Error {
    /// `true` when the request itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(_) | Error::Status { .. })
    }

    /// `true` when a response arrived but could not be turned into the expected type.
    pub fn is_decode(&self) -> bool {
        !self.is_transport()
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        Error::InvalidField {
            field: field.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_decode_errors() {
        assert!(Error::Api("rate limiter reached".into()).is_decode());
        assert!(Error::missing("data").is_decode());
        assert!(Error::invalid("time", "an integer").is_decode());
        assert!(Error::Status { status: 503 }.is_transport());
    }

    #[test]
    fn messages_name_the_field() {
        let err = Error::invalid("messages[0].seconds_ago", "an integer");
        assert_eq!(
            err.to_string(),
            "invalid value for `messages[0].seconds_ago`: expected an integer"
        );
        assert_eq!(
            Error::Api("rate limiter reached".into()).to_string(),
            "Mailinator API error: rate limiter reached"
        );
    }
}

//! Mailinator async client implementation.

use crate::{decode, Email, Error, InboxMessage, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;

/// Async client for the Mailinator API.
///
/// The client holds no per-call state, so one instance can be cloned and used
/// from many tasks at once. Use [`Client::new`] for defaults or
/// [`Client::builder`] to change the endpoint, proxy, timeout or user agent.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// # fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Get the API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the messages currently in an inbox.
    ///
    /// # Arguments
    /// * `api_key` - Mailinator API token
    /// * `email_address` - The inbox address
    ///
    /// # Returns
    /// One [`InboxMessage`] per listed message, in server order
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new()?;
    /// let messages = client.get_inbox_messages("my-token", "test@mailinator.com").await?;
    /// for msg in messages {
    ///     println!("{}: {}", msg.from, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_inbox_messages(
        &self,
        api_key: &str,
        email_address: &str,
    ) -> Result<Vec<InboxMessage>> {
        let response = self
            .get_api("inbox", &[("token", api_key), ("to", email_address)])
            .await?;

        let messages = decode::inbox(&response)?;
        tracing::debug!(count = messages.len(), "decoded inbox listing");
        Ok(messages)
    }

    /// Fetch the full content of one email.
    ///
    /// # Arguments
    /// * `api_key` - Mailinator API token
    /// * `email_id` - Message ID taken from [`InboxMessage::id`]
    ///
    /// # Returns
    /// The email with headers, body parts and the remaining API quota
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::new()?;
    /// let messages = client.get_inbox_messages("my-token", "test@mailinator.com").await?;
    /// if let Some(msg) = messages.first() {
    ///     let email = client.get_email("my-token", &msg.id).await?;
    ///     for part in &email.parts {
    ///         println!("{}", part.body);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_email(&self, api_key: &str, email_id: &str) -> Result<Email> {
        let response = self
            .get_api("email", &[("token", api_key), ("msgid", email_id)])
            .await?;

        let email = decode::email(&response)?;
        tracing::debug!(
            parts = email.parts.len(),
            email_fetches_left = email.api_email_fetches_left,
            "decoded email"
        );
        Ok(email)
    }

    /// Common GET API request pattern.
    ///
    /// Query values are percent-encoded by reqwest. A non-2xx response that
    /// still carries `{"error": ...}` is handed back so the decoder can report
    /// the server's message.
    async fn get_api(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "sending Mailinator request");

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "Mailinator returned an error status");
            return match serde_json::from_slice::<serde_json::Value>(&body) {
                Ok(value) if value.get("error").is_some() => Ok(value),
                _ => Err(Error::Status {
                    status: status.as_u16(),
                }),
            };
        }

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        if let Some(message) = value.get("error") {
            tracing::warn!(%message, "Mailinator reported an error");
        }
        Ok(value)
    }
}

const BASE_URL: &str = "https://api.mailinator.com/api";
const USER_AGENT_VALUE: &str = concat!("mailinator-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Mailinator client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - Default user agent
    /// - Default Mailinator API endpoint
    /// - No request timeout
    pub fn new() -> Self {
        Self {
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a local server. A trailing `/` is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Limit how long a whole request may take.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No network traffic happens here; errors only come from invalid proxy
    /// or TLS configuration.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), mailinator_client::Error> {
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
            .default_headers(headers);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            http: builder.build()?,
            base_url: self.base_url,
            proxy: self.proxy,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

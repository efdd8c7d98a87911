//! # Mailinator Client
//! Asynchronous wrapper around the Mailinator HTTP API for reading disposable inboxes: list the messages of an inbox with [`get_inbox_messages`] and fetch a full [`Email`] with [`get_email`], or configure a reusable [`Client`] through [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who check mail sent to throwaway Mailinator addresses in integration tests, demos, or automation scripts: list the inbox ([`InboxMessage`]), then fetch the message you care about and read its [`EmailPart`]s.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`.
//!
//! ## Out of scope
//! Read-only. No sending, forwarding, pagination, retries, or rate-limit handling; the API key is passed through to the server unchecked.
//!
//! ## Errors
//! Network failures and bare non-2xx statuses surface as [`Error::Request`] or [`Error::Status`]. Malformed bodies become [`Error::Json`], missing or mistyped fields become [`Error::MissingField`] or [`Error::InvalidField`], and the server's `{"error": ...}` reply becomes [`Error::Api`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), mailinator_client::Error> {
//!     let messages = mailinator_client::get_inbox_messages("my-token", "test@mailinator.com").await?;
//!     for msg in &messages {
//!         println!("From: {}, Subject: {}", msg.from, msg.subject);
//!     }
//!
//!     if let Some(msg) = messages.first() {
//!         let email = mailinator_client::get_email("my-token", &msg.id).await?;
//!         println!("{} email fetches left", email.api_email_fetches_left);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{Email, EmailPart, Headers, InboxMessage};

/// Result type alias for Mailinator operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// List the messages in an inbox using a default [`Client`].
pub async fn get_inbox_messages(api_key: &str, email_address: &str) -> Result<Vec<InboxMessage>> {
    Client::new()?
        .get_inbox_messages(api_key, email_address)
        .await
}

/// Fetch one email by ID using a default [`Client`].
pub async fn get_email(api_key: &str, email_id: &str) -> Result<Email> {
    Client::new()?.get_email(api_key, email_id).await
}

//! Print an inbox and the first email in it.
//!
//! Usage: `cargo run --example demo -- <api-key> <address>`
//! Set `RUST_LOG=mailinator_client=debug` to see request logs.

use mailinator_client::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), mailinator_client::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(api_key), Some(address)) = (args.next(), args.next()) else {
        eprintln!("usage: demo <api-key> <address>");
        std::process::exit(2);
    };

    let client = Client::new()?;
    let messages = client.get_inbox_messages(&api_key, &address).await?;
    println!("{} message(s) for {}", messages.len(), address);
    for msg in &messages {
        println!("[{}] {} - {} ({}s ago)", msg.id, msg.from_full, msg.subject, msg.seconds_ago);
    }

    if let Some(msg) = messages.first() {
        let email = client.get_email(&api_key, &msg.id).await?;
        println!("\nSubject: {}", email.subject);
        for (i, part) in email.parts.iter().enumerate() {
            let content_type = part.header("content-type").unwrap_or("unknown");
            println!("--- part {i} ({content_type}) ---\n{}", part.body);
        }
        println!(
            "\nQuota: {} inbox fetches, {} email fetches, {} forwards left",
            email.api_inbox_fetches_left, email.api_email_fetches_left, email.forwards_left
        );
    }

    Ok(())
}

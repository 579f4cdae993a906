//! Basic NNTP client example
//!
//! Run with: cargo run --example basic
//!
//! Set `RUST_LOG=nntp_client=trace` to see every command and reply.

use nntp_client::{Credentials, NntpClient, ServerConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.example.com".to_string());
    let port = std::env::var("NNTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(119);

    let mut config = ServerConfig::with_port(host, port)
        .timeout(Duration::from_secs(30))
        .mode_reader(true);
    if let (Ok(user), Ok(pass)) = (std::env::var("NNTP_USER"), std::env::var("NNTP_PASS")) {
        config = config.credentials(Credentials::new(user, pass));
    }

    println!("Connecting to {}:{}...", config.host, config.port);
    let mut client = NntpClient::connect(&config)?;
    println!(
        "Connected (posting {})",
        if client.posting_allowed() {
            "allowed"
        } else {
            "not allowed"
        }
    );
    println!("Extensions: {:?}", client.capabilities().list());

    // Select a newsgroup
    let group = std::env::var("NNTP_GROUP").unwrap_or_else(|_| "alt.test".to_string());
    let stats = client.select_group(&group)?;
    println!(
        "Selected group '{}': {} articles ({}-{})",
        group, stats.estimated_count, stats.first_article_id, stats.last_article_id
    );

    // Headers of the last few articles
    if stats.estimated_count > 0 {
        let first = stats
            .last_article_id
            .saturating_sub(10)
            .max(stats.first_article_id);
        println!("\nHeaders {}-{}:", first, stats.last_article_id);

        for headers in client.retrieve_article_headers(first, stats.last_article_id)? {
            let headers = headers?;
            println!(
                "  {}: {} (by {})",
                headers.first("Article-ID").unwrap_or("?"),
                headers.first("Subject").unwrap_or(""),
                headers.first("From").unwrap_or("")
            );
        }
    }

    client.close();
    println!("\nConnection closed.");

    Ok(())
}

//! Delegate a prompt to Devin from the command line.
//!
//! Run with: cargo run -p delegate-cli -- "Fix the failing CI build"
//!
//! Requires `DEVIN_API_KEY` in the environment.

use std::sync::Arc;

use anyhow::Context;
use devin_delegate_core::SessionRequest;
use devin_delegate_task::Delegator;
use futures::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("usage: delegate-cli <prompt>");
    }

    let delegator = Arc::new(Delegator::from_env().context("configuring the Devin client")?);
    let handle = delegator.spawn(SessionRequest::new(prompt));

    // History first, then live updates: nothing is missed even if the
    // delegation raced ahead of us.
    let mut events = handle.progress().history_plus_stream();
    let printer = tokio::spawn(async move {
        while let Some(event) = events.next().await {
            println!("{}", event.message);
        }
    });

    let outcome = handle.join().await;
    let _ = printer.await;

    let result = outcome?;
    println!();
    println!("Session {} {}", result.session, result.status);
    if let Some(message) = result.message {
        println!("  {message}");
    }
    if let Some(url) = result.url {
        println!("  {url}");
    }

    Ok(())
}

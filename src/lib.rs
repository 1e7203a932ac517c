pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod transport;
pub mod view;

use cli::Args;
use client::ChatClient;
use config::ClientConfig;
use log::info;
use std::error::Error;
use std::sync::Arc;
use tokio::io::BufReader;
use view::TerminalView;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = ClientConfig::from_args(&args)?;

    info!("--- Chat Configuration ---");
    info!("Endpoint: {}", config.endpoint);
    info!("Delivery Order: {}", config.delivery);
    match config.timeout {
        Some(timeout) => info!("Request Timeout: {}s", timeout.as_secs()),
        None => info!("Request Timeout: none"),
    }
    info!("Greeting: {}", config.greeting.is_some());
    info!("-------------------------");

    let view = Arc::new(TerminalView::stdout());
    let client = ChatClient::from_config(&config, view)?;

    if let Some(message) = args.message {
        match client.submit(&message) {
            Some(submission) => submission.wait().await,
            None => info!("Nothing to send: message is blank"),
        }
        return Ok(());
    }

    info!("Chatting with {} (/clear to reset, /quit to exit)", client.endpoint());
    repl::run_prompt(&client, BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}

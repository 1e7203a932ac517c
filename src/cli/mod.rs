use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Endpoint Args ---
    /// Base URL of the chat backend (e.g., http://127.0.0.1:5000)
    #[arg(long, env = "CHAT_ENDPOINT", default_value = "http://127.0.0.1:5000")]
    pub endpoint: String,

    /// Route appended to the endpoint for chat submissions.
    #[arg(long, env = "CHAT_ROUTE", default_value = "/chat")]
    pub route: String,

    /// Optional request timeout in seconds. Requests run to completion when unset.
    #[arg(long, env = "CHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    // --- Conversation Args ---
    /// Order in which bot replies are rendered (arrival, submission)
    #[arg(long, env = "CHAT_DELIVERY", default_value = "arrival")]
    pub delivery: String,

    /// Greeting rendered as the first bot turn when the client starts.
    #[arg(long, env = "CHAT_GREETING")]
    pub greeting: Option<String>,

    /// Submit a single message, print the conversation and exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    // --- General App Args ---
    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

pub mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use crate::config::ClientConfig;
use crate::error::{ ChatError, ConfigError };
use self::http::HttpTransport;

/// Raw result of one chat POST, before it is interpreted.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

/// Network seam of the chat client. Implementations only report transport
/// failures as errors; status and body interpretation is shared by the caller.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_chat(&self, message: &str) -> Result<HttpReply, ChatError>;

    fn endpoint(&self) -> String;
}

pub fn new_transport(config: &ClientConfig) -> Result<Arc<dyn ChatTransport>, ConfigError> {
    let transport = HttpTransport::from_config(config)?;
    Ok(Arc::new(transport))
}

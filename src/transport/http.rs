use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::{ ACCEPT, CONTENT_TYPE };
use url::Url;
use super::{ ChatTransport, HttpReply };
use crate::config::ClientConfig;
use crate::error::{ ChatError, ConfigError };
use crate::models::wire::ChatRequest;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(http: HttpClient, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?, config.endpoint.clone()))
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_chat(&self, message: &str) -> Result<HttpReply, ChatError> {
        let req = ChatRequest {
            message: message.to_string(),
        };
        let resp = self.http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&req)
            .send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!("POST {} -> {} ({} bytes)", self.endpoint, status, body.len());
        Ok(HttpReply { status, body })
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}

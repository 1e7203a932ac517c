use crate::cli::Args;
use crate::error::ConfigError;
use serde::{ Deserialize, Serialize };
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Order in which bot turns are rendered when submissions overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Render each reply as soon as it arrives. A slow first reply can land
    /// after a fast second one.
    #[default]
    Arrival,
    /// Hold early replies until every earlier submission has rendered.
    Submission,
}

impl FromStr for DeliveryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrival" => Ok(DeliveryMode::Arrival),
            "submission" => Ok(DeliveryMode::Submission),
            _ => Err(ConfigError::Delivery(s.to_string())),
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMode::Arrival => write!(f, "arrival"),
            DeliveryMode::Submission => write!(f, "submission"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
    pub delivery: DeliveryMode,
    pub greeting: Option<String>,
}

impl ClientConfig {
    /// Configuration posting to `<base_url>/chat` with every option at its default.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: resolve_endpoint(base_url, "/chat")?,
            timeout: None,
            delivery: DeliveryMode::default(),
            greeting: None,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: resolve_endpoint(&args.endpoint, &args.route)?,
            timeout: args.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            delivery: args.delivery.parse()?,
            greeting: args.greeting.clone().filter(|g| !g.trim().is_empty()),
        })
    }

    pub fn with_delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }
}

/// Joins `route` onto `base`, keeping any path prefix already on the base
/// (`http://host/api` + `/chat` gives `http://host/api/chat`).
pub fn resolve_endpoint(base: &str, route: &str) -> Result<Url, ConfigError> {
    let joined = format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        route.trim().trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|source| ConfigError::Endpoint { url: joined, source })
}

//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{ProviderCode, ProviderOutcome, SendSms, SendSmsResponse, ValidationError};

pub use config::{PASSWORD_ENV, TwsmsConfig, USERNAME_ENV};

const DEFAULT_ENDPOINT: &str = "https://api.twsms.com/json/sms_send.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    /// Issue a POST with an empty body; everything travels in the query string.
    fn post<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // The URL carries the account password, keep it out of error messages.
            let response = self
                .client
                .post(url.clone())
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse classification of a [`TwsmsError`].
pub enum ErrorCategory {
    /// Caller, configuration or integration fault (HTTP-style 500).
    Internal,
    /// The provider is down or reported a condition outside the known bands (HTTP-style 503).
    ServiceUnavailable,
}

impl ErrorCategory {
    /// HTTP-style status code for this category.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Internal => 500,
            Self::ServiceUnavailable => 503,
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwsmsClient`].
///
/// Every failure is terminal; the client never retries.
pub enum TwsmsError {
    /// The client could not be configured (bad endpoint URL, missing credentials).
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The request shape is not supported (anything but exactly one recipient).
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, connection reset, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// TwSMS answered with a 5xx HTTP status.
    #[error("service unavailable: HTTP {status}")]
    UpstreamUnavailable { status: u16 },

    /// TwSMS answered with a 4xx HTTP status. The body is not inspected.
    #[error("request rejected: HTTP {status}")]
    UpstreamRejected { status: u16 },

    /// Response body could not be decoded, or its `code` is not an integer.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// TwSMS decoded fine but reported a failure code.
    #[error("TwSMS error {code}: {text}")]
    ProviderRejected { code: ProviderCode, text: String },
}

impl TwsmsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UpstreamUnavailable { .. } => ErrorCategory::ServiceUnavailable,
            Self::ProviderRejected { code, .. } => match code.outcome() {
                ProviderOutcome::Unavailable => ErrorCategory::ServiceUnavailable,
                ProviderOutcome::Accepted | ProviderOutcome::Rejected => ErrorCategory::Internal,
            },
            Self::Config { .. }
            | Self::InvalidRequest(_)
            | Self::Transport(_)
            | Self::UpstreamRejected { .. }
            | Self::Decode(_) => ErrorCategory::Internal,
        }
    }

    /// HTTP-style status code (500 or 503).
    pub fn status_code(&self) -> u16 {
        self.category().status_code()
    }

    /// Human-readable detail, when there is one beyond the variant itself.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Config { message, .. } => Some(message.as_str()),
            Self::ProviderRejected { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TwsmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct TwsmsClientBuilder {
    config: TwsmsConfig,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TwsmsClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(config: TwsmsConfig) -> Self {
        Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `sms_send` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TwsmsClient`].
    pub fn build(self) -> Result<TwsmsClient, TwsmsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TwsmsError::Transport(Box::new(err)))?;

        let endpoint = endpoint_with_credentials(&self.endpoint, &self.config)?;
        Ok(TwsmsClient {
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn endpoint_with_credentials(endpoint: &str, config: &TwsmsConfig) -> Result<Url, TwsmsError> {
    let mut url = Url::parse(endpoint).map_err(|err| TwsmsError::Config {
        message: format!("invalid endpoint URL: {endpoint}"),
        source: Some(Box::new(err)),
    })?;
    crate::transport::encode_credentials(&mut url, config.username(), config.password());
    Ok(url)
}

#[derive(Clone)]
/// High-level TwSMS client.
///
/// Credentials are embedded into the endpoint once, at build time. Each send derives
/// its own URL from it, so a client can be cloned and shared across tasks freely.
pub struct TwsmsClient {
    endpoint: Url,
    http: Arc<dyn HttpTransport>,
}

impl TwsmsClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`TwsmsClient::builder`].
    pub fn new(config: TwsmsConfig) -> Result<Self, TwsmsError> {
        TwsmsClientBuilder::new(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(config: TwsmsConfig) -> TwsmsClientBuilder {
        TwsmsClientBuilder::new(config)
    }

    /// Send `subject` + `body` to exactly one recipient.
    ///
    /// Any other number of recipients fails with [`TwsmsError::InvalidRequest`] before
    /// anything goes over the wire.
    pub async fn send<I, S>(
        &self,
        recipients: I,
        subject: &str,
        body: &str,
    ) -> Result<SendSmsResponse, TwsmsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = SendSms::from_recipients(recipients, subject, body)?;
        self.send_sms(request).await
    }

    /// Send an already validated request.
    ///
    /// Errors:
    /// - [`TwsmsError::Transport`] when the request could not be issued,
    /// - [`TwsmsError::UpstreamUnavailable`] for HTTP 5xx,
    /// - [`TwsmsError::UpstreamRejected`] for HTTP 4xx,
    /// - [`TwsmsError::Decode`] for a malformed body or non-numeric `code`,
    /// - [`TwsmsError::ProviderRejected`] when `code` is not a success code.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, TwsmsError> {
        let url = crate::transport::encode_send_sms_url(&self.endpoint, &request);
        debug!(
            host = self.endpoint.host_str().unwrap_or_default(),
            message_chars = request.message().as_str().chars().count(),
            "twsms: sending sms"
        );

        let response = self.http.post(&url).await.map_err(|err| {
            warn!(error = %err, "twsms: transport failure");
            TwsmsError::Transport(err)
        })?;

        let status = response.status;
        if status >= 500 {
            warn!(status, "twsms: service unavailable");
            return Err(TwsmsError::UpstreamUnavailable { status });
        }
        if status >= 400 {
            warn!(status, "twsms: request rejected");
            return Err(TwsmsError::UpstreamRejected { status });
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| TwsmsError::Decode(Box::new(err)))?;

        if !parsed.code.is_accepted() {
            warn!(code = parsed.code.as_i64(), text = %parsed.text, "twsms: provider error");
            return Err(TwsmsError::ProviderRejected {
                code: parsed.code,
                text: parsed.text,
            });
        }

        debug!(msg_id = parsed.msg_id.as_i64(), "twsms: sms accepted");
        Ok(parsed)
    }
}

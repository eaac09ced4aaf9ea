//! Typed Rust client for the TwSMS `sms_send` HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details (query-string encoding, the JSON reply) and a small client
//! layer that issues the request and classifies the outcome.
//!
//! TwSMS accepts a single recipient per call; the client enforces that before
//! anything goes over the wire.
//!
//! ```rust,no_run
//! use twsms::{TwsmsClient, TwsmsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twsms::TwsmsError> {
//!     let client = TwsmsClient::new(TwsmsConfig::from_env()?)?;
//!     let resp = client.send(["0912345678"], "Alert: ", "server down").await?;
//!     println!("msgid {}", resp.msg_id.as_i64());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ErrorCategory, PASSWORD_ENV, TwsmsClient, TwsmsClientBuilder, TwsmsConfig, TwsmsError,
    USERNAME_ENV,
};
pub use domain::{
    MessageId, MessageText, Mobile, Password, ProviderCode, ProviderOutcome, SendSms,
    SendSmsResponse, Username, ValidationError,
};

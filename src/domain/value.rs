use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TwSMS account username.
///
/// Invariant: must not be empty. The value is sent exactly as given.
pub struct Username(String);

impl Username {
    /// Query parameter name used by TwSMS (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// TwSMS account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query parameter name used by TwSMS (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient mobile number as sent to TwSMS (`mobile`).
///
/// No validation or normalization is applied; TwSMS accepts local (`0912345678`) and
/// international forms and the value is forwarded untouched.
pub struct Mobile(String);

impl Mobile {
    /// Query parameter name used by TwSMS (`mobile`).
    pub const FIELD: &'static str = "mobile";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as sent to TwSMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Final SMS text (`message`), composed from an optional subject and a body.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by TwSMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Compose the message text. A non-empty subject is prepended to the body as-is,
    /// without any separator.
    pub fn compose(subject: &str, body: &str) -> Self {
        if subject.is_empty() {
            Self(body.to_owned())
        } else {
            Self(format!("{subject}{body}"))
        }
    }

    /// Borrow the composed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by TwSMS (`msgid`).
pub struct MessageId(i64);

impl MessageId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status code returned by TwSMS in the `code` field.
///
/// The wire value is a string; it is parsed into an integer by the transport layer.
pub struct ProviderCode(i64);

impl ProviderCode {
    /// Construct a provider code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by TwSMS.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Classify the code.
    pub fn outcome(self) -> ProviderOutcome {
        ProviderOutcome::from_code(self.0)
    }

    /// Returns `true` if TwSMS accepted the message.
    pub fn is_accepted(self) -> bool {
        self.outcome() == ProviderOutcome::Accepted
    }
}

impl fmt::Display for ProviderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How a [`ProviderCode`] is interpreted.
pub enum ProviderOutcome {
    /// `code <= 1`: the message was accepted.
    Accepted,
    /// `10..=12` or `50..=140`: the request was rejected (bad credentials, bad
    /// recipient, insufficient points and the like).
    Rejected,
    /// Anything else: treated as the provider being unavailable.
    Unavailable,
}

impl ProviderOutcome {
    /// Convert a raw TwSMS integer code into an outcome.
    pub fn from_code(code: i64) -> Self {
        match code {
            i64::MIN..=1 => Self::Accepted,
            10..=12 | 50..=140 => Self::Rejected,
            _ => Self::Unavailable,
        }
    }
}

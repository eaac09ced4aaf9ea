use crate::client::TwsmsError;
use crate::domain::{Password, Username, ValidationError};

/// Environment variable holding the TwSMS username.
pub const USERNAME_ENV: &str = "TWSMS_USERNAME";
/// Environment variable holding the TwSMS password.
pub const PASSWORD_ENV: &str = "TWSMS_PASSWORD";

#[derive(Debug, Clone)]
/// Account credentials for a [`TwsmsClient`](crate::TwsmsClient).
///
/// The client never reads the process environment on its own; use
/// [`TwsmsConfig::from_env`] at the edge of your application if that is where the
/// credentials live.
pub struct TwsmsConfig {
    username: Username,
    password: Password,
}

impl TwsmsConfig {
    /// Create a config and validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Read `TWSMS_USERNAME` and `TWSMS_PASSWORD`.
    pub fn from_env() -> Result<Self, TwsmsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TwsmsError> {
        let username = lookup(USERNAME_ENV).ok_or_else(|| missing(USERNAME_ENV))?;
        let password = lookup(PASSWORD_ENV).ok_or_else(|| missing(PASSWORD_ENV))?;
        Self::new(username, password).map_err(|err| TwsmsError::Config {
            message: "invalid credentials in environment".to_owned(),
            source: Some(Box::new(err)),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

fn missing(name: &str) -> TwsmsError {
    TwsmsError::Config {
        message: format!("{name} environment variable is required"),
        source: None,
    }
}

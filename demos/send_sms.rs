use std::io;

use tracing_subscriber::EnvFilter;
use twsms::{TwsmsClient, TwsmsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("twsms=debug")),
        )
        .init();

    let config = TwsmsConfig::from_env()?;
    let mobile = std::env::var("TWSMS_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWSMS_MOBILE environment variable is required",
        )
    })?;
    let subject = std::env::var("TWSMS_SUBJECT").unwrap_or_default();
    let body = std::env::var("TWSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the twsms demo.".to_owned());

    let client = TwsmsClient::new(config)?;
    match client.send([mobile], &subject, &body).await {
        Ok(response) => {
            println!(
                "accepted: code {}, msgid {}, text {:?}",
                response.code,
                response.msg_id.as_i64(),
                response.text
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("failed ({:?}, {}): {err}", err.category(), err.status_code());
            Err(err.into())
        }
    }
}

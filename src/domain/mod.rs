//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SEND_SMS_RECIPIENTS, SendSms};
pub use response::SendSmsResponse;
pub use validation::ValidationError;
pub use value::{
    MessageId, MessageText, Mobile, Password, ProviderCode, ProviderOutcome, Username,
};

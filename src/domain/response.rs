use crate::domain::value::{MessageId, ProviderCode};

/// Decoded `sms_send` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub code: ProviderCode,
    pub text: String,
    pub msg_id: MessageId,
}

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, Mobile};

/// TwSMS accepts exactly one recipient per `sms_send` call.
pub const SEND_SMS_RECIPIENTS: usize = 1;

#[derive(Debug, Clone)]
pub struct SendSms {
    mobile: Mobile,
    message: MessageText,
}

impl SendSms {
    /// Build a request for a single recipient.
    pub fn new(mobile: Mobile, subject: &str, body: &str) -> Self {
        Self {
            mobile,
            message: MessageText::compose(subject, body),
        }
    }

    /// Build a request from a recipient list, which must contain exactly one entry.
    pub fn from_recipients<I, S>(
        recipients: I,
        subject: &str,
        body: &str,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recipients = recipients
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        if recipients.len() != SEND_SMS_RECIPIENTS {
            return Err(ValidationError::RecipientCount {
                expected: SEND_SMS_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        let mobile = Mobile::new(recipients.remove(0));
        Ok(Self::new(mobile, subject, body))
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

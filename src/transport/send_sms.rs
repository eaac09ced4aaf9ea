use std::num::ParseIntError;

use serde::Deserialize;
use url::Url;

use crate::domain::{
    MessageId, MessageText, Mobile, Password, ProviderCode, SendSms, SendSmsResponse, Username,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains a non-numeric code: {code:?}")]
    InvalidCode {
        code: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    code: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    msgid: Option<i64>,
}

/// Embed the account credentials into the endpoint query string.
pub fn encode_credentials(endpoint: &mut Url, username: &Username, password: &Password) {
    set_query_params(
        endpoint,
        &[
            (Username::FIELD, username.as_str()),
            (Password::FIELD, password.as_str()),
        ],
    );
}

/// Derive the per-call URL: recipient and message are layered over whatever the
/// endpoint already carries. The endpoint itself is left untouched.
pub fn encode_send_sms_url(endpoint: &Url, request: &SendSms) -> Url {
    let mut url = endpoint.clone();
    set_query_params(
        &mut url,
        &[
            (Mobile::FIELD, request.mobile().raw()),
            (MessageText::FIELD, request.message().as_str()),
        ],
    );
    url
}

fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let kept = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| key == name))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect::<Vec<_>>();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    pairs.extend_pairs(kept);
    pairs.extend_pairs(params.iter().copied());
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    let code = parsed
        .code
        .parse::<i64>()
        .map_err(|source| TransportError::InvalidCode {
            code: parsed.code.clone(),
            source,
        })?;

    Ok(SendSmsResponse {
        code: ProviderCode::new(code),
        text: parsed.text,
        msg_id: MessageId::new(parsed.msgid.unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn endpoint() -> Url {
        let mut url = Url::parse("https://api.example.invalid/json/sms_send.php").unwrap();
        encode_credentials(
            &mut url,
            &Username::new("user").unwrap(),
            &Password::new("p@ss word").unwrap(),
        );
        url
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn credentials_are_sent_exactly_as_given() {
        let mut url = Url::parse("https://api.example.invalid/json/sms_send.php").unwrap();
        encode_credentials(
            &mut url,
            &Username::new(" user ").unwrap(),
            &Password::new(" pw ").unwrap(),
        );
        let query = query(&url);
        assert_eq!(query.get("username").map(String::as_str), Some(" user "));
        assert_eq!(query.get("password").map(String::as_str), Some(" pw "));
    }

    #[test]
    fn credentials_are_embedded_in_endpoint() {
        let url = endpoint();
        let query = query(&url);
        assert_eq!(query.get("username").map(String::as_str), Some("user"));
        assert_eq!(query.get("password").map(String::as_str), Some("p@ss word"));
    }

    #[test]
    fn send_url_layers_recipient_and_message_over_credentials() {
        let base = endpoint();
        let req = SendSms::new(Mobile::new("0912345678"), "Hi ", "there");

        let url = encode_send_sms_url(&base, &req);
        let query = query(&url);
        assert_eq!(query.len(), 4);
        assert_eq!(query.get("mobile").map(String::as_str), Some("0912345678"));
        assert_eq!(query.get("message").map(String::as_str), Some("Hi there"));
        assert_eq!(query.get("username").map(String::as_str), Some("user"));

        assert!(!base.as_str().contains("mobile="));
    }

    #[test]
    fn send_url_overwrites_existing_values() {
        let mut base = endpoint();
        base.query_pairs_mut().append_pair("mobile", "stale");
        let req = SendSms::new(Mobile::new("0900000000"), "", "x");

        let url = encode_send_sms_url(&base, &req);
        let mobiles = url
            .query_pairs()
            .filter(|(k, _)| k == "mobile")
            .map(|(_, v)| v.into_owned())
            .collect::<Vec<_>>();
        assert_eq!(mobiles, vec!["0900000000".to_owned()]);
    }

    #[test]
    fn query_values_survive_escaping() {
        let text = "a b&c=d+e%f 測試 ✓";
        let req = SendSms::new(Mobile::new("+886 912&345"), "", text);
        let url = encode_send_sms_url(&endpoint(), &req);

        let raw_query = url.query().unwrap();
        assert!(!raw_query.contains(' '));
        assert!(!raw_query.contains("c=d"));

        let query = query(&url);
        assert_eq!(query.get("message").map(String::as_str), Some(text));
        assert_eq!(query.get("mobile").map(String::as_str), Some("+886 912&345"));
        assert_eq!(query.get("password").map(String::as_str), Some("p@ss word"));
    }

    #[test]
    fn decode_success_response() {
        let json = r#"{"code":"00000","text":"Success","msgid":314159265}"#;
        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(resp.code, ProviderCode::new(0));
        assert_eq!(resp.text, "Success");
        assert_eq!(resp.msg_id, MessageId::new(314_159_265));
    }

    #[test]
    fn decode_tolerates_missing_msgid_on_error() {
        let json = r#"{"code":"00010","text":"Account or password error"}"#;
        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(resp.code.as_i64(), 10);
        assert_eq!(resp.msg_id.as_i64(), 0);
    }

    #[test]
    fn decode_rejects_non_numeric_code() {
        let json = r#"{"code":"oops","text":"?","msgid":0}"#;
        let err = decode_send_sms_json_response(json).unwrap_err();
        assert!(matches!(err, TransportError::InvalidCode { ref code, .. } if code == "oops"));
    }

    #[test]
    fn decode_treats_null_msgid_as_zero() {
        let json = r#"{"code":"00011","text":"Insufficient points","msgid":null}"#;
        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(resp.code.as_i64(), 11);
        assert_eq!(resp.msg_id, MessageId::new(0));
    }

    #[test]
    fn decode_rejects_padded_code() {
        for code in [" 999", "0 ", "1 0"] {
            let json = format!(r#"{{"code":"{code}","text":"?","msgid":0}}"#);
            let err = decode_send_sms_json_response(&json).unwrap_err();
            assert!(
                matches!(err, TransportError::InvalidCode { .. }),
                "code {code:?}: {err:?}"
            );
        }
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_send_sms_json_response("<html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}

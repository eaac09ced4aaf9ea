//! Transport layer: HTTP and wire-format details (query encoding/JSON decoding).

mod send_sms;

pub use send_sms::{decode_send_sms_json_response, encode_credentials, encode_send_sms_url};

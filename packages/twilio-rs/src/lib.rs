// https://www.twilio.com/docs/messaging/guides/webhook-request

use std::collections::HashMap;

pub mod models;

pub use crate::models::{InboundMessage, MediaItem};

/// Twilio delivers at most 10 media attachments per MMS.
pub const MAX_MEDIA_ITEMS: usize = 10;

/// Fixed TwiML acknowledgment body. Sending an empty `<Response>` tells
/// Twilio the message was received and no reply should go out.
pub const ACK_TWIML: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><Response></Response>"#;

impl InboundMessage {
    /// Build an inbound message from the form-encoded webhook parameters.
    ///
    /// Missing `From`/`Body` fields become empty strings and a missing or
    /// unparseable `NumMedia` means no media; the webhook never rejects a
    /// payload for shape.
    pub fn from_form(params: &HashMap<String, String>) -> Self {
        let from = params.get("From").cloned().unwrap_or_default();
        let body = params.get("Body").cloned().unwrap_or_default();

        let num_media = params
            .get("NumMedia")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .unwrap_or(0)
            .min(MAX_MEDIA_ITEMS);

        let media = (0..num_media)
            .filter_map(|i| {
                let url = params.get(&format!("MediaUrl{}", i))?;
                Some(MediaItem {
                    url: url.clone(),
                    content_type: params.get(&format!("MediaContentType{}", i)).cloned(),
                })
            })
            .collect();

        Self { from, body, media }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_sms() {
        let message = InboundMessage::from_form(&params(&[
            ("From", "+16125550100"),
            ("Body", "idea: build a widget"),
            ("NumMedia", "0"),
        ]));

        assert_eq!(message.from, "+16125550100");
        assert_eq!(message.body, "idea: build a widget");
        assert!(!message.has_media());
    }

    #[test]
    fn test_mms_collects_numbered_media() {
        let message = InboundMessage::from_form(&params(&[
            ("From", "+16125550100"),
            ("Body", ""),
            ("NumMedia", "2"),
            ("MediaUrl0", "https://api.twilio.com/media/0"),
            ("MediaContentType0", "image/jpeg"),
            ("MediaUrl1", "https://api.twilio.com/media/1"),
            ("MediaContentType1", "image/png"),
        ]));

        assert_eq!(message.media.len(), 2);
        assert_eq!(message.media[0].url, "https://api.twilio.com/media/0");
        assert_eq!(message.media[0].content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(message.media[1].url, "https://api.twilio.com/media/1");
        assert!(message.has_media());
    }

    #[test]
    fn test_num_media_capped() {
        let mut pairs = vec![("NumMedia".to_string(), "25".to_string())];
        for i in 0..25 {
            pairs.push((format!("MediaUrl{}", i), format!("https://m/{}", i)));
        }
        let map: HashMap<String, String> = pairs.into_iter().collect();

        let message = InboundMessage::from_form(&map);
        assert_eq!(message.media.len(), MAX_MEDIA_ITEMS);
    }

    #[test]
    fn test_missing_fields_default() {
        let message = InboundMessage::from_form(&HashMap::new());

        assert_eq!(message.from, "");
        assert_eq!(message.body, "");
        assert!(message.media.is_empty());
    }

    #[test]
    fn test_garbage_num_media_means_none() {
        let message = InboundMessage::from_form(&params(&[
            ("Body", "hello"),
            ("NumMedia", "lots"),
            ("MediaUrl0", "https://api.twilio.com/media/0"),
        ]));

        assert!(message.media.is_empty());
    }

    #[test]
    fn test_ack_is_empty_response() {
        assert!(ACK_TWIML.contains("<Response></Response>"));
    }
}

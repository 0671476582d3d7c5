use serde::{Deserialize, Serialize};

/// One MMS attachment from the numbered MediaUrlN/MediaContentTypeN fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub content_type: Option<String>,
}

/// An inbound SMS/MMS message as delivered by the Twilio webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    pub from: String,
    pub body: String,
    pub media: Vec<MediaItem>,
}

impl InboundMessage {
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }
}

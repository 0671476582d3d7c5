//! Twilio inbound webhook handler.
//!
//! Logs every message as an ingestion event, classifies it, and writes the
//! matching record. The TwiML acknowledgment body never changes; an internal
//! failure only flips the status code to 500. The sender sees no error
//! detail either way.

use std::collections::HashMap;

use axum::extract::{Extension, Form};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use twilio::{InboundMessage, ACK_TWIML};

use crate::domains::ideas::Idea;
use crate::domains::people::{CreatePerson, Person};
use crate::domains::tools::{CreateTool, Tool};
use crate::server::app::AppState;

use super::classifier::{classify, MessageKind};
use super::extractor::{extract_idea, extract_person, extract_tool};
use super::models::IngestionEvent;

/// Handle an inbound SMS/MMS from Twilio.
pub async fn handle_inbound_sms(
    Extension(state): Extension<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> Response {
    let message = InboundMessage::from_form(&params);

    match process_inbound(&state, &message).await {
        Ok(kind) => {
            tracing::info!(
                from = %message.from,
                kind = kind.as_str(),
                media = message.media.len(),
                "Inbound message captured"
            );
            twiml_ack(StatusCode::OK)
        }
        Err(e) => {
            tracing::error!(
                from = %message.from,
                error = %e,
                "Failed to process inbound message"
            );
            twiml_ack(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Log the event, classify, and attempt one typed insert.
async fn process_inbound(
    state: &AppState,
    message: &InboundMessage,
) -> anyhow::Result<MessageKind> {
    let pool = &state.db_pool;

    // The raw event is written before classification so nothing is lost
    IngestionEvent::create(&message.from, &message.body, &message.media, pool).await?;

    let kind = classify(&message.body, message.has_media());
    match kind {
        MessageKind::Idea => {
            let draft = extract_idea(&message.body);
            Idea::create(&draft.title, draft.summary.as_deref(), pool).await?;
        }
        MessageKind::Person => {
            let draft = extract_person(&message.body);
            Person::create(
                CreatePerson {
                    name: draft.name,
                    phone: draft.phone,
                    email: draft.email,
                    company: draft.company,
                    role: draft.role,
                    school: None,
                    location: draft.location,
                },
                pool,
            )
            .await?;
        }
        MessageKind::Tool => {
            let draft = extract_tool(&message.body);
            Tool::create(
                CreateTool {
                    name: draft.name,
                    url: draft.url,
                    category: None,
                    description: draft.description,
                },
                pool,
            )
            .await?;
        }
        MessageKind::Unknown => {
            tracing::debug!(from = %message.from, "No recognized prefix, event logged only");
        }
    }

    Ok(kind)
}

fn twiml_ack(status: StatusCode) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/xml")],
        ACK_TWIML,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_body_is_constant() {
        // Success and failure differ only in status code
        let ok = twiml_ack(StatusCode::OK);
        let failed = twiml_ack(StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ok.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
        assert_eq!(
            failed.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
    }
}

//! The engine's outgoing response, as handed to the adapter for commit.
//!
//! # Responsibilities
//! - Carry status, optional reason phrase and optional entity
//! - Classify error statuses and supply canonical reason phrases
//!
//! # Design Decisions
//! - Reason phrases fall back to the IANA canonical phrase for the code;
//!   codes outside the table commit with an empty phrase rather than a
//!   fabricated one

use std::fmt;

use bytes::Bytes;
use http::StatusCode;
use tokio::io::AsyncRead;

/// Whether a status code is an error (4xx or 5xx).
pub fn is_error_status(status: u16) -> bool {
    (400..=599).contains(&status)
}

/// Canonical reason phrase for a status code, empty when unknown.
pub fn default_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}

/// Payload of an outgoing entity.
pub enum ResponseBody {
    /// A fully materialized payload.
    Bytes(Bytes),
    /// A streamed payload with an optionally known length.
    Stream {
        /// Source of the payload bytes.
        reader: Box<dyn AsyncRead + Send + Unpin>,
        /// Payload length in bytes, when known up front.
        length: Option<u64>,
    },
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Bytes(data) => f.debug_tuple("Bytes").field(&data.len()).finish(),
            ResponseBody::Stream { length, .. } => {
                f.debug_struct("Stream").field("length", length).finish()
            }
        }
    }
}

/// An outgoing entity: payload plus its declared media type.
#[derive(Debug)]
pub struct ResponseEntity {
    /// Declared media type, if any.
    pub media_type: Option<String>,
    /// The payload itself.
    pub body: ResponseBody,
}

impl ResponseEntity {
    /// Entity over a materialized payload.
    pub fn from_bytes(data: impl Into<Bytes>, media_type: Option<String>) -> Self {
        Self {
            media_type,
            body: ResponseBody::Bytes(data.into()),
        }
    }

    /// Entity over a streamed payload.
    pub fn from_stream(
        reader: Box<dyn AsyncRead + Send + Unpin>,
        length: Option<u64>,
        media_type: Option<String>,
    ) -> Self {
        Self {
            media_type,
            body: ResponseBody::Stream { reader, length },
        }
    }

    /// Payload length in bytes, when known.
    pub fn length(&self) -> Option<u64> {
        match &self.body {
            ResponseBody::Bytes(data) => Some(data.len() as u64),
            ResponseBody::Stream { length, .. } => *length,
        }
    }
}

/// The embedded engine's outgoing response.
#[derive(Debug)]
pub struct EngineResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase override; canonical phrase applies when absent.
    pub reason: Option<String>,
    /// Response entity, if the engine produced one.
    pub entity: Option<ResponseEntity>,
}

impl EngineResponse {
    /// Response with the given status, no reason override and no entity.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            reason: None,
            entity: None,
        }
    }

    /// Attach a reason phrase override.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach an entity.
    pub fn with_entity(mut self, entity: ResponseEntity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// The reason phrase that would be committed for this response.
    pub fn reason_phrase(&self) -> &str {
        match &self.reason {
            Some(reason) => reason,
            None => default_reason(self.status),
        }
    }

    /// Whether the status is an error status.
    pub fn is_error(&self) -> bool {
        is_error_status(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_bounds() {
        assert!(!is_error_status(200));
        assert!(!is_error_status(302));
        assert!(is_error_status(400));
        assert!(is_error_status(404));
        assert!(is_error_status(599));
        assert!(!is_error_status(600));
    }

    #[test]
    fn canonical_reason_phrases() {
        assert_eq!(default_reason(404), "Not Found");
        assert_eq!(default_reason(200), "OK");
        // Valid but unregistered code: empty phrase, not an invented one.
        assert_eq!(default_reason(599), "");
    }

    #[test]
    fn reason_override_wins() {
        let response = EngineResponse::new(404).with_reason("Nope");
        assert_eq!(response.reason_phrase(), "Nope");

        let response = EngineResponse::new(404);
        assert_eq!(response.reason_phrase(), "Not Found");
    }

    #[test]
    fn entity_length_known_for_bytes() {
        let entity = ResponseEntity::from_bytes(&b"hello"[..], None);
        assert_eq!(entity.length(), Some(5));

        let entity = ResponseEntity::from_stream(Box::new(&b"abc"[..]), None, None);
        assert_eq!(entity.length(), None);
    }
}

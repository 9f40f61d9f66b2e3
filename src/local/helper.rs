//! Local-resource dispatch for the `war` scheme.
//!
//! # Responsibilities
//! - Validate that a request really targets the local-resource scheme
//! - Turn resolver hits and misses into engine responses
//!
//! # Design Decisions
//! - Wrong schemes are a caller/configuration bug: rejected immediately,
//!   before the resolver is ever consulted
//! - `war:` URIs carry no authority (`war:///path/to/entry.txt`); paths are
//!   relative to the deployment context root

use http::StatusCode;
use tracing::debug;
use url::Url;

use crate::call::response::{EngineResponse, ResponseEntity};
use crate::error::BridgeError;
use crate::local::resolver::LocalEntityResolver;

/// URI scheme token for context-relative bundled resources.
pub const LOCAL_SCHEME: &str = "war";

/// Dispatches `war:` requests to a [`LocalEntityResolver`].
#[derive(Debug)]
pub struct LocalProtocolHelper {
    resolver: LocalEntityResolver,
}

impl LocalProtocolHelper {
    /// Helper over the given resolver.
    pub fn new(resolver: LocalEntityResolver) -> Self {
        Self { resolver }
    }

    /// The resolver this helper dispatches to.
    pub fn resolver(&self) -> &LocalEntityResolver {
        &self.resolver
    }

    /// Serve a local-resource request.
    ///
    /// The URI's scheme must equal `war` case-insensitively; anything else
    /// fails with [`BridgeError::UnsupportedScheme`] before any resolution.
    /// Hits stream the entity back with its inferred media type; misses are
    /// `404` responses, not errors.
    pub async fn dispatch(
        &self,
        uri: &Url,
        decoded_path: &str,
    ) -> Result<EngineResponse, BridgeError> {
        let scheme = uri.scheme();
        if !scheme.eq_ignore_ascii_case(LOCAL_SCHEME) {
            return Err(BridgeError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }

        match self.resolver.resolve(decoded_path).await {
            Some(entity) => {
                let file = entity.open().await?;
                let payload = ResponseEntity::from_stream(
                    Box::new(file),
                    Some(entity.size()),
                    Some(entity.media_type().to_string()),
                );
                Ok(EngineResponse::new(StatusCode::OK.as_u16()).with_entity(payload))
            }
            None => {
                debug!(path = decoded_path, "no local entity to serve");
                Ok(EngineResponse::new(StatusCode::NOT_FOUND.as_u16()))
            }
        }
    }
}

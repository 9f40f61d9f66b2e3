//! The HTTP call adapter.
//!
//! # Responsibilities
//! - Extract method, URI, headers, entity and transport metadata from the
//!   host request, lazily and without re-encoding
//! - Commit the engine's response onto the host response in the one order
//!   containers tolerate
//!
//! # Design Decisions
//! - One adapter instance per in-flight transaction; host handles are plain
//!   borrows, never owned
//! - Inbound headers are computed at most once (`OnceLock` memo)
//! - Every ordering rule lives in the commit routine, nowhere else

use std::sync::OnceLock;

use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::call::response::{
    default_reason, is_error_status, EngineResponse, ResponseBody, ResponseEntity,
};
use crate::call::tls::TransportSecurity;
use crate::error::BridgeError;
use crate::host::{HostRequest, HostResponse};
use crate::http::entity::{
    is_form_media_type, parse_language_tags, EntityStream, FormEntity, RequestEntity,
};
use crate::http::headers::{Header, HeaderSeries};
use crate::http::names;
use crate::io::guard::{GuardedReader, GuardedWriter};

/// How an outgoing response gets committed, decided once per response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPlan {
    /// Error status and no entity: staged headers minus Content-Length, then
    /// the host's error-send primitive.
    ErrorWithoutBody,
    /// Status first, staged headers with Content-Length deferred to last,
    /// then the entity bytes.
    Normal,
}

impl CommitPlan {
    /// Select the branch for a status/entity combination.
    pub fn select(status: u16, has_entity: bool) -> Self {
        if is_error_status(status) && !has_entity {
            CommitPlan::ErrorWithoutBody
        } else {
            CommitPlan::Normal
        }
    }
}

/// Adapter translating one container-managed HTTP transaction for the
/// embedded engine.
///
/// The adapter borrows the host's request/response handles for the lifetime
/// of the transaction. It performs no lifecycle management over them:
/// acquiring and releasing the underlying connection is entirely the
/// container's business.
pub struct HttpCallAdapter<'t, Req, Res> {
    request: &'t mut Req,
    response: &'t mut Res,
    request_headers: OnceLock<HeaderSeries>,
    response_headers: HeaderSeries,
    status: u16,
    reason: Option<String>,
}

impl<'t, Req, Res> HttpCallAdapter<'t, Req, Res>
where
    Req: HostRequest,
    Res: HostResponse,
{
    /// Wrap a request/response pair for one transaction.
    pub fn new(request: &'t mut Req, response: &'t mut Res) -> Self {
        Self {
            request,
            response,
            request_headers: OnceLock::new(),
            response_headers: HeaderSeries::new(),
            status: 200,
            reason: None,
        }
    }

    /// Request method token, verbatim from the host.
    ///
    /// No validation happens here; unsupported methods are the engine's
    /// concern.
    pub fn method(&self) -> &str {
        self.request.method()
    }

    /// Request URI: path plus `?query` when a non-empty query is present,
    /// exactly as presented by the host.
    pub fn request_uri(&self) -> String {
        let path = self.request.uri_path();
        match self.request.query_string() {
            Some(query) if !query.is_empty() => format!("{path}?{query}"),
            _ => path.to_string(),
        }
    }

    /// Inbound headers, extracted on first access and cached.
    ///
    /// Enumerates every header name the host exposes and every value under
    /// each name, preserving host-reported order. Hosts exposing no headers
    /// yield an empty series.
    pub fn request_headers(&self) -> &HeaderSeries {
        self.request_headers.get_or_init(|| {
            let mut series = HeaderSeries::new();
            for name in self.request.header_names() {
                for value in self.request.header_values(&name) {
                    series.add(name.clone(), value);
                }
            }
            series
        })
    }

    /// Declared request content length, if present and well-formed.
    pub fn content_length(&self) -> Option<u64> {
        self.request_headers()
            .first_value(names::CONTENT_LENGTH)?
            .trim()
            .parse()
            .ok()
    }

    /// The request entity, resolved once from the declared content type.
    ///
    /// Url-encoded bodies are materialized from the container's parsed
    /// parameter map: the container may already have consumed the raw body
    /// to parse it, so re-reading the stream would be unsafe. Any
    /// `Content-Language` header is attached to the form as language tags.
    /// Everything else falls back to the stream path; `None` means the host
    /// has no entity to give.
    pub fn request_entity(&mut self) -> Option<RequestEntity<&mut Req::Body>> {
        let content_type = self.request.content_type();
        if content_type.as_deref().is_some_and(is_form_media_type) {
            let languages = self
                .request_headers()
                .first_value(names::CONTENT_LANGUAGE)
                .map(parse_language_tags)
                .unwrap_or_default();

            let mut form = FormEntity::new();
            for (name, values) in self.request.form_parameters() {
                for value in values {
                    form.push(name.clone(), value);
                }
            }
            form.set_languages(languages);
            return Some(RequestEntity::Form(form));
        }

        let size = self.content_length();
        let reader = self.request_entity_stream(size)?;
        Some(RequestEntity::Stream(EntityStream::new(
            reader,
            size,
            content_type,
        )))
    }

    /// Guarded reader over the host's request body stream.
    ///
    /// Returns `None` when the host cannot supply one. A failure to open the
    /// stream is absence, not an error: some containers legitimately have
    /// no body to offer.
    pub fn request_entity_stream(
        &mut self,
        size_hint: Option<u64>,
    ) -> Option<GuardedReader<&mut Req::Body>> {
        match self.request.body() {
            Ok(stream) => Some(GuardedReader::new(stream)),
            Err(error) => {
                debug!(%error, size_hint, "host could not supply a request body stream");
                None
            }
        }
    }

    /// Transport-security attributes, present only for confidential
    /// transactions.
    pub fn transport_security(&self) -> Option<TransportSecurity> {
        if !self.request.is_secure() {
            return None;
        }
        Some(TransportSecurity::from_request(&*self.request))
    }

    /// Whether the transaction was carried over a secure transport.
    pub fn is_confidential(&self) -> bool {
        self.request.is_secure()
    }

    /// Address of the connected client.
    pub fn client_address(&self) -> String {
        self.request.remote_address()
    }

    /// Port of the connected client.
    pub fn client_port(&self) -> u16 {
        self.request.remote_port()
    }

    /// Local address the request arrived on.
    pub fn server_address(&self) -> String {
        self.request.local_address()
    }

    /// Server (virtual-host) domain name.
    pub fn host_domain(&self) -> String {
        self.request.server_name()
    }

    /// Server port for this request.
    pub fn server_port(&self) -> u16 {
        self.request.server_port()
    }

    /// URI scheme the request arrived under.
    pub fn scheme(&self) -> &str {
        self.request.scheme()
    }

    /// Protocol version: the text after `/` in the host's protocol token.
    pub fn version(&self) -> Option<&str> {
        self.request
            .protocol()
            .split_once('/')
            .map(|(_, version)| version)
    }

    /// Authenticated principal name, if the container established one.
    pub fn user_principal(&self) -> Option<String> {
        self.request.user_principal()
    }

    /// Aborting is not supported: the container owns the connection.
    /// Always returns `false`.
    pub fn abort(&mut self) -> bool {
        false
    }

    /// Flush container-side response buffers.
    pub async fn flush(&mut self) -> Result<(), BridgeError> {
        self.response.flush().await?;
        Ok(())
    }

    /// Headers staged for the outgoing response.
    pub fn response_headers(&self) -> &HeaderSeries {
        &self.response_headers
    }

    /// Mutable access to the staged outgoing headers.
    pub fn response_headers_mut(&mut self) -> &mut HeaderSeries {
        &mut self.response_headers
    }

    /// Stage `Content-Type`/`Content-Length` for an entity about to be sent.
    pub fn stage_entity_headers(&mut self, entity: &ResponseEntity) {
        if let Some(media_type) = &entity.media_type {
            self.response_headers
                .add(names::CONTENT_TYPE, media_type.clone());
        }
        if let Some(length) = entity.length() {
            self.response_headers
                .add(names::CONTENT_LENGTH, length.to_string());
        }
    }

    /// Status code resolved for commit.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase resolved for commit; canonical phrase when no override
    /// was supplied.
    pub fn reason_phrase(&self) -> &str {
        match &self.reason {
            Some(reason) => reason,
            None => default_reason(self.status),
        }
    }

    /// Commit the engine's response onto the host response.
    ///
    /// Selects a [`CommitPlan`] once and follows its ordering rules to the
    /// letter. Transport failures on the normal branch propagate and are
    /// never retried; failures while committing an error response are logged
    /// and swallowed, since the host has likely already terminated the
    /// exchange.
    pub async fn commit(&mut self, response: EngineResponse) -> Result<(), BridgeError> {
        let EngineResponse {
            status,
            reason,
            entity,
        } = response;
        self.status = status;
        self.reason = reason;

        match CommitPlan::select(status, entity.is_some()) {
            CommitPlan::ErrorWithoutBody => {
                self.commit_error().await;
                Ok(())
            }
            CommitPlan::Normal => self.commit_normal(entity).await,
        }
    }

    async fn commit_error(&mut self) {
        // Content-Length is suppressed here: some containers finalize the
        // response as soon as the error primitive runs, and a stale length
        // would corrupt the framing they emit.
        for header in &self.response_headers {
            if !header.name_matches(names::CONTENT_LENGTH) {
                self.response.add_header(&header.name, &header.value);
            }
        }

        let status = self.status;
        let reason = self.reason_phrase().to_string();
        if let Err(error) = self.response.send_error(status, &reason).await {
            warn!(status, %error, "unable to commit the error response");
        }
    }

    async fn commit_normal(&mut self, entity: Option<ResponseEntity>) -> Result<(), BridgeError> {
        // Status goes on first. Headers follow, except Content-Length, which
        // is deferred to the very end: some containers start streaming the
        // moment they observe a zero-valued Content-Length.
        self.response.set_status(self.status);

        let mut content_length: Option<Header> = None;
        for header in &self.response_headers {
            if header.name_matches(names::CONTENT_LENGTH) {
                content_length = Some(header.clone());
            } else {
                self.response.add_header(&header.name, &header.value);
            }
        }
        if let Some(header) = content_length {
            self.response.add_header(&header.name, &header.value);
        }

        self.send_entity(entity).await
    }

    async fn send_entity(&mut self, entity: Option<ResponseEntity>) -> Result<(), BridgeError> {
        if let Some(entity) = entity {
            let stream = self.response.body()?;
            let mut writer = GuardedWriter::new(stream);
            match entity.body {
                ResponseBody::Bytes(data) => writer.write_all(&data).await?,
                ResponseBody::Stream { mut reader, .. } => {
                    tokio::io::copy(&mut reader, &mut writer).await?;
                }
            }
        }
        self.response.flush().await?;
        Ok(())
    }
}

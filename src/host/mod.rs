//! The host-container boundary.
//!
//! # Responsibilities
//! - Define what the adapter needs from a container-managed request/response
//! - Give transport-security metadata a typed attribute-bag lookup
//! - Name the attribute keys once, fallbacks included
//!
//! # Design Decisions
//! - Traits only: the container's request/response lifecycle, connection
//!   management and I/O transport stay on the container's side of the line
//! - Attribute lookups return typed values instead of scattering string
//!   literals and downcasts through the adapter
//! - The legacy session-id key is an ordered fallback entry, not a branch

use std::io;

use tokio::io::{AsyncRead, AsyncWrite};

/// A value held in the host's named attribute bag.
///
/// Containers attach transport metadata to requests under well-known names;
/// the concrete value shape depends on the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A textual attribute (cipher suite, session id).
    Text(String),
    /// A numeric attribute (negotiated key size).
    Number(u64),
    /// A certificate chain as DER-encoded blobs, leaf first.
    Certificates(Vec<Vec<u8>>),
}

impl AttributeValue {
    /// The text payload, if this is a textual attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a numeric attribute.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The certificate chain, if this is a certificate attribute.
    pub fn as_certificates(&self) -> Option<&[Vec<u8>]> {
        match self {
            AttributeValue::Certificates(chain) => Some(chain),
            _ => None,
        }
    }
}

/// Well-known attribute names for transport-security metadata.
pub mod attrs {
    /// Peer certificate chain negotiated on a confidential transport.
    pub const PEER_CERTIFICATES: &str = "transport.peer_certificates";

    /// Negotiated cipher suite name.
    pub const CIPHER_SUITE: &str = "transport.cipher_suite";

    /// Negotiated key size in bits.
    pub const KEY_SIZE: &str = "transport.key_size";

    /// TLS session identifier, standard key.
    pub const SESSION_ID: &str = "transport.session_id";

    /// TLS session identifier under the non-standard key some older
    /// containers still write.
    pub const SESSION_ID_LEGACY: &str = "transport.ssl_session";

    /// Session-id keys in lookup order; the first present value wins.
    pub const SESSION_ID_KEYS: [&str; 2] = [SESSION_ID, SESSION_ID_LEGACY];
}

/// An inbound HTTP request as exposed by the host container.
///
/// One instance describes exactly one in-flight transaction. The adapter
/// borrows it for the transaction's duration and never manages its lifecycle.
pub trait HostRequest {
    /// Body byte stream supplied by the container.
    type Body: AsyncRead + Unpin;

    /// Request method token, verbatim.
    fn method(&self) -> &str;

    /// URI scheme the request arrived under (`http`, `https`, ...).
    fn scheme(&self) -> &str;

    /// URI path, as presented by the host (no re-encoding).
    fn uri_path(&self) -> &str;

    /// Raw query string, if one was present.
    fn query_string(&self) -> Option<&str>;

    /// Protocol token formatted as `NAME/VERSION`, e.g. `HTTP/1.1`.
    fn protocol(&self) -> &str;

    /// Address of the connected peer.
    fn remote_address(&self) -> String;

    /// Port of the connected peer.
    fn remote_port(&self) -> u16;

    /// Local address the request arrived on.
    fn local_address(&self) -> String;

    /// Server (virtual-host) name for this request.
    fn server_name(&self) -> String;

    /// Server port for this request.
    fn server_port(&self) -> u16;

    /// Every header name the host exposes, in host-reported order.
    fn header_names(&self) -> Vec<String>;

    /// Every value under `name`, in host-reported order.
    fn header_values(&self, name: &str) -> Vec<String>;

    /// Declared content type of the body, if any.
    fn content_type(&self) -> Option<String>;

    /// The container-parsed form parameter map, in container order.
    ///
    /// Values preserve submission order per name. Only meaningful for
    /// url-encoded bodies; containers that parsed the parameters may already
    /// have consumed the raw body stream.
    fn form_parameters(&self) -> Vec<(String, Vec<String>)>;

    /// Borrow the request body stream.
    ///
    /// An error here means the container cannot supply a body for this
    /// transaction; callers treat that as absence.
    fn body(&mut self) -> io::Result<&mut Self::Body>;

    /// Whether the transaction was carried over a secure transport.
    fn is_secure(&self) -> bool;

    /// Authenticated principal name, if the container established one.
    fn user_principal(&self) -> Option<String>;

    /// Look up a named attribute from the host's attribute bag.
    fn attribute(&self, name: &str) -> Option<AttributeValue>;
}

/// An outbound HTTP response as exposed by the host container.
pub trait HostResponse {
    /// Body byte stream supplied by the container.
    type Body: AsyncWrite + Unpin;

    /// Set the numeric status code.
    fn set_status(&mut self, status: u16);

    /// Add a header; repeatable for duplicate names.
    fn add_header(&mut self, name: &str, value: &str);

    /// The container's dedicated error-send primitive.
    ///
    /// Containers are expected to commit the response when this is invoked;
    /// nothing may be written through [`Self::body`] afterwards.
    fn send_error(
        &mut self,
        status: u16,
        reason: &str,
    ) -> impl std::future::Future<Output = io::Result<()>> + Send;

    /// Borrow the response body stream.
    fn body(&mut self) -> io::Result<&mut Self::Body>;

    /// Flush container-side buffers.
    fn flush(&mut self) -> impl std::future::Future<Output = io::Result<()>> + Send;
}

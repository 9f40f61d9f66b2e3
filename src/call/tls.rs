//! Transport-security attributes of a confidential transaction.
//!
//! # Responsibilities
//! - Collect TLS metadata from the host's attribute bag
//! - Apply the ordered session-id key fallback
//!
//! # Design Decisions
//! - Extraction works against a plain lookup function, so any attribute
//!   source (host request, test double) plugs in
//! - A value under the wrong type is treated as absent, which also lets the
//!   legacy session-id key take over when the standard one is malformed

use crate::host::{attrs, AttributeValue, HostRequest};

/// TLS metadata reported by the host for a confidential transaction.
///
/// Every field is optional: containers differ in what they expose, and the
/// absence of an attribute is not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportSecurity {
    /// Peer certificate chain, DER-encoded, leaf first.
    pub certificates: Option<Vec<Vec<u8>>>,
    /// Negotiated cipher suite name.
    pub cipher_suite: Option<String>,
    /// Negotiated key size in bits.
    pub key_size: Option<u64>,
    /// TLS session identifier.
    pub session_id: Option<String>,
}

impl TransportSecurity {
    /// Collect transport metadata through an attribute lookup.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<AttributeValue>) -> Self {
        let certificates = lookup(attrs::PEER_CERTIFICATES)
            .and_then(|value| value.as_certificates().map(<[_]>::to_vec));

        let cipher_suite =
            lookup(attrs::CIPHER_SUITE).and_then(|value| value.as_text().map(str::to_string));

        let key_size = lookup(attrs::KEY_SIZE).and_then(|value| value.as_number());

        // First present value wins; the standard key is authoritative.
        let session_id = attrs::SESSION_ID_KEYS
            .iter()
            .find_map(|key| lookup(key).and_then(|value| value.as_text().map(str::to_string)));

        Self {
            certificates,
            cipher_suite,
            key_size,
            session_id,
        }
    }

    /// Collect transport metadata from a host request.
    pub fn from_request<R: HostRequest>(request: &R) -> Self {
        Self::from_attributes(|name| request.attribute(name))
    }
}

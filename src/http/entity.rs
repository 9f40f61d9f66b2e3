//! Request entity representations.
//!
//! # Responsibilities
//! - Model the two ways an inbound entity can surface: a form materialized
//!   from the container's parameter map, or the raw body stream
//! - Parse Content-Language values into language tags
//!
//! # Design Decisions
//! - The form/stream decision is a tagged union resolved once per request
//!   from the declared content type, not runtime type inspection
//! - A container that parsed form parameters may already have drained the
//!   body, so the parameter map is the only reliable source on that path

use url::form_urlencoded;

use crate::io::guard::GuardedReader;

/// Media type of url-encoded form bodies.
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Check whether a declared content type denotes a url-encoded form,
/// ignoring parameters such as `charset`.
pub fn is_form_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .eq_ignore_ascii_case(FORM_MEDIA_TYPE)
}

/// Parse a `Content-Language` header value into language tags.
///
/// Splits on commas, drops quality parameters and empty items, preserves
/// order and spelling.
pub fn parse_language_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.split(';').next().unwrap_or("").trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A form entity materialized from the container's parameter map.
///
/// Pairs keep the container's order and exact multiplicity; nothing is
/// deduplicated or re-parsed from the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEntity {
    pairs: Vec<(String, String)>,
    languages: Vec<String>,
}

impl FormEntity {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name/value pair.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// All pairs, in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value of the first pair under `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the form holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Language tags attached from the request's `Content-Language` header.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Replace the attached language tags.
    pub fn set_languages(&mut self, languages: Vec<String>) {
        self.languages = languages;
    }

    /// The fixed media type of a materialized form.
    pub fn media_type(&self) -> &'static str {
        FORM_MEDIA_TYPE
    }

    /// Re-serialize the pairs as a url-encoded body.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// A stream-backed entity: the guarded request body plus its declared
/// metadata.
#[derive(Debug)]
pub struct EntityStream<S> {
    reader: GuardedReader<S>,
    size: Option<u64>,
    media_type: Option<String>,
}

impl<S> EntityStream<S> {
    /// Create a stream entity.
    pub fn new(reader: GuardedReader<S>, size: Option<u64>, media_type: Option<String>) -> Self {
        Self {
            reader,
            size,
            media_type,
        }
    }

    /// Declared size in bytes, when the request carried a Content-Length.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Declared media type, if any.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Mutable access to the guarded reader.
    pub fn reader(&mut self) -> &mut GuardedReader<S> {
        &mut self.reader
    }

    /// Unwrap into the guarded reader.
    pub fn into_reader(self) -> GuardedReader<S> {
        self.reader
    }
}

/// An inbound request entity, resolved once per request.
#[derive(Debug)]
pub enum RequestEntity<S> {
    /// Materialized from the container's parsed parameter map.
    Form(FormEntity),
    /// Backed by the raw body stream.
    Stream(EntityStream<S>),
}

impl<S> RequestEntity<S> {
    /// The form, if this entity was form-derived.
    pub fn as_form(&self) -> Option<&FormEntity> {
        match self {
            RequestEntity::Form(form) => Some(form),
            RequestEntity::Stream(_) => None,
        }
    }

    /// Check whether this entity was form-derived.
    pub fn is_form(&self) -> bool {
        matches!(self, RequestEntity::Form(_))
    }
}

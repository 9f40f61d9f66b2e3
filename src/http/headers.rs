//! Ordered, case-insensitive HTTP header storage.
//!
//! # Responsibilities
//! - Preserve insertion order, including duplicate names (e.g. Set-Cookie)
//! - Case-insensitive lookup, first match wins
//! - Back both extracted inbound headers and staged outbound headers
//!
//! # Design Decisions
//! - Names keep their original spelling; only comparisons fold case
//! - Never deduplicates: multiplicity is part of the wire contract

use std::slice;

/// A single HTTP header (name-value pair).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name, stored in its original case.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Create a new header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check whether this header matches the given name (case-insensitive).
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An ordered series of HTTP headers.
///
/// Headers are kept in insertion order and looked up case-insensitively.
/// Multiple entries under the same name are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSeries {
    entries: Vec<Header>,
}

impl HeaderSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the series holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a header, preserving order and duplicates.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Header::new(name, value));
    }

    /// First header matching `name` (case-insensitive), if any.
    pub fn get_first(&self, name: &str) -> Option<&Header> {
        self.entries.iter().find(|h| h.name_matches(name))
    }

    /// Value of the first header matching `name` (case-insensitive).
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.get_first(name).map(|h| h.value.as_str())
    }

    /// All values under `name` (case-insensitive), in insertion order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |h| h.name_matches(name))
            .map(|h| h.value.as_str())
    }

    /// Check whether any header matches `name` (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|h| h.name_matches(name))
    }

    /// Iterate over all headers in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Header> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HeaderSeries {
    type Item = &'a Header;
    type IntoIter = slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<(String, String)> for HeaderSeries {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

//! HTTP data model shared by the call adapter and local dispatch.
//!
//! # Data Flow
//! ```text
//! host container request
//!     → headers.rs (ordered, case-insensitive series)
//!     → entity.rs (form-derived or stream-backed entity)
//!     → [call adapter consumes both]
//! ```

pub mod entity;
pub mod headers;

pub use entity::{FormEntity, RequestEntity, FORM_MEDIA_TYPE};
pub use headers::{Header, HeaderSeries};

/// Header names with special handling in this crate.
pub mod names {
    /// Entity length; placement rules apply when committing responses.
    pub const CONTENT_LENGTH: &str = "Content-Length";
    /// Declared entity media type.
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// Entity language tags, attached to materialized forms.
    pub const CONTENT_LANGUAGE: &str = "Content-Language";
}

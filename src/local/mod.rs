//! Local-resource resolution for the `war` scheme.
//!
//! # Data Flow
//! ```text
//! war:///path request
//!     → helper.rs (scheme validation, dispatch)
//!     → resolver.rs (context-root lookup)
//!     → entity.rs (descriptor + readable byte source)
//!     → metadata.rs (media type inference)
//!     → [served through the shared call/response machinery]
//! ```

pub mod entity;
pub mod helper;
pub mod metadata;
pub mod resolver;

pub use entity::LocalEntity;
pub use helper::{LocalProtocolHelper, LOCAL_SCHEME};
pub use metadata::MediaTypeRegistry;
pub use resolver::LocalEntityResolver;

//! Call translation between the host container and the embedded engine.
//!
//! # Data Flow
//! ```text
//! container request/response pair
//!     → adapter.rs (extract method, URI, headers, entity, TLS metadata)
//!     → [embedded engine handles the call]
//!     → response.rs (engine's status, reason, entity)
//!     → adapter.rs commit (order-sensitive write-back onto the container)
//! ```

pub mod adapter;
pub mod response;
pub mod tls;

pub use adapter::{CommitPlan, HttpCallAdapter};
pub use response::{EngineResponse, ResponseBody, ResponseEntity};
pub use tls::TransportSecurity;

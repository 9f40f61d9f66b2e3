//! Bridge between a container-managed HTTP transaction and an embedded
//! HTTP processing engine.
//!
//! The host container owns the network connection and hands over opaque
//! request/response handles; [`HttpCallAdapter`] translates them into a
//! normalized call for the engine and commits the engine's response back,
//! honoring the ordering rules containers are touchy about. The `local`
//! subsystem serves `war:///path` resources bundled with the deployment,
//! without any network dispatch.

pub mod call;
pub mod error;
pub mod host;
pub mod http;
pub mod io;
pub mod local;
pub mod observability;

pub use call::{EngineResponse, HttpCallAdapter, ResponseEntity, TransportSecurity};
pub use error::BridgeError;
pub use host::{HostRequest, HostResponse};
pub use self::http::{HeaderSeries, RequestEntity};
pub use local::{LocalEntityResolver, LocalProtocolHelper};

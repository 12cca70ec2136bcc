//! HTTP layer: query building, retrying executor, envelope parsing.

pub mod client;
pub mod envelope;
pub mod query;
pub mod retry;
pub mod transport;

pub use client::TourHttp;
pub use envelope::{normalize_items, parse_envelope, Page};
pub use query::{build_query, Endpoint, QueryDefaults, QueryParams};
pub use retry::RetryConfig;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{RawResponse, Transport};

//! # Tour API SDK
//!
//! A Rust client for the Korea Tourism Organization public data gateway
//! (`KorService2`): region codes, attraction lists, keyword search and
//! per-attraction details.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared value types and domain models (no I/O)
//! 2. **Auth**: Service-key resolution from explicit config or the environment
//! 3. **HTTP API**: `TourHttp` with query building, retrying executor, envelope parsing
//! 4. **High-Level Client**: `TourClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tour_api_sdk::prelude::*;
//!
//! let client = TourClient::builder().build()?;
//!
//! let regions = client.areas().codes(&AreaCodeParams::default()).await?;
//! let seoul = client
//!     .listings()
//!     .area_based(&AreaBasedListParams {
//!         area_code: Some("1".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network and protocol constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Service-key credentials.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policy and pluggable transport.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TourClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Arrange, ContentId, ContentType, Coordinates, YesNo};

    // Domain types: area
    pub use crate::domain::area::{AreaCode, AreaCodeParams};

    // Domain types: listing
    pub use crate::domain::listing::{
        AreaBasedListParams, LocationBasedListParams, SearchKeywordParams, TourItem, TourList,
    };

    // Domain types: detail
    pub use crate::domain::detail::{
        DetailCommonParams, DetailImageParams, DetailIntroParams, DetailPetTourParams,
        PetTourInfo, TourDetail, TourImage, TourIntro,
    };

    // Errors
    pub use crate::error::{ErrorKind, TourApiError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::Credentials;

    // HTTP client + sub-clients
    pub use crate::client::{
        AreasClient, DetailsClient, ListingsClient, TourClient, TourClientBuilder,
    };
    pub use crate::http::{RawResponse, RetryConfig, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}

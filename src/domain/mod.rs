//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and request parameters
//! - `wire.rs`: Raw serde structs matching upstream records
//! - `convert.rs`: `From` conversions from wire records
//! - `client.rs`: Sub-client: validate, apply defaults, fetch, shape

pub mod area;
pub mod detail;
pub mod listing;

use crate::error::TourApiError;
use crate::shared::ContentId;

/// Fail fast on a blank content id, before any request is built.
pub(crate) fn require_content_id(content_id: &ContentId) -> Result<(), TourApiError> {
    if content_id.is_blank() {
        return Err(TourApiError::Validation(
            "contentId is a required parameter".to_string(),
        ));
    }
    Ok(())
}

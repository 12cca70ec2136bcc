//! Areas sub-client: region code lookup.

use crate::client::TourClient;
use crate::domain::area::wire::AreaCodeItem;
use crate::domain::area::{AreaCode, AreaCodeParams};
use crate::error::TourApiError;
use crate::http::Endpoint;

/// Sub-client for area-code operations.
pub struct Areas<'a> {
    pub(crate) client: &'a TourClient,
}

impl<'a> Areas<'a> {
    /// List region codes, or the sub-regions of `params.area_code`.
    pub async fn codes(&self, params: &AreaCodeParams) -> Result<Vec<AreaCode>, TourApiError> {
        let page = self
            .client
            .http
            .fetch::<AreaCodeItem>(Endpoint::AreaCode, &params.to_query())
            .await?;
        Ok(page.items.into_iter().map(AreaCode::from).collect())
    }
}

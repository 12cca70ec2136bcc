//! Listings sub-client: area-based, location-based and keyword lists.

use crate::client::TourClient;
use crate::domain::listing::wire::TourItemResponse;
use crate::domain::listing::{
    AreaBasedListParams, LocationBasedListParams, SearchKeywordParams, TourItem, TourList,
};
use crate::error::TourApiError;
use crate::http::{Endpoint, QueryParams};

/// Sub-client for list operations.
pub struct Listings<'a> {
    pub(crate) client: &'a TourClient,
}

impl<'a> Listings<'a> {
    /// Attractions in a region, optionally filtered by content type.
    pub async fn area_based(&self, params: &AreaBasedListParams) -> Result<TourList, TourApiError> {
        self.list(Endpoint::AreaBasedList, &params.to_query()).await
    }

    /// Attractions within `radius` meters of a point.
    pub async fn location_based(
        &self,
        params: &LocationBasedListParams,
    ) -> Result<TourList, TourApiError> {
        params.validate()?;
        self.list(Endpoint::LocationBasedList, &params.to_query()).await
    }

    /// Keyword search. A blank keyword fails without sending a request.
    pub async fn search(&self, params: &SearchKeywordParams) -> Result<TourList, TourApiError> {
        params.validate()?;
        self.list(Endpoint::SearchKeyword, &params.to_query()).await
    }

    async fn list(&self, endpoint: Endpoint, query: &QueryParams) -> Result<TourList, TourApiError> {
        let page = self
            .client
            .http
            .fetch::<TourItemResponse>(endpoint, query)
            .await?;
        let total_count = page.total_or_len();
        Ok(TourList {
            items: page.items.into_iter().map(TourItem::from).collect(),
            total_count,
        })
    }
}

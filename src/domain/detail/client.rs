//! Details sub-client: per-attraction lookups.

use crate::client::TourClient;
use crate::domain::detail::wire::{
    DetailCommonResponse, DetailImageResponse, DetailIntroResponse, DetailPetTourResponse,
};
use crate::domain::detail::{
    DetailCommonParams, DetailImageParams, DetailIntroParams, DetailPetTourParams, PetTourInfo,
    TourDetail, TourImage, TourIntro,
};
use crate::error::TourApiError;
use crate::http::Endpoint;

/// Sub-client for single-attraction detail operations.
pub struct Details<'a> {
    pub(crate) client: &'a TourClient,
}

impl<'a> Details<'a> {
    /// Common information. An empty result is `NotFound`.
    pub async fn common(&self, params: &DetailCommonParams) -> Result<TourDetail, TourApiError> {
        params.validate()?;
        self.client
            .http
            .fetch::<DetailCommonResponse>(Endpoint::DetailCommon, &params.to_query())
            .await?
            .into_first()
            .map(TourDetail::from)
            .ok_or_else(|| not_found("detail", &params.content_id))
    }

    /// Operating information for the given content type. An empty result is `NotFound`.
    pub async fn intro(&self, params: &DetailIntroParams) -> Result<TourIntro, TourApiError> {
        params.validate()?;
        self.client
            .http
            .fetch::<DetailIntroResponse>(Endpoint::DetailIntro, &params.to_query())
            .await?
            .into_first()
            .map(TourIntro::from)
            .ok_or_else(|| not_found("intro", &params.content_id))
    }

    /// Gallery images. No images is an empty list, not an error.
    pub async fn images(&self, params: &DetailImageParams) -> Result<Vec<TourImage>, TourApiError> {
        params.validate()?;
        let page = self
            .client
            .http
            .fetch::<DetailImageResponse>(Endpoint::DetailImage, &params.to_query())
            .await?;
        Ok(page.items.into_iter().map(TourImage::from).collect())
    }

    /// Pet companion policy, or `None` when the attraction has none on record.
    pub async fn pet(
        &self,
        params: &DetailPetTourParams,
    ) -> Result<Option<PetTourInfo>, TourApiError> {
        params.validate()?;
        let page = self
            .client
            .http
            .fetch::<DetailPetTourResponse>(Endpoint::DetailPetTour, &params.to_query())
            .await?;
        Ok(page.into_first().map(PetTourInfo::from))
    }
}

fn not_found(what: &str, content_id: &crate::shared::ContentId) -> TourApiError {
    TourApiError::NotFound(format!("No {} found for contentId {}", what, content_id))
}

//! Detail domain: common info, operating info, images and pet policy for one attraction.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::require_content_id;
use crate::error::TourApiError;
use crate::http::QueryParams;
use crate::shared::{ContentId, ContentType, Coordinates, YesNo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default page size for image lists.
pub const DEFAULT_IMAGE_ROWS: u32 = 20;

// ─── Records ─────────────────────────────────────────────────────────────────

/// Common information (`detailCommon2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDetail {
    pub content_id: ContentId,
    pub content_type: Option<ContentType>,
    pub title: String,
    pub address: Option<String>,
    pub address_detail: Option<String>,
    pub zipcode: Option<String>,
    pub tel: Option<String>,
    /// Raw homepage field; the upstream usually sends an HTML anchor.
    pub homepage: Option<String>,
    pub overview: Option<String>,
    pub first_image: Option<String>,
    pub first_image_thumbnail: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Operating information (`detailIntro2`).
///
/// Fields differ by content type; the common ones are named and everything else
/// the upstream sent is kept in `other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourIntro {
    pub content_id: ContentId,
    pub content_type: Option<ContentType>,
    pub use_time: Option<String>,
    pub rest_date: Option<String>,
    pub info_center: Option<String>,
    pub parking: Option<String>,
    pub pet_allowed: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub reservation_lodging: Option<String>,
    pub open_time_food: Option<String>,
    pub reservation_food: Option<String>,
    pub first_menu: Option<String>,
    pub treat_menu: Option<String>,
    pub open_period: Option<String>,
    pub reservation: Option<String>,
    pub accom_count: Option<String>,
    pub exp_guide: Option<String>,
    pub exp_age_range: Option<String>,
    pub other: BTreeMap<String, String>,
}

/// One gallery image (`detailImage2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourImage {
    pub content_id: ContentId,
    pub name: Option<String>,
    pub origin_url: Option<String>,
    pub small_url: Option<String>,
    pub serial_num: Option<String>,
    pub copyright_code: Option<String>,
}

/// Pet companion policy (`detailPetTour2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTourInfo {
    pub content_id: ContentId,
    pub content_type: Option<ContentType>,
    pub leash: Option<String>,
    pub size: Option<String>,
    pub place: Option<String>,
    pub fee: Option<String>,
    pub info: Option<String>,
    pub parking: Option<String>,
    pub other: BTreeMap<String, String>,
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Parameters for `detailCommon2`.
///
/// Flags left `None` default to `Y`, except `areacode_yn`/`catcode_yn`, which
/// are only sent when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailCommonParams {
    pub content_id: ContentId,
    pub content_type: Option<ContentType>,
    pub default_yn: Option<YesNo>,
    pub first_image_yn: Option<YesNo>,
    pub areacode_yn: Option<YesNo>,
    pub catcode_yn: Option<YesNo>,
    pub addrinfo_yn: Option<YesNo>,
    pub mapinfo_yn: Option<YesNo>,
    pub overview_yn: Option<YesNo>,
}

impl DetailCommonParams {
    pub fn new(content_id: impl Into<ContentId>) -> Self {
        Self {
            content_id: content_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        require_content_id(&self.content_id)
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        let flag = |value: Option<YesNo>| value.unwrap_or_default().as_code();
        QueryParams::new()
            .with("contentId", self.content_id.as_str().trim())
            .with_opt("contentTypeId", self.content_type.map(|c| c.as_code()))
            .with("defaultYN", flag(self.default_yn))
            .with("firstImageYN", flag(self.first_image_yn))
            .with_opt("areacodeYN", self.areacode_yn.map(|f| f.as_code()))
            .with_opt("catcodeYN", self.catcode_yn.map(|f| f.as_code()))
            .with("addrinfoYN", flag(self.addrinfo_yn))
            .with("mapinfoYN", flag(self.mapinfo_yn))
            .with("overviewYN", flag(self.overview_yn))
    }
}

/// Parameters for `detailIntro2`. Both fields are required upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailIntroParams {
    pub content_id: ContentId,
    pub content_type: ContentType,
}

impl DetailIntroParams {
    pub fn new(content_id: impl Into<ContentId>, content_type: ContentType) -> Self {
        Self {
            content_id: content_id.into(),
            content_type,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        require_content_id(&self.content_id)
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("contentId", self.content_id.as_str().trim())
            .with("contentTypeId", self.content_type.as_code())
    }
}

/// Parameters for `detailImage2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailImageParams {
    pub content_id: ContentId,
    pub image_yn: Option<YesNo>,
    pub sub_image_yn: Option<YesNo>,
    pub num_of_rows: Option<u32>,
    pub page_no: Option<u32>,
}

impl DetailImageParams {
    pub fn new(content_id: impl Into<ContentId>) -> Self {
        Self {
            content_id: content_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        require_content_id(&self.content_id)
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("contentId", self.content_id.as_str().trim())
            .with("imageYN", self.image_yn.unwrap_or_default().as_code())
            .with("subImageYN", self.sub_image_yn.unwrap_or_default().as_code())
            .with(
                "numOfRows",
                self.num_of_rows.filter(|&n| n > 0).unwrap_or(DEFAULT_IMAGE_ROWS),
            )
            .with("pageNo", self.page_no.filter(|&n| n > 0).unwrap_or(1))
    }
}

/// Parameters for `detailPetTour2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPetTourParams {
    pub content_id: ContentId,
}

impl DetailPetTourParams {
    pub fn new(content_id: impl Into<ContentId>) -> Self {
        Self {
            content_id: content_id.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        require_content_id(&self.content_id)
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new().with("contentId", self.content_id.as_str().trim())
    }
}

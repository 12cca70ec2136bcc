//! Listing domain: area-based, location-based and keyword searches.

pub mod client;
mod convert;
pub mod wire;

use crate::error::TourApiError;
use crate::http::QueryParams;
use crate::shared::{Arrange, ContentId, ContentType, Coordinates};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest search radius the upstream accepts, in meters.
pub const MAX_RADIUS_M: u32 = 20_000;

// ─── TourItem ────────────────────────────────────────────────────────────────

/// One attraction in a list result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourItem {
    pub content_id: ContentId,
    pub content_type: Option<ContentType>,
    pub title: String,
    pub address: Option<String>,
    pub address_detail: Option<String>,
    pub area_code: Option<String>,
    pub sigungu_code: Option<String>,
    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub cat3: Option<String>,
    pub first_image: Option<String>,
    pub first_image_thumbnail: Option<String>,
    pub tel: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub created_at: Option<NaiveDateTime>,
    pub modified_at: Option<NaiveDateTime>,
    /// Distance from the search point in meters (location-based lists only).
    pub distance_m: Option<Decimal>,
}

/// A page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourList {
    pub items: Vec<TourItem>,
    /// Upstream total across all pages; the page length when the upstream omits it.
    pub total_count: u32,
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Parameters for `areaBasedList2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaBasedListParams {
    /// Region code; `None` or empty lists every region.
    pub area_code: Option<String>,
    pub sigungu_code: Option<String>,
    pub content_type: Option<ContentType>,
    pub num_of_rows: Option<u32>,
    pub page_no: Option<u32>,
    pub arrange: Option<Arrange>,
}

impl AreaBasedListParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("areaCode", self.area_code.as_deref())
            .with_opt("sigunguCode", self.sigungu_code.as_deref())
            .with_opt("contentTypeId", self.content_type.map(|c| c.as_code()))
            .with_opt("numOfRows", self.num_of_rows)
            .with_opt("pageNo", self.page_no)
            .with_opt("arrange", self.arrange.map(|a| a.as_code()))
    }
}

/// Parameters for `locationBasedList2`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBasedListParams {
    /// Longitude (WGS84).
    pub map_x: Decimal,
    /// Latitude (WGS84).
    pub map_y: Decimal,
    /// Search radius in meters, `1..=20000`.
    pub radius: u32,
    pub content_type: Option<ContentType>,
    pub num_of_rows: Option<u32>,
    pub page_no: Option<u32>,
    pub arrange: Option<Arrange>,
}

impl LocationBasedListParams {
    pub fn new(map_x: Decimal, map_y: Decimal, radius: u32) -> Self {
        Self {
            map_x,
            map_y,
            radius,
            content_type: None,
            num_of_rows: None,
            page_no: None,
            arrange: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        if self.radius == 0 || self.radius > MAX_RADIUS_M {
            return Err(TourApiError::Validation(format!(
                "radius must be between 1 and {} meters, got {}",
                MAX_RADIUS_M, self.radius
            )));
        }
        if self.map_x < Decimal::from(-180) || self.map_x > Decimal::from(180) {
            return Err(TourApiError::Validation(format!(
                "mapX is not a valid longitude: {}",
                self.map_x
            )));
        }
        if self.map_y < Decimal::from(-90) || self.map_y > Decimal::from(90) {
            return Err(TourApiError::Validation(format!(
                "mapY is not a valid latitude: {}",
                self.map_y
            )));
        }
        Ok(())
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("mapX", self.map_x)
            .with("mapY", self.map_y)
            .with("radius", self.radius)
            .with_opt("contentTypeId", self.content_type.map(|c| c.as_code()))
            .with_opt("numOfRows", self.num_of_rows)
            .with_opt("pageNo", self.page_no)
            .with_opt("arrange", self.arrange.map(|a| a.as_code()))
    }
}

/// Parameters for `searchKeyword2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchKeywordParams {
    /// Required; surrounding whitespace is trimmed before sending.
    pub keyword: String,
    pub area_code: Option<String>,
    pub content_type: Option<ContentType>,
    pub num_of_rows: Option<u32>,
    pub page_no: Option<u32>,
    pub arrange: Option<Arrange>,
}

impl SearchKeywordParams {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TourApiError> {
        if self.keyword.trim().is_empty() {
            return Err(TourApiError::Validation(
                "search keyword must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("keyword", self.keyword.trim())
            .with_opt("areaCode", self.area_code.as_deref())
            .with_opt("contentTypeId", self.content_type.map(|c| c.as_code()))
            .with_opt("numOfRows", self.num_of_rows)
            .with_opt("pageNo", self.page_no)
            .with_opt("arrange", self.arrange.map(|a| a.as_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_area_based_empty_area_code_dropped() {
        let params = AreaBasedListParams {
            area_code: Some(String::new()),
            content_type: Some(ContentType::Attraction),
            num_of_rows: Some(10),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query.get("areaCode"), None);
        assert_eq!(query.get("contentTypeId"), Some("12"));
        assert_eq!(query.get("numOfRows"), Some("10"));
    }

    #[test]
    fn test_search_keyword_trimmed() {
        let query = SearchKeywordParams::new("  경복궁 ").to_query();
        assert_eq!(query.get("keyword"), Some("경복궁"));
    }

    #[test]
    fn test_blank_keyword_invalid() {
        let err = SearchKeywordParams::new("   ").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_radius_bounds() {
        let lng = Decimal::new(1269769, 4);
        let lat = Decimal::new(375788, 4);
        assert!(LocationBasedListParams::new(lng, lat, 1000).validate().is_ok());
        assert!(LocationBasedListParams::new(lng, lat, 0).validate().is_err());
        assert!(LocationBasedListParams::new(lng, lat, MAX_RADIUS_M + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let params = LocationBasedListParams::new(Decimal::from(200), Decimal::from(37), 1000);
        assert_eq!(params.validate().unwrap_err().kind(), ErrorKind::Validation);
        let params = LocationBasedListParams::new(Decimal::from(127), Decimal::from(95), 1000);
        assert_eq!(params.validate().unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_location_query_fields() {
        let mut params = LocationBasedListParams::new(Decimal::new(1269769, 4), Decimal::new(375788, 4), 500);
        params.arrange = Some(Arrange::Views);
        let query = params.to_query();
        assert_eq!(query.get("mapX"), Some("126.9769"));
        assert_eq!(query.get("mapY"), Some("37.5788"));
        assert_eq!(query.get("radius"), Some("500"));
        assert_eq!(query.get("arrange"), Some("B"));
    }
}

//! Conversion: TourItemResponse → TourItem.

use super::wire::TourItemResponse;
use super::TourItem;
use crate::shared::{parse_timestamp, ContentType, Coordinates};
use rust_decimal::Decimal;
use std::str::FromStr;

impl From<TourItemResponse> for TourItem {
    fn from(source: TourItemResponse) -> Self {
        Self {
            content_type: source.contenttypeid.as_deref().and_then(ContentType::from_code),
            coordinates: Coordinates::parse(source.mapx.as_deref(), source.mapy.as_deref()),
            created_at: parse_timestamp(source.createdtime.as_deref()),
            modified_at: parse_timestamp(source.modifiedtime.as_deref()),
            distance_m: source
                .dist
                .as_deref()
                .and_then(|d| Decimal::from_str(d.trim()).ok()),
            content_id: source.contentid,
            title: source.title.unwrap_or_default(),
            address: source.addr1,
            address_detail: source.addr2,
            area_code: source.areacode,
            sigungu_code: source.sigungucode,
            cat1: source.cat1,
            cat2: source.cat2,
            cat3: source.cat3,
            first_image: source.firstimage,
            first_image_thumbnail: source.firstimage2,
            tel: source.tel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gyeongbokgung() -> TourItemResponse {
        serde_json::from_str(
            r#"{
                "addr1": "서울특별시 종로구 사직로 161",
                "addr2": "",
                "areacode": "1",
                "cat1": "A02", "cat2": "A0201", "cat3": "A02010100",
                "contentid": "126508",
                "contenttypeid": "12",
                "createdtime": "20031105090000",
                "firstimage": "http://tong.visitkorea.or.kr/cms/resource/33/2678633_image2_1.jpg",
                "firstimage2": "",
                "mapx": "126.9769930325",
                "mapy": "37.5788222356",
                "modifiedtime": "20240716135907",
                "sigungucode": "23",
                "tel": "",
                "title": "경복궁"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_item_conversion() {
        let item: TourItem = gyeongbokgung().into();
        assert_eq!(item.content_id.as_str(), "126508");
        assert_eq!(item.content_type, Some(ContentType::Attraction));
        assert_eq!(item.title, "경복궁");
        assert_eq!(item.address.as_deref(), Some("서울특별시 종로구 사직로 161"));
        assert_eq!(item.address_detail, None);
        assert_eq!(item.tel, None);
        assert_eq!(item.first_image_thumbnail, None);
        let coords = item.coordinates.unwrap();
        assert_eq!(coords.latitude, Decimal::from_str("37.5788222356").unwrap());
        assert_eq!(
            item.modified_at.unwrap().to_string(),
            "2024-07-16 13:59:07"
        );
        assert!(item.distance_m.is_none());
    }

    #[test]
    fn test_unknown_content_type_and_bad_coordinates_are_none() {
        let mut raw = gyeongbokgung();
        raw.contenttypeid = Some("99".to_string());
        raw.mapx = Some("n/a".to_string());
        let item: TourItem = raw.into();
        assert_eq!(item.content_type, None);
        assert_eq!(item.coordinates, None);
    }

    #[test]
    fn test_distance_parsed() {
        let mut raw = gyeongbokgung();
        raw.dist = Some("412.5".to_string());
        let item: TourItem = raw.into();
        assert_eq!(item.distance_m, Some(Decimal::from_str("412.5").unwrap()));
    }

    #[test]
    fn test_null_or_numeric_title_tolerated() {
        let raw: TourItemResponse =
            serde_json::from_str(r#"{"contentid": "1", "title": null}"#).unwrap();
        assert_eq!(TourItem::from(raw).title, "");
        let raw: TourItemResponse =
            serde_json::from_str(r#"{"contentid": "2", "title": 1988}"#).unwrap();
        assert_eq!(TourItem::from(raw).title, "1988");
    }

    #[test]
    fn test_missing_contentid_rejected() {
        let result: Result<TourItemResponse, _> = serde_json::from_str(r#"{"title": "x"}"#);
        assert!(result.is_err());
    }
}

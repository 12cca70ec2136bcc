//! Conversions from detail wire records to domain types.

use super::wire::{
    DetailCommonResponse, DetailImageResponse, DetailIntroResponse, DetailPetTourResponse,
};
use super::{PetTourInfo, TourDetail, TourImage, TourIntro};
use crate::shared::{ContentType, Coordinates};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keep the non-empty scalar values of a catch-all map as text.
fn text_fields(raw: BTreeMap<String, Value>) -> BTreeMap<String, String> {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) if !s.trim().is_empty() => Some((key, s)),
            Value::Number(n) => Some((key, n.to_string())),
            _ => None,
        })
        .collect()
}

fn content_type(code: Option<&str>) -> Option<ContentType> {
    code.and_then(ContentType::from_code)
}

impl From<DetailCommonResponse> for TourDetail {
    fn from(source: DetailCommonResponse) -> Self {
        Self {
            content_type: content_type(source.contenttypeid.as_deref()),
            coordinates: Coordinates::parse(source.mapx.as_deref(), source.mapy.as_deref()),
            content_id: source.contentid,
            title: source.title.unwrap_or_default(),
            address: source.addr1,
            address_detail: source.addr2,
            zipcode: source.zipcode,
            tel: source.tel,
            homepage: source.homepage,
            overview: source.overview,
            first_image: source.firstimage,
            first_image_thumbnail: source.firstimage2,
        }
    }
}

impl From<DetailIntroResponse> for TourIntro {
    fn from(source: DetailIntroResponse) -> Self {
        Self {
            content_type: content_type(source.contenttypeid.as_deref()),
            content_id: source.contentid,
            use_time: source.usetime,
            rest_date: source.restdate,
            info_center: source.infocenter,
            parking: source.parking,
            pet_allowed: source.chkpet,
            check_in_time: source.checkintime,
            check_out_time: source.checkouttime,
            reservation_lodging: source.reservationlodging,
            open_time_food: source.opentimefood,
            reservation_food: source.reservationfood,
            first_menu: source.firstmenu,
            treat_menu: source.treatmenu,
            open_period: source.openperiod,
            reservation: source.reservation,
            accom_count: source.accomcount,
            exp_guide: source.expguide,
            exp_age_range: source.expagerange,
            other: text_fields(source.other),
        }
    }
}

impl From<DetailImageResponse> for TourImage {
    fn from(source: DetailImageResponse) -> Self {
        Self {
            content_id: source.contentid,
            name: source.imgname,
            origin_url: source.originimgurl,
            small_url: source.smallimageurl,
            serial_num: source.serialnum,
            copyright_code: source.cpyrht_div_cd,
        }
    }
}

impl From<DetailPetTourResponse> for PetTourInfo {
    fn from(source: DetailPetTourResponse) -> Self {
        Self {
            content_type: content_type(source.contenttypeid.as_deref()),
            content_id: source.contentid,
            leash: source.chkpetleash,
            size: source.chkpetsize,
            place: source.chkpetplace,
            fee: source.chkpetfee,
            info: source.petinfo,
            parking: source.parking,
            other: text_fields(source.other),
        }
    }
}

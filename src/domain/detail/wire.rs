//! Wire types for detail records.

use crate::shared::serde_util::opt_text;
use crate::shared::ContentId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw `detailCommon2` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCommonResponse {
    pub contentid: ContentId,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub contenttypeid: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub addr1: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub addr2: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub zipcode: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub tel: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub firstimage: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub firstimage2: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub mapx: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub mapy: Option<String>,
}

/// Raw `detailIntro2` record. Type-specific keys not named here land in `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailIntroResponse {
    pub contentid: ContentId,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub contenttypeid: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub usetime: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub restdate: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub infocenter: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub parking: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub chkpet: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub checkintime: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub checkouttime: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub reservationlodging: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub opentimefood: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub reservationfood: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub firstmenu: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub treatmenu: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub openperiod: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub reservation: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub accomcount: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub expguide: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub expagerange: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Raw `detailImage2` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailImageResponse {
    pub contentid: ContentId,
    #[serde(default, alias = "imagename", deserialize_with = "opt_text::deserialize")]
    pub imgname: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub originimgurl: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub smallimageurl: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub serialnum: Option<String>,
    #[serde(
        rename = "cpyrhtDivCd",
        default,
        deserialize_with = "opt_text::deserialize"
    )]
    pub cpyrht_div_cd: Option<String>,
}

/// Raw `detailPetTour2` record. Keys not named here land in `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailPetTourResponse {
    pub contentid: ContentId,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub contenttypeid: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub chkpetleash: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub chkpetsize: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub chkpetplace: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub chkpetfee: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub petinfo: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub parking: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

//! Wire types for list records (`areaBasedList2`, `locationBasedList2`, `searchKeyword2`).

use crate::shared::serde_util::opt_text;
use crate::shared::ContentId;
use serde::{Deserialize, Serialize};

/// Raw list record. Field names follow the upstream's lowercase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourItemResponse {
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
    pub areacode: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub sigungucode: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub cat1: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub cat2: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub cat3: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub firstimage: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub firstimage2: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub tel: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub mapx: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub mapy: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub createdtime: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub modifiedtime: Option<String>,
    #[serde(default, deserialize_with = "opt_text::deserialize")]
    pub dist: Option<String>,
}

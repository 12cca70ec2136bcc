//! Wire types for `areaCode2` records.

use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

/// Raw area-code record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodeItem {
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub code: String,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "serde_util::opt_count::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub rnum: Option<u32>,
}

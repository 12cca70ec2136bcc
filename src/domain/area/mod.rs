//! Area domain: region code lookup (`areaCode2`).

pub mod client;
mod convert;
pub mod wire;

use crate::http::QueryParams;
use serde::{Deserialize, Serialize};

/// A region (or, with a parent code, a sub-region) and its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCode {
    pub code: String,
    pub name: String,
    pub rnum: Option<u32>,
}

/// Parameters for `areaCode2`. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaCodeParams {
    /// Parent region; when set, its sub-regions are listed.
    pub area_code: Option<String>,
    pub num_of_rows: Option<u32>,
    pub page_no: Option<u32>,
}

impl AreaCodeParams {
    /// Sub-regions of `area_code`.
    pub fn within(area_code: impl Into<String>) -> Self {
        Self {
            area_code: Some(area_code.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("numOfRows", self.num_of_rows)
            .with_opt("pageNo", self.page_no)
            .with_opt("areaCode", self.area_code.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_empty() {
        assert!(AreaCodeParams::default().to_query().is_empty());
    }

    #[test]
    fn test_within_sets_parent_code() {
        let query = AreaCodeParams::within("1").to_query();
        assert_eq!(query.get("areaCode"), Some("1"));
        assert_eq!(query.len(), 1);
    }
}

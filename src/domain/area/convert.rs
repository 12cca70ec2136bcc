//! Conversion: AreaCodeItem → AreaCode.

use super::wire::AreaCodeItem;
use super::AreaCode;

impl From<AreaCodeItem> for AreaCode {
    fn from(item: AreaCodeItem) -> Self {
        Self {
            code: item.code,
            name: item.name,
            rnum: item.rnum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_and_rnum() {
        let item: AreaCodeItem =
            serde_json::from_str(r#"{"rnum": 1, "code": 1, "name": "서울"}"#).unwrap();
        let area: AreaCode = item.into();
        assert_eq!(area.code, "1");
        assert_eq!(area.name, "서울");
        assert_eq!(area.rnum, Some(1));
    }
}

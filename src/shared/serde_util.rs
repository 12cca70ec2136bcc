//! Custom serde helpers for the upstream's loosely-typed JSON.
//!
//! The API is an XML service with a JSON rendering bolted on, so the same field
//! can arrive as a string, a number, or an empty string depending on the record.

/// Deserializes a string or a bare number into a `String`.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Int(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
        })
    }
}

/// Optional text field: `null`, missing, and `""` all become `None`; numbers are stringified.
pub mod opt_text {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Str(s)) if s.trim().is_empty() => None,
            Some(Raw::Str(s)) => Some(s),
            Some(Raw::Int(n)) => Some(n.to_string()),
            Some(Raw::Float(n)) => Some(n.to_string()),
            None => None,
        })
    }
}

/// Optional count: accepts a number or a numeric string; anything else becomes `None`.
pub mod opt_count {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Int(n)) => u32::try_from(n).ok(),
            Some(Raw::Str(s)) => s.trim().parse().ok(),
            Some(Raw::Other(_)) | None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(with = "super::string_or_number")]
        id: String,
        #[serde(default, with = "super::opt_text")]
        tel: Option<String>,
        #[serde(default, with = "super::opt_count")]
        count: Option<u32>,
    }

    #[test]
    fn test_number_fields_stringified() {
        let s: Sample =
            serde_json::from_str(r#"{"id": 126508, "tel": 212345678, "count": "42"}"#).unwrap();
        assert_eq!(s.id, "126508");
        assert_eq!(s.tel.as_deref(), Some("212345678"));
        assert_eq!(s.count, Some(42));
    }

    #[test]
    fn test_empty_string_is_none() {
        let s: Sample = serde_json::from_str(r#"{"id": "1", "tel": "", "count": ""}"#).unwrap();
        assert_eq!(s.tel, None);
        assert_eq!(s.count, None);
    }

    #[test]
    fn test_non_numeric_count_is_none() {
        let s: Sample =
            serde_json::from_str(r#"{"id": "1", "count": {"nested": [1, 2]}}"#).unwrap();
        assert_eq!(s.count, None);
        let s: Sample = serde_json::from_str(r#"{"id": "1", "count": true}"#).unwrap();
        assert_eq!(s.count, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let s: Sample = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(s.tel, None);
        assert_eq!(s.count, None);
    }
}

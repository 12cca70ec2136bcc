//! Endpoint descriptors and query-string construction.

use crate::network::{DEFAULT_MOBILE_APP, DEFAULT_MOBILE_OS, RESPONSE_FORMAT};

/// Service-key parameter name.
pub const SERVICE_KEY_PARAM: &str = "serviceKey";

/// One upstream operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AreaCode,
    AreaBasedList,
    LocationBasedList,
    SearchKeyword,
    DetailCommon,
    DetailIntro,
    DetailImage,
    DetailPetTour,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AreaCode => "areaCode2",
            Endpoint::AreaBasedList => "areaBasedList2",
            Endpoint::LocationBasedList => "locationBasedList2",
            Endpoint::SearchKeyword => "searchKeyword2",
            Endpoint::DetailCommon => "detailCommon2",
            Endpoint::DetailIntro => "detailIntro2",
            Endpoint::DetailImage => "detailImage2",
            Endpoint::DetailPetTour => "detailPetTour2",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Ordered parameter map.
///
/// Absent and empty values are dropped on insert: the upstream treats them the
/// same and rejects some empty fields outright. Re-setting a name replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide defaults: client identity and output format.
    pub fn defaults(mobile_os: &str, mobile_app: &str) -> Self {
        Self::new()
            .with("MobileOS", mobile_os)
            .with("MobileApp", mobile_app)
            .with("_type", RESPONSE_FORMAT)
    }

    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        if value.is_empty() {
            return self;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// Merge `other` on top of `self`; `other` wins on shared names.
    pub fn merge(mut self, other: &QueryParams) -> Self {
        for (k, v) in &other.entries {
            self.set(k, v);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Percent-encoded `key=value` pairs joined with `&`.
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Client identity sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub mobile_os: String,
    pub mobile_app: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            mobile_os: DEFAULT_MOBILE_OS.to_string(),
            mobile_app: DEFAULT_MOBILE_APP.to_string(),
        }
    }
}

/// Build the canonical query string for one call.
///
/// Precedence, later wins: defaults → service key → caller parameters.
pub fn build_query(defaults: &QueryDefaults, service_key: &str, params: &QueryParams) -> String {
    QueryParams::defaults(&defaults.mobile_os, &defaults.mobile_app)
        .with(SERVICE_KEY_PARAM, service_key)
        .merge(params)
        .encode()
}

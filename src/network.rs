//! Network constants for the KorService2 API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://apis.data.go.kr/B551011/KorService2";

/// Default `MobileOS` identity tag.
pub const DEFAULT_MOBILE_OS: &str = "ETC";

/// Default `MobileApp` identity tag.
pub const DEFAULT_MOBILE_APP: &str = "MyTrip";

/// Output-format flag asking the upstream for JSON instead of XML.
pub const RESPONSE_FORMAT: &str = "json";

/// `resultCode` the upstream uses to mark success.
pub const SUCCESS_RESULT_CODE: &str = "0000";

//! Response envelope parsing and item normalization.
//!
//! Every KorService2 response has the same shape:
//!
//! ```text
//! { "response": {
//!     "header": { "resultCode": "0000", "resultMsg": "OK" },
//!     "body": { "items": { "item": T | [T] } | "", "numOfRows": 10, "pageNo": 1, "totalCount": 1 }
//! } }
//! ```
//!
//! `item` is an array when there are several records, a bare object when there is
//! exactly one, and missing (with `items` often an empty string) when there are none.
//! [`normalize_items`] is the single place that flattens those cases; every
//! endpoint goes through it.

use crate::error::TourApiError;
use crate::network::SUCCESS_RESULT_CODE;
use crate::shared::serde_util;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ResponseRoot {
    response: RawEnvelope,
}

/// Envelope with the body left undecoded until the header has been checked.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    header: Header,
    #[serde(default)]
    body: Option<Value>,
}

/// Upstream status header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Header {
    #[serde(rename = "resultCode", with = "serde_util::string_or_number")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

#[derive(Debug, Default, Deserialize)]
struct Body {
    #[serde(default)]
    items: Option<Value>,
    #[serde(rename = "numOfRows", default, with = "serde_util::opt_count")]
    num_of_rows: Option<u32>,
    #[serde(rename = "pageNo", default, with = "serde_util::opt_count")]
    page_no: Option<u32>,
    #[serde(rename = "totalCount", default, with = "serde_util::opt_count")]
    total_count: Option<u32>,
}

/// Normalized records of one response plus paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u32>,
    pub page_no: Option<u32>,
    pub num_of_rows: Option<u32>,
}

impl<T> Page<T> {
    /// Upstream `totalCount`, or the number of returned records when it is missing or zero.
    pub fn total_or_len(&self) -> u32 {
        match self.total_count {
            Some(total) if total > 0 => total,
            _ => self.items.len() as u32,
        }
    }

    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

/// Collapse the `item` field into a sequence.
///
/// - absent, `null` or a blank string → empty
/// - array → its elements, unchanged
/// - anything else → a one-element sequence
pub fn normalize_items<T: DeserializeOwned>(item: Option<Value>) -> Result<Vec<T>, serde_json::Error> {
    match item {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(Value::Array(values)) => values.into_iter().map(serde_json::from_value).collect(),
        Some(single) => Ok(vec![serde_json::from_value(single)?]),
    }
}

/// Parse a raw response body into a normalized page.
///
/// The result code is checked before the body is looked at, so an error
/// envelope never has its items decoded.
pub fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Page<T>, TourApiError> {
    let root: ResponseRoot = serde_json::from_str(body).map_err(|e| TourApiError::Decode {
        status,
        message: e.to_string(),
    })?;
    let envelope = root.response;

    if envelope.header.result_code != SUCCESS_RESULT_CODE {
        return Err(TourApiError::Semantic {
            code: envelope.header.result_code,
            message: envelope.header.result_msg,
        });
    }

    let body: Body = match envelope.body {
        None | Some(Value::Null) => Body::default(),
        Some(value) => serde_json::from_value(value).map_err(|e| TourApiError::Decode {
            status,
            message: e.to_string(),
        })?,
    };

    // `items` is an object on success but an empty string when nothing matched.
    let item = match body.items {
        Some(Value::Object(mut items)) => items.remove("item"),
        _ => None,
    };

    let items = normalize_items(item).map_err(|e| TourApiError::Decode {
        status,
        message: e.to_string(),
    })?;

    Ok(Page {
        items,
        total_count: body.total_count,
        page_no: body.page_no,
        num_of_rows: body.num_of_rows,
    })
}

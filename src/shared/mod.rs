//! Shared newtypes and value domains used across all domain modules.
//!
//! These types serialize to the exact codes the upstream expects, so they can be
//! used directly as query values and in wire types.

pub mod serde_util;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ContentId ───────────────────────────────────────────────────────────────

/// Upstream identifier of one tourism attraction record (e.g. `"126508"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ContentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Some endpoints send the id as a bare number.
        serde_util::string_or_number::deserialize(deserializer).map(ContentId)
    }
}

// ─── ContentType ─────────────────────────────────────────────────────────────

/// Tourism content category (`contentTypeId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Attraction,
    CulturalFacility,
    Festival,
    TravelCourse,
    Leports,
    Lodging,
    Shopping,
    Restaurant,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Attraction,
        ContentType::CulturalFacility,
        ContentType::Festival,
        ContentType::TravelCourse,
        ContentType::Leports,
        ContentType::Lodging,
        ContentType::Shopping,
        ContentType::Restaurant,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            ContentType::Attraction => "12",
            ContentType::CulturalFacility => "14",
            ContentType::Festival => "15",
            ContentType::TravelCourse => "25",
            ContentType::Leports => "28",
            ContentType::Lodging => "32",
            ContentType::Shopping => "38",
            ContentType::Restaurant => "39",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|content_type| content_type.as_code() == code.trim())
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown content type id: {}", s))
    }
}

impl Serialize for ContentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = serde_util::string_or_number::deserialize(deserializer)?;
        ContentType::from_code(&code).ok_or_else(|| {
            serde::de::Error::custom(format!("Unknown content type id: {}", code))
        })
    }
}

// ─── Arrange ─────────────────────────────────────────────────────────────────

/// Result ordering for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrange {
    /// A: by title.
    Title,
    /// B: by view count.
    Views,
    /// C: by modification date.
    Modified,
    /// D: by creation date.
    Created,
}

impl Arrange {
    pub fn as_code(&self) -> &'static str {
        match self {
            Arrange::Title => "A",
            Arrange::Views => "B",
            Arrange::Modified => "C",
            Arrange::Created => "D",
        }
    }
}

// ─── YesNo ───────────────────────────────────────────────────────────────────

/// `Y`/`N` flag used by the detail endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

impl YesNo {
    pub fn as_code(&self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// WGS84 position as sent by the upstream (`mapx` = longitude, `mapy` = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: Decimal,
    pub latitude: Decimal,
}

impl Coordinates {
    /// Parse a `mapx`/`mapy` pair. Returns `None` if either half is missing or malformed.
    pub fn parse(mapx: Option<&str>, mapy: Option<&str>) -> Option<Self> {
        let longitude = Decimal::from_str(mapx?.trim()).ok()?;
        let latitude = Decimal::from_str(mapy?.trim()).ok()?;
        Some(Self {
            longitude,
            latitude,
        })
    }
}

/// Parse the upstream's `YYYYMMDDHHmmss` timestamps.
pub fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw?.trim(), "%Y%m%d%H%M%S").ok()
}

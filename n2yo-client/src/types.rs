//! Typed models of the N2YO response bodies
//!
//! The client hands back raw JSON; these are for callers who want to
//! decode it with [`ApiResponse::decode`](crate::ApiResponse::decode).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn unix_to_utc(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

/// `info` block of the satellite-specific endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInfo {
    pub satid: u32,
    pub satname: String,
    pub transactionscount: u64,
    /// Only present on the pass endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passescount: Option<u32>,
}

/// `GET /tle/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TleResponse {
    pub info: SatelliteInfo,
    pub tle: String,
}

impl TleResponse {
    /// The element set split into its lines (N2YO separates them with CRLF)
    pub fn lines(&self) -> Vec<&str> {
        self.tle
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// One second of a predicted ground track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub satlatitude: f64,
    pub satlongitude: f64,
    /// Kilometers
    pub sataltitude: f64,
    pub azimuth: f64,
    pub elevation: f64,
    pub ra: f64,
    pub dec: f64,
    pub timestamp: i64,
    #[serde(default)]
    pub eclipsed: bool,
}

impl Position {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.timestamp)
    }
}

/// `GET /positions/...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub info: SatelliteInfo,
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualPass {
    pub start_az: f64,
    pub start_az_compass: String,
    #[serde(default)]
    pub start_el: f64,
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    pub max_az: f64,
    pub max_az_compass: String,
    pub max_el: f64,
    #[serde(rename = "maxUTC")]
    pub max_utc: i64,
    pub end_az: f64,
    pub end_az_compass: String,
    #[serde(default)]
    pub end_el: f64,
    #[serde(rename = "endUTC")]
    pub end_utc: i64,
    /// Visual magnitude; N2YO reports 100000 when unknown
    #[serde(default)]
    pub mag: f64,
    /// Visible duration in seconds
    #[serde(default)]
    pub duration: u32,
}

impl VisualPass {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.start_utc)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.end_utc)
    }
}

/// `GET /visualpasses/...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualPassesResponse {
    pub info: SatelliteInfo,
    #[serde(default)]
    pub passes: Vec<VisualPass>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioPass {
    pub start_az: f64,
    pub start_az_compass: String,
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    pub max_az: f64,
    pub max_az_compass: String,
    pub max_el: f64,
    #[serde(rename = "maxUTC")]
    pub max_utc: i64,
    pub end_az: f64,
    pub end_az_compass: String,
    #[serde(rename = "endUTC")]
    pub end_utc: i64,
}

impl RadioPass {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.start_utc)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.end_utc)
    }

    /// Pass length in seconds
    pub fn duration_seconds(&self) -> i64 {
        self.end_utc - self.start_utc
    }
}

/// `GET /radiopasses/...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioPassesResponse {
    pub info: SatelliteInfo,
    #[serde(default)]
    pub passes: Vec<RadioPass>,
}

/// `info` block of `/above`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboveInfo {
    pub category: String,
    pub transactionscount: u64,
    pub satcount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboveSatellite {
    pub satid: u32,
    pub satname: String,
    #[serde(rename = "intDesignator")]
    pub int_designator: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "launchDate")]
    pub launch_date: String,
    pub satlat: f64,
    pub satlng: f64,
    /// Kilometers
    pub satalt: f64,
}

/// `GET /above/...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboveResponse {
    pub info: AboveInfo,
    #[serde(default)]
    pub above: Vec<AboveSatellite>,
}

//! Request paths for the five N2YO endpoint families

use crate::location::Location;

/// One fully specified N2YO request
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Tle {
        norad_id: u32,
    },
    Positions {
        norad_id: u32,
        location: Location,
        seconds: u32,
    },
    VisualPasses {
        norad_id: u32,
        location: Location,
        days: u32,
        min_visibility_seconds: u32,
    },
    RadioPasses {
        norad_id: u32,
        location: Location,
        days: u32,
        min_elevation_degrees: u32,
    },
    Above {
        location: Location,
        search_radius_degrees: u32,
        category_id: u32,
    },
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Tle { .. } => "tle",
            Endpoint::Positions { .. } => "positions",
            Endpoint::VisualPasses { .. } => "visualpasses",
            Endpoint::RadioPasses { .. } => "radiopasses",
            Endpoint::Above { .. } => "above",
        }
    }

    /// Path relative to the API root, e.g. `/tle/25544`
    pub fn path(&self) -> String {
        match self {
            Endpoint::Tle { norad_id } => format!("/tle/{}", norad_id),
            Endpoint::Positions {
                norad_id,
                location,
                seconds,
            } => format!(
                "/positions/{}/{}/{}",
                norad_id,
                location_segment(location),
                seconds
            ),
            Endpoint::VisualPasses {
                norad_id,
                location,
                days,
                min_visibility_seconds,
            } => format!(
                "/visualpasses/{}/{}/{}/{}",
                norad_id,
                location_segment(location),
                days,
                min_visibility_seconds
            ),
            Endpoint::RadioPasses {
                norad_id,
                location,
                days,
                min_elevation_degrees,
            } => format!(
                "/radiopasses/{}/{}/{}/{}",
                norad_id,
                location_segment(location),
                days,
                min_elevation_degrees
            ),
            Endpoint::Above {
                location,
                search_radius_degrees,
                category_id,
            } => format!(
                "/above/{}/{}/{}",
                location_segment(location),
                search_radius_degrees,
                category_id
            ),
        }
    }
}

fn location_segment(location: &Location) -> String {
    format!(
        "{}/{}/{}",
        location.latitude, location.longitude, location.altitude_meters
    )
}

//! Satellite categories understood by the `/above` endpoint

use serde::{Deserialize, Serialize};

/// N2YO satellite category; the discriminant is the id used in `/above`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Category {
    Brightest = 1,
    Iss = 2,
    Weather = 3,
    Noaa = 4,
    Goes = 5,
    EarthResources = 6,
    SearchAndRescue = 7,
    DisasterMonitoring = 8,
    Tdrss = 9,
    Geostationary = 10,
    Intelsat = 11,
    Gorizont = 12,
    Raduga = 13,
    Molniya = 14,
    Iridium = 15,
    Orbcomm = 16,
    Globalstar = 17,
    AmateurRadio = 18,
    Experimental = 19,
    GpsOperational = 20,
    GlonassOperational = 21,
    Galileo = 22,
    Sbas = 23,
    NavyNavigation = 24,
    RussianLeoNavigation = 25,
    SpaceAndEarthScience = 26,
    Geodetic = 27,
    Engineering = 28,
    Education = 29,
    Military = 30,
    RadarCalibration = 31,
    CubeSats = 32,
    XmAndSirius = 33,
    Tv = 34,
    Beidou = 35,
    Yaogan = 36,
    WestfordNeedles = 37,
    Parus = 38,
    Strela = 39,
    Gonets = 40,
    Tsiklon = 41,
    Tsikada = 42,
    O3bNetworks = 43,
    Tselina = 44,
    Celestis = 45,
    Irnss = 46,
    Qzss = 47,
    Flock = 48,
    Lemur = 49,
    GpsConstellation = 50,
    GlonassConstellation = 51,
    Starlink = 52,
    OneWeb = 53,
    ChineseSpaceStation = 54,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Brightest,
        Category::Iss,
        Category::Weather,
        Category::Noaa,
        Category::Goes,
        Category::EarthResources,
        Category::SearchAndRescue,
        Category::DisasterMonitoring,
        Category::Tdrss,
        Category::Geostationary,
        Category::Intelsat,
        Category::Gorizont,
        Category::Raduga,
        Category::Molniya,
        Category::Iridium,
        Category::Orbcomm,
        Category::Globalstar,
        Category::AmateurRadio,
        Category::Experimental,
        Category::GpsOperational,
        Category::GlonassOperational,
        Category::Galileo,
        Category::Sbas,
        Category::NavyNavigation,
        Category::RussianLeoNavigation,
        Category::SpaceAndEarthScience,
        Category::Geodetic,
        Category::Engineering,
        Category::Education,
        Category::Military,
        Category::RadarCalibration,
        Category::CubeSats,
        Category::XmAndSirius,
        Category::Tv,
        Category::Beidou,
        Category::Yaogan,
        Category::WestfordNeedles,
        Category::Parus,
        Category::Strela,
        Category::Gonets,
        Category::Tsiklon,
        Category::Tsikada,
        Category::O3bNetworks,
        Category::Tselina,
        Category::Celestis,
        Category::Irnss,
        Category::Qzss,
        Category::Flock,
        Category::Lemur,
        Category::GpsConstellation,
        Category::GlonassConstellation,
        Category::Starlink,
        Category::OneWeb,
        Category::ChineseSpaceStation,
    ];

    /// Numeric id used in `/above` requests
    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Brightest => "Brightest",
            Category::Iss => "ISS",
            Category::Weather => "Weather",
            Category::Noaa => "NOAA",
            Category::Goes => "GOES",
            Category::EarthResources => "Earth resources",
            Category::SearchAndRescue => "Search & rescue",
            Category::DisasterMonitoring => "Disaster monitoring",
            Category::Tdrss => "Tracking and Data Relay Satellite System",
            Category::Geostationary => "Geostationary",
            Category::Intelsat => "Intelsat",
            Category::Gorizont => "Gorizont",
            Category::Raduga => "Raduga",
            Category::Molniya => "Molniya",
            Category::Iridium => "Iridium",
            Category::Orbcomm => "Orbcomm",
            Category::Globalstar => "Globalstar",
            Category::AmateurRadio => "Amateur radio",
            Category::Experimental => "Experimental",
            Category::GpsOperational => "Global Positioning System (GPS) Operational",
            Category::GlonassOperational => "Glonass Operational",
            Category::Galileo => "Galileo",
            Category::Sbas => "Satellite-Based Augmentation System",
            Category::NavyNavigation => "Navy Navigation Satellite System",
            Category::RussianLeoNavigation => "Russian LEO Navigation",
            Category::SpaceAndEarthScience => "Space & Earth Science",
            Category::Geodetic => "Geodetic",
            Category::Engineering => "Engineering",
            Category::Education => "Education",
            Category::Military => "Military",
            Category::RadarCalibration => "Radar Calibration",
            Category::CubeSats => "CubeSats",
            Category::XmAndSirius => "XM and Sirius",
            Category::Tv => "TV",
            Category::Beidou => "Beidou Navigation System",
            Category::Yaogan => "Yaogan",
            Category::WestfordNeedles => "Westford Needles",
            Category::Parus => "Parus",
            Category::Strela => "Strela",
            Category::Gonets => "Gonets",
            Category::Tsiklon => "Tsiklon",
            Category::Tsikada => "Tsikada",
            Category::O3bNetworks => "O3B Networks",
            Category::Tselina => "Tselina",
            Category::Celestis => "Celestis",
            Category::Irnss => "IRNSS",
            Category::Qzss => "QZSS",
            Category::Flock => "Flock",
            Category::Lemur => "Lemur",
            Category::GpsConstellation => "Global Positioning System (GPS) Constellation",
            Category::GlonassConstellation => "Glonass Constellation",
            Category::Starlink => "Starlink",
            Category::OneWeb => "OneWeb",
            Category::ChineseSpaceStation => "Chinese Space Station",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.id() == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Category> for u32 {
    fn from(category: Category) -> Self {
        category.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amateur_radio_id() {
        assert_eq!(Category::AmateurRadio.id(), 18);
        assert_eq!(Category::from_id(18), Some(Category::AmateurRadio));
        assert_eq!(Category::AmateurRadio.to_string(), "Amateur radio");
    }

    #[test]
    fn test_ids_round_trip_and_are_unique() {
        for (index, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.id(), index as u32 + 1);
            assert_eq!(Category::from_id(category.id()), Some(*category));
        }
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(Category::from_id(0), None);
        assert_eq!(Category::from_id(999), None);
    }
}

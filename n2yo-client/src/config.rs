use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Root of the N2YO satellite REST API
pub const DEFAULT_BASE_URL: &str = "https://www.n2yo.com/rest/v1/satellite/";

/// Fully resolved client configuration.
///
/// The client never reads the process environment; whoever builds the
/// client (see the `n2yo` binary) is responsible for filling this in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Observer location used when a call does not pass its own
    #[serde(default)]
    pub default_location: Option<Location>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            default_location: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_location(mut self, location: Location) -> Self {
        self.default_location = Some(location);
        self
    }
}

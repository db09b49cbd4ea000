//! Async client for the N2YO satellite tracking REST API
//!
//! Covers the five endpoint families: TLE, future positions, visual passes,
//! radio passes and "what is above me".
//!
//! ```no_run
//! use n2yo_client::{ClientConfig, Location, N2yoClient, TleResponse};
//!
//! # async fn demo() -> Result<(), n2yo_client::N2yoError> {
//! let config = ClientConfig::new("YOUR-API-KEY")
//!     .with_default_location(Location::new(41.702, -76.014, 0.0));
//! let client = N2yoClient::new(config)?;
//!
//! let response = client.get_tle(25544).await?;
//! let tle: TleResponse = response.decode()?;
//! println!("{}: {:?}", tle.info.satname, tle.lines());
//! println!("transactions used: {:?}", response.transactions_count);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod location;
pub mod transport;
pub mod types;

pub use category::Category;
pub use client::{ApiResponse, N2yoClient, extract_transactions_count};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use error::{N2yoError, Result};
pub use location::{Location, LocationResolution, resolve_location};
pub use transport::{ApiRequest, ReqwestTransport, Transport};
pub use types::*;

pub mod client;
pub mod error;
pub mod geolocate;
pub mod sequence;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use geolocate::{GeoClient, LocateError};
pub use sequence::{SearchSequencer, SequencedClient};
pub use types::CitySearch;

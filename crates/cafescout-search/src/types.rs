use cafescout_core::{Cafe, Coordinate};
use serde::Deserialize;

/// Successful search payload: the matched cafes plus the city's center point.
#[derive(Debug, Clone, Deserialize)]
pub struct CitySearch {
    pub cafes: Vec<Cafe>,
    pub lat: f64,
    pub lon: f64,
}

impl CitySearch {
    /// The city center, for recentering a map or display.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

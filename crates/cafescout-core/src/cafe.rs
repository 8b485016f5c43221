use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Latitude in [-90, 90], longitude in [-180, 180]; callers guarantee the
/// range, no validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A cafe as produced by the search service.
///
/// Identity is `id` alone: two records with the same `id` describe the same
/// cafe even when `name` or coordinates differ between fetches. Serialized
/// flat as `{id, name, lat, lon}` both on the wire and in the favorites blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub location: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cafe_serializes_flat() {
        let cafe = Cafe {
            id: 7,
            name: "Blue Door".to_string(),
            location: Coordinate {
                lat: 48.85,
                lon: 2.35,
            },
        };
        let value = serde_json::to_value(&cafe).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "name": "Blue Door", "lat": 48.85, "lon": 2.35})
        );
    }

    #[test]
    fn cafe_deserializes_from_wire_shape() {
        let cafe: Cafe =
            serde_json::from_str(r#"{"id": 3, "name": "Roast", "lat": 51.5, "lon": -0.12}"#)
                .unwrap();
        assert_eq!(cafe.id, 3);
        assert_eq!(cafe.name, "Roast");
        assert!((cafe.location.lat - 51.5).abs() < f64::EPSILON);
        assert!((cafe.location.lon - (-0.12)).abs() < f64::EPSILON);
    }
}

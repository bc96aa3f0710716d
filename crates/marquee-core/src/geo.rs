//! Location lookup and external map links.
//!
//! The derivation and filter code never calls into this module; only the map
//! view and the link builders do.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::theater::Theater;

/// Zoom level used by map-search links.
pub const SEARCH_ZOOM: u8 = 17;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
  pub lat: f64,
  pub lng: f64,
}

impl From<[f64; 2]> for Coordinates {
  fn from([lat, lng]: [f64; 2]) -> Self { Self { lat, lng } }
}

impl From<Coordinates> for [f64; 2] {
  fn from(c: Coordinates) -> Self { [c.lat, c.lng] }
}

/// Static location → coordinates table with a default center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gazetteer {
  /// City name appended to link queries.
  pub city:         String,
  /// Returned for any location without an entry.
  pub center:       Coordinates,
  pub default_zoom: u8,
  #[serde(rename = "locations")]
  pub entries:      HashMap<String, Coordinates>,
}

impl Gazetteer {
  /// Coordinates for `location`, or [`Self::center`] when unknown.
  pub fn coords_for(&self, location: &str) -> Coordinates {
    self.entries.get(location).copied().unwrap_or(self.center)
  }

  pub fn knows(&self, location: &str) -> bool { self.entries.contains_key(location) }

  /// `"<name>, <location>, <city>"`, percent-encoded.
  fn encoded_place(&self, theater: &Theater) -> String {
    let place = format!("{}, {}, {}", theater.name(), theater.location(), self.city);
    urlencoding::encode(&place).into_owned()
  }

  /// A maps-service directions link. Only meaningful for active venues.
  pub fn directions_url(&self, theater: &Theater) -> String {
    let Coordinates { lat, lng } = self.coords_for(theater.location());
    format!(
      "https://www.google.com/maps/dir/?api=1&destination={lat},{lng}&query={}",
      self.encoded_place(theater)
    )
  }

  /// A maps-service search link centred on the theater's location.
  pub fn map_search_url(&self, theater: &Theater) -> String {
    let Coordinates { lat, lng } = self.coords_for(theater.location());
    format!(
      "https://www.google.com/maps/search/{}/@{lat},{lng},{SEARCH_ZOOM}z",
      self.encoded_place(theater)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{derive::derive_theater, theater::RawTheater};

  fn gazetteer() -> Gazetteer {
    Gazetteer {
      city:         "Hyderabad".into(),
      center:       Coordinates { lat: 17.385, lng: 78.4867 },
      default_zoom: 11,
      entries:      HashMap::from([(
        "Gachibowli".to_string(),
        Coordinates { lat: 17.4401, lng: 78.3489 },
      )]),
    }
  }

  fn theater(location: &str) -> Theater {
    derive_theater(RawTheater {
      id:           1,
      name:         "AMB Cinemas".into(),
      location:     location.into(),
      theater_type: "Multiplex".into(),
      screens:      7,
      key_screen:   "Screen 1".into(),
      sound:        "Dolby Atmos".into(),
      projection:   "4K Laser".into(),
      seating:      "1,600+".into(),
      features:     String::new(),
    })
  }

  #[test]
  fn unknown_location_resolves_to_center() {
    let g = gazetteer();
    assert_eq!(g.coords_for("Gachibowli").lat, 17.4401);
    assert_eq!(g.coords_for("Atlantis"), g.center);
    assert!(!g.knows("Atlantis"));
  }

  #[test]
  fn directions_url_carries_coordinates_and_encoded_place() {
    let url = gazetteer().directions_url(&theater("Gachibowli"));
    assert_eq!(
      url,
      "https://www.google.com/maps/dir/?api=1&destination=17.4401,78.3489\
       &query=AMB%20Cinemas%2C%20Gachibowli%2C%20Hyderabad"
    );
  }

  #[test]
  fn map_search_url_uses_center_for_unknown_location() {
    let url = gazetteer().map_search_url(&theater("Atlantis"));
    assert_eq!(
      url,
      "https://www.google.com/maps/search/AMB%20Cinemas%2C%20Atlantis%2C%20Hyderabad\
       /@17.385,78.4867,17z"
    );
  }

  #[test]
  fn gazetteer_deserializes_pairs() {
    let json = r#"{
      "city": "Hyderabad", "center": [17.385, 78.4867], "default_zoom": 11,
      "locations": { "Abids": [17.3916, 78.4747] }
    }"#;
    let g: Gazetteer = serde_json::from_str(json).unwrap();
    assert_eq!(g.coords_for("Abids"), Coordinates { lat: 17.3916, lng: 78.4747 });
  }
}

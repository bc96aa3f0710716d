//! Theater records, both the raw catalog entry and its derived form.
//!
//! A [`RawTheater`] is supplied by the dataset and never mutated. A
//! [`Theater`] is computed from it exactly once, at catalog construction.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::derive::{Highlight, TechBadge};

// ─── Reference labels ────────────────────────────────────────────────────────

/// Substring of `type` that marks a venue which has not opened yet.
pub const UPCOMING_MARKER: &str = "Upcoming";

/// Sentinel used by `keyScreen` (and other text fields) when unknown.
pub const TBA: &str = "TBA";

/// The type labels the dataset is known to use.
pub const THEATER_TYPES: [&str; 5] = [
  "Multiplex",
  "Single Screen",
  "Twin Theaters",
  "Boutique",
  "Multiplex (Upcoming)",
];

/// Fixed choices offered for the sound facet.
pub const SOUND_SYSTEMS: [&str; 4] =
  ["Dolby Atmos", "Dolby 7.1", "Dolby Digital", "DTS"];

/// Fixed choices offered for the projection facet.
pub const PROJECTION_TYPES: [&str; 6] = [
  "4K Laser",
  "4K Digital",
  "4K Projection",
  "2K Digital",
  "LED",
  "Laser",
];

// ─── Category ────────────────────────────────────────────────────────────────

/// Normalized form of the `type` label with any "(Upcoming)" suffix removed.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum TheaterCategory {
  #[strum(serialize = "Multiplex")]
  Multiplex,
  #[strum(serialize = "Single Screen")]
  SingleScreen,
  #[strum(serialize = "Twin Theaters")]
  TwinTheaters,
  #[strum(serialize = "Boutique")]
  Boutique,
  #[strum(serialize = "Other")]
  Other,
}

impl TheaterCategory {
  /// Classify a raw `type` label. Unknown labels map to [`Self::Other`].
  pub fn from_type_label(label: &str) -> Self {
    let base = label
      .split_once('(')
      .map_or(label, |(head, _)| head)
      .trim();
    match base {
      "Multiplex" => Self::Multiplex,
      "Single Screen" => Self::SingleScreen,
      "Twin Theaters" => Self::TwinTheaters,
      "Boutique" => Self::Boutique,
      _ => Self::Other,
    }
  }
}

// ─── RawTheater ──────────────────────────────────────────────────────────────

/// An unprocessed catalog entry, exactly as the dataset supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTheater {
  /// Unique, stable identifier. Uniqueness is a dataset precondition.
  pub id:           u32,
  pub name:         String,
  pub location:     String,
  /// Category label, e.g. "Multiplex" or "Multiplex (Upcoming)".
  #[serde(rename = "type")]
  pub theater_type: String,
  #[serde(default)]
  pub screens:      u32,
  /// Description of the flagship screen, or [`TBA`].
  pub key_screen:   String,
  pub sound:        String,
  pub projection:   String,
  /// Seat count as display text ("1,600+", "TBA").
  pub seating:      String,
  /// Free-text amenities, history and trivia.
  pub features:     String,
}

impl RawTheater {
  /// `true` when the `type` label marks a venue that has not opened yet.
  pub fn is_upcoming(&self) -> bool {
    self.theater_type.contains(UPCOMING_MARKER)
  }
}

// ─── Theater ─────────────────────────────────────────────────────────────────

/// A raw record plus its presentation fields. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theater {
  #[serde(flatten)]
  pub raw:         RawTheater,
  /// At most three labels, in rule order.
  pub highlights:  Vec<Highlight>,
  /// One to four currency symbols.
  pub price_range: String,
  /// Primary image path keyed by id; may not exist.
  pub image:       String,
  pub tech_badges: Vec<TechBadge>,
  pub category:    TheaterCategory,
  pub is_upcoming: bool,
}

impl Theater {
  pub fn id(&self) -> u32 { self.raw.id }

  pub fn name(&self) -> &str { &self.raw.name }

  pub fn location(&self) -> &str { &self.raw.location }

  pub fn theater_type(&self) -> &str { &self.raw.theater_type }

  /// The key-screen description, or `None` when the dataset says [`TBA`].
  pub fn key_screen(&self) -> Option<&str> {
    let key = self.raw.key_screen.trim();
    (!key.is_empty() && key != TBA).then_some(key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_strips_upcoming_suffix() {
    assert_eq!(
      TheaterCategory::from_type_label("Multiplex (Upcoming)"),
      TheaterCategory::Multiplex
    );
    assert_eq!(
      TheaterCategory::from_type_label("Twin Theaters"),
      TheaterCategory::TwinTheaters
    );
    assert_eq!(
      TheaterCategory::from_type_label("Drive-in"),
      TheaterCategory::Other
    );
  }

  #[test]
  fn category_display_matches_dataset_labels() {
    assert_eq!(TheaterCategory::SingleScreen.to_string(), "Single Screen");
    let parsed: TheaterCategory = "Boutique".parse().unwrap();
    assert_eq!(parsed, TheaterCategory::Boutique);
  }

  #[test]
  fn raw_theater_uses_camel_case_keys() {
    let json = r#"{
      "id": 95, "name": "Allu Cinemas", "location": "Kokapet",
      "type": "Multiplex (Upcoming)", "screens": 4,
      "keyScreen": "Country's Largest Dolby Cinema", "sound": "Dolby Cinema",
      "projection": "Laser", "seating": "TBA", "features": "Future."
    }"#;
    let raw: RawTheater = serde_json::from_str(json).unwrap();
    assert_eq!(raw.theater_type, "Multiplex (Upcoming)");
    assert_eq!(raw.key_screen, "Country's Largest Dolby Cinema");
    assert!(raw.is_upcoming());
  }

  #[test]
  fn missing_screens_defaults_to_zero() {
    let json = r#"{
      "id": 1, "name": "A", "location": "B", "type": "Boutique",
      "keyScreen": "TBA", "sound": "TBA", "projection": "TBA",
      "seating": "TBA", "features": ""
    }"#;
    let raw: RawTheater = serde_json::from_str(json).unwrap();
    assert_eq!(raw.screens, 0);
  }
}

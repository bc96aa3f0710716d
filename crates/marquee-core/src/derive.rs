//! Derivation engine, a pure mapping from [`RawTheater`] to [`Theater`].
//!
//! Every function here is deterministic and total. Keyword checks are literal,
//! case-sensitive substring tests; where a rule lists several casings of the
//! same word, that is the whole of its case handling.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::{
  image,
  theater::{RawTheater, Theater, TheaterCategory},
};

/// Currency symbol repeated to express the price tier.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Highest price tier; the counter saturates here.
pub const MAX_PRICE_TIER: u8 = 4;

/// Maximum number of highlight labels kept per theater.
pub const MAX_HIGHLIGHTS: usize = 3;

// ─── Price tier ──────────────────────────────────────────────────────────────

/// Coarse affordability tier in `1..=4`.
///
/// Only an exact "Multiplex" or "Boutique" type earns a type bonus; every
/// other label, including upcoming variants, earns none.
pub fn price_tier(theater_type: &str, sound: &str, projection: &str) -> u8 {
  let mut tier = 1u8;
  if theater_type == "Multiplex" {
    tier += 1;
  }
  if theater_type == "Boutique" {
    tier += 2;
  }
  if sound.contains("Atmos") {
    tier += 1;
  }
  if projection.contains("Laser") || projection.contains("4K") {
    tier += 1;
  }
  tier.min(MAX_PRICE_TIER)
}

/// The price tier rendered as repeated [`CURRENCY_SYMBOL`]s.
pub fn price_range(theater_type: &str, sound: &str, projection: &str) -> String {
  CURRENCY_SYMBOL.repeat(price_tier(theater_type, sound, projection).into())
}

// ─── Highlights ──────────────────────────────────────────────────────────────

/// A short tag extracted from a theater's feature description.
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
  IntoStaticStr,
)]
pub enum Highlight {
  #[serde(rename = "Celebrity Owned")]
  #[strum(serialize = "Celebrity Owned")]
  CelebrityOwned,
  #[serde(rename = "Largest Screen")]
  #[strum(serialize = "Largest Screen")]
  LargestScreen,
  #[serde(rename = "LED Tech")]
  #[strum(serialize = "LED Tech")]
  LedTech,
  #[serde(rename = "Laser")]
  #[strum(serialize = "Laser")]
  Laser,
  #[serde(rename = "Premium Format")]
  #[strum(serialize = "Premium Format")]
  PremiumFormat,
  #[serde(rename = "Fan Culture")]
  #[strum(serialize = "Fan Culture")]
  FanCulture,
  #[serde(rename = "Metro Connected")]
  #[strum(serialize = "Metro Connected")]
  MetroConnected,
  #[serde(rename = "VIP/Luxury")]
  #[strum(serialize = "VIP/Luxury")]
  VipLuxury,
  #[serde(rename = "Recliners")]
  #[strum(serialize = "Recliners")]
  Recliners,
  #[serde(rename = "Record Breaker")]
  #[strum(serialize = "Record Breaker")]
  RecordBreaker,
  #[serde(rename = "Recently Updated")]
  #[strum(serialize = "Recently Updated")]
  RecentlyUpdated,
  #[serde(rename = "Iconic")]
  #[strum(serialize = "Iconic")]
  Iconic,
  #[serde(rename = "Budget Friendly")]
  #[strum(serialize = "Budget Friendly")]
  BudgetFriendly,
  #[serde(rename = "Great Audio")]
  #[strum(serialize = "Great Audio")]
  GreatAudio,
}

impl Highlight {
  /// The display label, e.g. `"VIP/Luxury"`.
  pub fn label(self) -> &'static str { self.into() }
}

/// Keyword rules in evaluation order. A rule fires when any keyword occurs.
pub const HIGHLIGHT_RULES: &[(Highlight, &[&str])] = &[
  (Highlight::CelebrityOwned, &[
    "Celebrity",
    "Co-owned",
    "Mahesh Babu",
    "Allu Arjun",
    "Ravi Teja",
  ]),
  (Highlight::LargestScreen, &["Largest", "largest"]),
  (Highlight::LedTech, &["LED"]),
  (Highlight::Laser, &["Laser"]),
  (Highlight::PremiumFormat, &["IMAX", "PCX", "EPIQ", "PLF"]),
  (Highlight::FanCulture, &["Fan", "FDFS", "fan"]),
  (Highlight::MetroConnected, &["Metro", "metro"]),
  (Highlight::VipLuxury, &["VIP", "Luxury", "luxury", "Gold"]),
  (Highlight::Recliners, &["Recliner", "recliner"]),
  (Highlight::RecordBreaker, &["Record", "First"]),
  (Highlight::RecentlyUpdated, &["Renovated", "New", "2024", "2025"]),
  (Highlight::Iconic, &["Heritage", "Legendary", "Iconic", "Classic"]),
  (Highlight::BudgetFriendly, &["Budget", "Affordable", "cheap", "₹50"]),
  (Highlight::GreatAudio, &["sound", "Sound", "Audio", "Atmos"]),
];

/// Up to [`MAX_HIGHLIGHTS`] labels whose keywords occur in `features`, in
/// rule order. No match yields an empty list.
pub fn extract_highlights(features: &str) -> Vec<Highlight> {
  HIGHLIGHT_RULES
    .iter()
    .filter(|(_, keywords)| keywords.iter().any(|k| features.contains(k)))
    .map(|(highlight, _)| *highlight)
    .take(MAX_HIGHLIGHTS)
    .collect()
}

// ─── Technology badges ───────────────────────────────────────────────────────

/// Capability badges shown on the detail view.
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
  IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum TechBadge {
  #[strum(serialize = "Dolby Atmos")]
  DolbyAtmos,
  #[strum(serialize = "Laser Projection")]
  LaserProjection,
  #[strum(serialize = "4K Resolution")]
  FourK,
  #[strum(serialize = "LED Screen")]
  LedScreen,
  #[strum(serialize = "7.1 Surround")]
  Surround71,
}

/// Badges implied by the sound and projection descriptors, in display order.
pub fn tech_badges(sound: &str, projection: &str) -> Vec<TechBadge> {
  [
    (TechBadge::DolbyAtmos, sound.contains("Atmos")),
    (TechBadge::LaserProjection, projection.contains("Laser")),
    (TechBadge::FourK, projection.contains("4K")),
    (TechBadge::LedScreen, projection.contains("LED")),
    (TechBadge::Surround71, sound.contains("7.1")),
  ]
  .into_iter()
  .filter_map(|(badge, present)| present.then_some(badge))
  .collect()
}

// ─── Whole record ────────────────────────────────────────────────────────────

/// Compute every presentation field for `raw`.
pub fn derive_theater(raw: RawTheater) -> Theater {
  let highlights = extract_highlights(&raw.features);
  let price_range = price_range(&raw.theater_type, &raw.sound, &raw.projection);
  let image = image::primary_image(raw.id);
  let tech_badges = tech_badges(&raw.sound, &raw.projection);
  let category = TheaterCategory::from_type_label(&raw.theater_type);
  let is_upcoming = raw.is_upcoming();

  Theater {
    raw,
    highlights,
    price_range,
    image,
    tech_badges,
    category,
    is_upcoming,
  }
}

//! Filter and search engine over a text query and four facet predicates.
//!
//! All predicates are ANDed. The text query is a case-insensitive substring
//! test over name, location and features. The type, sound and projection
//! facets are substring tests against the raw field; location alone is exact.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::theater::Theater;

/// Text form of [`FacetValue::All`].
pub const ALL: &str = "all";

// ─── FacetValue ──────────────────────────────────────────────────────────────

/// One facet selection: either unconstrained or a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetValue {
  #[default]
  All,
  Value(String),
}

impl FacetValue {
  pub fn value(value: impl Into<String>) -> Self { Self::from(value.into()) }

  pub fn is_all(&self) -> bool { matches!(self, Self::All) }

  pub fn as_str(&self) -> &str {
    match self {
      Self::All => ALL,
      Self::Value(v) => v,
    }
  }
}

impl From<String> for FacetValue {
  fn from(s: String) -> Self {
    if s == ALL { Self::All } else { Self::Value(s) }
  }
}

impl From<FacetValue> for String {
  fn from(v: FacetValue) -> Self {
    match v {
      FacetValue::All => ALL.to_string(),
      FacetValue::Value(s) => s,
    }
  }
}

impl FromStr for FacetValue {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Self::from(s.to_string())) }
}

impl fmt::Display for FacetValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Facet ───────────────────────────────────────────────────────────────────

/// One independently selectable filter dimension.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Facet {
  Type,
  Sound,
  Projection,
  Location,
}

// ─── Filters ─────────────────────────────────────────────────────────────────

/// The four facet selections. The default constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
  #[serde(rename = "type", default)]
  pub theater_type: FacetValue,
  #[serde(default)]
  pub sound:        FacetValue,
  #[serde(default)]
  pub projection:   FacetValue,
  #[serde(default)]
  pub location:     FacetValue,
}

impl Filters {
  pub fn get(&self, facet: Facet) -> &FacetValue {
    match facet {
      Facet::Type => &self.theater_type,
      Facet::Sound => &self.sound,
      Facet::Projection => &self.projection,
      Facet::Location => &self.location,
    }
  }

  pub fn set(&mut self, facet: Facet, value: FacetValue) {
    let slot = match facet {
      Facet::Type => &mut self.theater_type,
      Facet::Sound => &mut self.sound,
      Facet::Projection => &mut self.projection,
      Facet::Location => &mut self.location,
    };
    *slot = value;
  }

  /// Builder form of [`Self::set`].
  pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
    self.set(facet, FacetValue::value(value));
    self
  }

  pub fn reset(&mut self) { *self = Self::default(); }

  /// `true` when every facet is [`FacetValue::All`].
  pub fn is_unconstrained(&self) -> bool {
    [&self.theater_type, &self.sound, &self.projection, &self.location]
      .iter()
      .all(|v| v.is_all())
  }

  /// Whether `theater` passes all four facets.
  pub fn matches(&self, theater: &Theater) -> bool {
    contains_or_all(&self.theater_type, &theater.raw.theater_type)
      && contains_or_all(&self.sound, &theater.raw.sound)
      && contains_or_all(&self.projection, &theater.raw.projection)
      && match &self.location {
        FacetValue::All => true,
        FacetValue::Value(v) => theater.raw.location == *v,
      }
  }
}

fn contains_or_all(selection: &FacetValue, field: &str) -> bool {
  match selection {
    FacetValue::All => true,
    FacetValue::Value(v) => field.contains(v.as_str()),
  }
}

// ─── Text query ──────────────────────────────────────────────────────────────

/// Case-insensitive match of `query` against name, location or features.
/// An empty query matches everything.
pub fn matches_text(theater: &Theater, query: &str) -> bool {
  if query.is_empty() {
    return true;
  }
  let needle = query.to_lowercase();
  [&theater.raw.name, &theater.raw.location, &theater.raw.features]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// The subsequence of `theaters` matching `query` and every facet, in input
/// order.
pub fn filter_theaters<'a>(
  theaters: &'a [Theater],
  query: &str,
  filters: &Filters,
) -> Vec<&'a Theater> {
  theaters
    .iter()
    .filter(|t| matches_text(t, query) && filters.matches(t))
    .collect()
}

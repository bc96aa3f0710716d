//! Catalog index: derived records plus the facet value sets.
//!
//! Built once from the raw dataset and read-only afterwards.

use std::collections::{BTreeSet, HashSet};

use crate::{
  derive::derive_theater,
  filter::{Filters, filter_theaters},
  stats::CatalogStats,
  theater::{PROJECTION_TYPES, RawTheater, SOUND_SYSTEMS, Theater},
};

/// The in-memory collection of derived theaters.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  theaters:  Vec<Theater>,
  /// Distinct locations, sorted.
  locations: Vec<String>,
  /// Distinct type labels, in first-seen order.
  types:     Vec<String>,
  stats:     CatalogStats,
}

impl Catalog {
  /// Derive every record and compute the facet sets and statistics.
  pub fn new(raw: Vec<RawTheater>) -> Self {
    let theaters: Vec<Theater> = raw.into_iter().map(derive_theater).collect();

    let locations = theaters
      .iter()
      .map(|t| t.raw.location.clone())
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect();

    let mut seen = HashSet::new();
    let types = theaters
      .iter()
      .filter(|t| seen.insert(t.raw.theater_type.as_str()))
      .map(|t| t.raw.theater_type.clone())
      .collect();

    let stats = CatalogStats::compute(&theaters);
    tracing::debug!(theaters = theaters.len(), "catalog derived");

    Self { theaters, locations, types, stats }
  }

  pub fn theaters(&self) -> &[Theater] { &self.theaters }

  pub fn len(&self) -> usize { self.theaters.len() }

  pub fn is_empty(&self) -> bool { self.theaters.is_empty() }

  pub fn get(&self, id: u32) -> Option<&Theater> {
    self.theaters.iter().find(|t| t.id() == id)
  }

  pub fn locations(&self) -> &[String] { &self.locations }

  pub fn types(&self) -> &[String] { &self.types }

  pub fn sound_options(&self) -> &'static [&'static str] { &SOUND_SYSTEMS }

  pub fn projection_options(&self) -> &'static [&'static str] {
    &PROJECTION_TYPES
  }

  /// Summary counters, computed at construction.
  pub fn stats(&self) -> &CatalogStats { &self.stats }

  /// Run the filter/search engine over the whole catalog.
  pub fn search(&self, query: &str, filters: &Filters) -> Vec<&Theater> {
    filter_theaters(&self.theaters, query, filters)
  }

  /// Theaters whose id is in `ids`, in catalog order.
  pub fn favorites<'a>(&'a self, ids: &BTreeSet<u32>) -> Vec<&'a Theater> {
    self
      .theaters
      .iter()
      .filter(|t| ids.contains(&t.id()))
      .collect()
  }
}

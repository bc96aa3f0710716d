//! Statistics aggregator.
//!
//! Counters mix exact and substring comparisons on purpose; each one below
//! states which it uses.

use serde::{Deserialize, Serialize};

use crate::theater::Theater;

/// Summary counters over the active (not upcoming) part of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
  /// Active theaters.
  pub total:          usize,
  /// `type == "Multiplex"`.
  pub multiplexes:    usize,
  /// `type == "Single Screen"`.
  pub single_screens: usize,
  /// `type == "Boutique"` or `type == "Twin Theaters"`.
  pub boutique:       usize,
  /// `sound` contains "Atmos".
  pub atmos_count:    usize,
  /// `projection` contains "Laser".
  pub laser_count:    usize,
  /// `projection` contains "4K".
  pub four_k_count:   usize,
  /// Sum of `screens` over active theaters.
  pub total_screens:  u64,
  /// Upcoming theaters, counted over the whole collection.
  pub upcoming:       usize,
}

impl CatalogStats {
  pub fn compute<'a, I>(theaters: I) -> Self
  where
    I: IntoIterator<Item = &'a Theater>,
  {
    let mut stats = Self::default();
    for t in theaters {
      let raw = &t.raw;
      if raw.is_upcoming() {
        stats.upcoming += 1;
        continue;
      }
      stats.total += 1;
      match raw.theater_type.as_str() {
        "Multiplex" => stats.multiplexes += 1,
        "Single Screen" => stats.single_screens += 1,
        "Boutique" | "Twin Theaters" => stats.boutique += 1,
        _ => {}
      }
      if raw.sound.contains("Atmos") {
        stats.atmos_count += 1;
      }
      if raw.projection.contains("Laser") {
        stats.laser_count += 1;
      }
      if raw.projection.contains("4K") {
        stats.four_k_count += 1;
      }
      stats.total_screens += u64::from(raw.screens);
    }
    stats
  }
}

/// Active vs. coming-soon split of a displayed subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionCounts {
  pub active:   usize,
  pub upcoming: usize,
}

impl PartitionCounts {
  pub fn of<'a, I>(theaters: I) -> Self
  where
    I: IntoIterator<Item = &'a Theater>,
  {
    theaters.into_iter().fold(Self::default(), |mut acc, t| {
      if t.is_upcoming {
        acc.upcoming += 1;
      } else {
        acc.active += 1;
      }
      acc
    })
  }

  pub fn total(&self) -> usize { self.active + self.upcoming }
}

//! Dataset codec for Marquee.
//!
//! Reads the theater list and the location table from JSON, either compiled
//! into the binary or from files on disk, and writes catalogs back out as
//! JSON. Pure synchronous; the only I/O is reading whole files.
//!
//! # Quick start
//!
//! ```no_run
//! use marquee_core::Catalog;
//!
//! let catalog = Catalog::new(marquee_data::embedded_theaters().unwrap());
//! let gazetteer = marquee_data::embedded_gazetteer().unwrap();
//! println!("{} theaters, city {}", catalog.len(), gazetteer.city);
//! ```

pub mod error;

use std::path::Path;

use marquee_core::{Catalog, RawTheater, geo::Gazetteer};

pub use error::{Error, Result};

const EMBEDDED_THEATERS: &str = include_str!("../data/theaters.json");
const EMBEDDED_LOCATIONS: &str = include_str!("../data/locations.json");

// ─── Theaters ────────────────────────────────────────────────────────────────

/// Parse a JSON array of raw theater records.
pub fn parse_theaters(input: &str) -> Result<Vec<RawTheater>> {
  let theaters: Vec<RawTheater> = serde_json::from_str(input)?;
  tracing::debug!(count = theaters.len(), "parsed theaters");
  Ok(theaters)
}

/// Read and parse a theater dataset file.
pub fn load_theaters(path: &Path) -> Result<Vec<RawTheater>> {
  parse_theaters(&read(path)?)
}

/// The Hyderabad dataset shipped with the crate.
pub fn embedded_theaters() -> Result<Vec<RawTheater>> {
  parse_theaters(EMBEDDED_THEATERS)
}

// ─── Locations ───────────────────────────────────────────────────────────────

/// Parse a location table: `{city, center, default_zoom, locations}`.
pub fn parse_gazetteer(input: &str) -> Result<Gazetteer> {
  let gazetteer: Gazetteer = serde_json::from_str(input)?;
  tracing::debug!(
    city = %gazetteer.city,
    locations = gazetteer.entries.len(),
    "parsed location table"
  );
  Ok(gazetteer)
}

pub fn load_gazetteer(path: &Path) -> Result<Gazetteer> {
  parse_gazetteer(&read(path)?)
}

/// The Hyderabad location table shipped with the crate.
pub fn embedded_gazetteer() -> Result<Gazetteer> {
  parse_gazetteer(EMBEDDED_LOCATIONS)
}

// ─── Export ──────────────────────────────────────────────────────────────────

/// Pretty-printed JSON of raw records, in the same shape `parse_theaters`
/// reads.
pub fn export_raw(theaters: &[RawTheater]) -> Result<String> {
  Ok(serde_json::to_string_pretty(theaters)?)
}

/// Pretty-printed JSON of every derived record in `catalog`.
pub fn export_catalog(catalog: &Catalog) -> Result<String> {
  Ok(serde_json::to_string_pretty(catalog.theaters())?)
}

fn read(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests;

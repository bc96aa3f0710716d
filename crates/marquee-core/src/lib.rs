//! Core types and pure logic for the Marquee theater directory.
//!
//! This crate is free of I/O. Raw records come in, derived records, filter
//! results and summary counters go out. Dataset loading lives in
//! `marquee-data`; rendering lives in `marquee-cli`.

pub mod catalog;
pub mod derive;
pub mod error;
pub mod filter;
pub mod geo;
pub mod image;
pub mod session;
pub mod stats;
pub mod theater;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{Facet, FacetValue, Filters};
pub use session::{MainView, Session, ViewMode};
pub use stats::{CatalogStats, PartitionCounts};
pub use theater::{RawTheater, Theater, TheaterCategory};

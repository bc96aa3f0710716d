//! Tests against the embedded Hyderabad dataset.

use std::collections::HashSet;

use marquee_core::{
  Catalog,
  CatalogStats,
  Facet,
  Filters,
  derive::{Highlight, MAX_HIGHLIGHTS},
};

use crate::{
  embedded_gazetteer,
  embedded_theaters,
  export_catalog,
  export_raw,
  parse_theaters,
};

fn catalog() -> Catalog {
  Catalog::new(embedded_theaters().expect("embedded dataset"))
}

fn ids(found: &[&marquee_core::Theater]) -> Vec<u32> {
  found.iter().map(|t| t.id()).collect()
}

// ─── Dataset shape ───────────────────────────────────────────────────────────

#[test]
fn embedded_dataset_has_98_unique_ids() {
  let raw = embedded_theaters().unwrap();
  assert_eq!(raw.len(), 98);
  let unique: HashSet<u32> = raw.iter().map(|t| t.id).collect();
  assert_eq!(unique.len(), raw.len());
}

#[test]
fn every_location_is_in_the_gazetteer() {
  let c = catalog();
  let g = embedded_gazetteer().unwrap();
  assert_eq!(g.city, "Hyderabad");
  for location in c.locations() {
    assert!(g.knows(location), "no coordinates for {location}");
  }
}

#[test]
fn facet_sets() {
  let c = catalog();
  assert_eq!(c.locations().len(), 53);
  assert_eq!(c.locations()[0], "Abids");
  assert_eq!(c.types(), [
    "Multiplex",
    "Single Screen",
    "Twin Theaters",
    "Boutique",
    "Multiplex (Upcoming)"
  ]);
}

// ─── Derived fields ──────────────────────────────────────────────────────────

#[test]
fn known_records_derive_expected_fields() {
  let c = catalog();

  let amb = c.get(1).unwrap();
  assert_eq!(amb.price_range, "₹₹₹₹");
  assert_eq!(amb.highlights, vec![
    Highlight::CelebrityOwned,
    Highlight::VipLuxury,
    Highlight::RecentlyUpdated,
  ]);

  let prasads = c.get(2).unwrap();
  assert_eq!(prasads.highlights, vec![
    Highlight::LargestScreen,
    Highlight::PremiumFormat,
    Highlight::RecentlyUpdated,
  ]);

  let sai_ranga = c.get(41).unwrap();
  assert_eq!(sai_ranga.highlights, vec![Highlight::BudgetFriendly]);
  assert_eq!(sai_ranga.price_range, "₹₹");

  let connplex = c.get(82).unwrap();
  assert!(connplex.highlights.is_empty());
  assert_eq!(connplex.price_range, "₹₹₹");

  let odeon = c.get(96).unwrap();
  assert!(odeon.is_upcoming);
  assert_eq!(odeon.key_screen(), None);
  assert_eq!(odeon.image, "/theaters/theater-96.jpg");
}

#[test]
fn every_record_respects_derivation_bounds() {
  for t in catalog().theaters() {
    let symbols = t.price_range.chars().count();
    assert!((1..=4).contains(&symbols), "{}: {}", t.id(), t.price_range);
    assert!(t.highlights.len() <= MAX_HIGHLIGHTS);
    let distinct: HashSet<_> = t.highlights.iter().collect();
    assert_eq!(distinct.len(), t.highlights.len());
  }
}

// ─── Filters and stats ───────────────────────────────────────────────────────

#[test]
fn gachibowli_filter() {
  let c = catalog();
  let filters = Filters::default().with(Facet::Location, "Gachibowli");
  let found = c.search("", &filters);
  assert_eq!(ids(&found), vec![1, 25, 29, 40, 54]);
  assert!(found.iter().all(|t| t.location() == "Gachibowli"));
  assert!(!ids(&found).contains(&2)); // Khairatabad
}

#[test]
fn multiplex_filter_includes_upcoming_multiplexes() {
  let c = catalog();
  let filters = Filters::default().with(Facet::Type, "Multiplex");
  let found = c.search("", &filters);
  assert_eq!(found.len(), 53 + 4);
  for id in [95, 96, 97, 98] {
    assert!(ids(&found).contains(&id));
  }
}

#[test]
fn metro_query_searches_features_case_insensitively() {
  let c = catalog();
  let found = c.search("Metro", &Filters::default());
  assert_eq!(ids(&found), vec![22, 43, 44, 64, 90]);
}

#[test]
fn unconstrained_search_returns_full_catalog() {
  let c = catalog();
  let found = c.search("", &Filters::default());
  assert_eq!(found.len(), c.len());
  assert!(found.iter().zip(c.theaters()).all(|(a, b)| a.id() == b.id()));
}

#[test]
fn dataset_statistics() {
  let c = catalog();
  assert_eq!(*c.stats(), CatalogStats {
    total:          94,
    multiplexes:    53,
    single_screens: 38,
    boutique:       3,
    atmos_count:    36,
    laser_count:    16,
    four_k_count:   35,
    total_screens:  285,
    upcoming:       4,
  });
  assert_eq!(c.stats().total + c.stats().upcoming, c.len());
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[test]
fn raw_export_reparses_identically() {
  let raw = embedded_theaters().unwrap();
  let json = export_raw(&raw).unwrap();
  assert_eq!(parse_theaters(&json).unwrap(), raw);
}

#[test]
fn catalog_export_includes_derived_fields() {
  let json = export_catalog(&catalog()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&json).unwrap();
  let first = &value[0];
  assert_eq!(first["name"], "AMB Cinemas");
  assert_eq!(first["priceRange"], "₹₹₹₹");
  assert_eq!(first["keyScreen"], "Screen 1 (Large Format)");
  assert_eq!(first["highlights"][1], "VIP/Luxury");
  assert_eq!(first["isUpcoming"], false);
}

#[test]
fn malformed_dataset_is_a_json_error() {
  assert!(matches!(
    parse_theaters(r#"[{"id": "one"}]"#),
    Err(crate::Error::Json(_))
  ));
}

#[test]
fn missing_file_is_an_io_error() {
  let err = crate::load_theaters(std::path::Path::new("/nonexistent/theaters.json"))
    .unwrap_err();
  assert!(matches!(err, crate::Error::Io { .. }));
}

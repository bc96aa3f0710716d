//! Session-local view state: tab, density, query, facets, favorites and the
//! theater open in the detail view.
//!
//! Nothing here is persisted, and nothing here mutates the [`Catalog`].
//! Favorites are tracked by id only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{
  Error,
  Result,
  catalog::Catalog,
  filter::{Facet, FacetValue, Filters},
  theater::Theater,
};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// The three main tabs.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
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
pub enum MainView {
  #[default]
  Theaters,
  Map,
  Favorites,
}

/// Density of the theaters tab.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
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
pub enum ViewMode {
  #[default]
  Grid,
  List,
}

impl ViewMode {
  pub fn toggled(self) -> Self {
    match self {
      Self::Grid => Self::List,
      Self::List => Self::Grid,
    }
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Everything the user has chosen during this run.
#[derive(Debug, Clone, Default)]
pub struct Session {
  main_view: MainView,
  view_mode: ViewMode,
  query:     String,
  filters:   Filters,
  favorites: BTreeSet<u32>,
  selected:  Option<u32>,
}

impl Session {
  pub fn new(view_mode: ViewMode) -> Self {
    Self { view_mode, ..Self::default() }
  }

  // ── Tabs and density ──────────────────────────────────────────────────

  pub fn main_view(&self) -> MainView { self.main_view }

  pub fn set_main_view(&mut self, view: MainView) {
    if self.main_view != view {
      tracing::info!(from = %self.main_view, to = %view, "switching tab");
      self.main_view = view;
    }
  }

  /// Tabs worth offering: favorites only once something is favorited.
  pub fn available_views(&self) -> Vec<MainView> {
    MainView::iter()
      .filter(|v| *v != MainView::Favorites || !self.favorites.is_empty())
      .collect()
  }

  pub fn view_mode(&self) -> ViewMode { self.view_mode }

  pub fn set_view_mode(&mut self, mode: ViewMode) { self.view_mode = mode; }

  pub fn toggle_view_mode(&mut self) -> ViewMode {
    self.view_mode = self.view_mode.toggled();
    self.view_mode
  }

  // ── Query and facets ──────────────────────────────────────────────────

  pub fn query(&self) -> &str { &self.query }

  pub fn set_query(&mut self, query: impl Into<String>) { self.query = query.into(); }

  pub fn filters(&self) -> &Filters { &self.filters }

  pub fn set_filter(&mut self, facet: Facet, value: FacetValue) {
    tracing::info!(%facet, %value, "facet changed");
    self.filters.set(facet, value);
  }

  pub fn reset_filters(&mut self) { self.filters.reset(); }

  // ── Favorites ─────────────────────────────────────────────────────────

  /// Add `id` if absent, remove it if present. Returns the new membership.
  pub fn toggle_favorite(&mut self, id: u32) -> bool {
    let now_favorite = if self.favorites.remove(&id) {
      false
    } else {
      self.favorites.insert(id)
    };
    tracing::info!(id, now_favorite, "favorite toggled");
    now_favorite
  }

  pub fn is_favorite(&self, id: u32) -> bool { self.favorites.contains(&id) }

  pub fn favorite_ids(&self) -> &BTreeSet<u32> { &self.favorites }

  // ── Detail ────────────────────────────────────────────────────────────

  /// Open the detail view for `id`, which must exist in `catalog`.
  pub fn open_detail<'a>(
    &mut self,
    catalog: &'a Catalog,
    id: u32,
  ) -> Result<&'a Theater> {
    let theater = catalog.get(id).ok_or(Error::TheaterNotFound(id))?;
    self.selected = Some(id);
    Ok(theater)
  }

  pub fn close_detail(&mut self) { self.selected = None; }

  pub fn selected_id(&self) -> Option<u32> { self.selected }

  pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Theater> {
    self.selected.and_then(|id| catalog.get(id))
  }

  // ── Visible collection ────────────────────────────────────────────────

  /// Theaters shown by the current tab. The theaters and map tabs show the
  /// filter engine's output; the favorites tab shows favorites only and
  /// ignores the query and facets.
  pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Theater> {
    match self.main_view {
      MainView::Theaters | MainView::Map => {
        catalog.search(&self.query, &self.filters)
      }
      MainView::Favorites => catalog.favorites(&self.favorites),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::theater::RawTheater;

  fn catalog() -> Catalog {
    let raw = |id: u32, name: &str, location: &str| RawTheater {
      id,
      name: name.into(),
      location: location.into(),
      theater_type: "Multiplex".into(),
      screens: 3,
      key_screen: "TBA".into(),
      sound: "Dolby 7.1".into(),
      projection: "2K Digital".into(),
      seating: "900".into(),
      features: String::new(),
    };
    Catalog::new(vec![
      raw(1, "AMB Cinemas", "Gachibowli"),
      raw(2, "Prasads Multiplex", "Khairatabad"),
      raw(3, "PVR: Atrium", "Gachibowli"),
    ])
  }

  #[test]
  fn toggling_twice_restores_favorites() {
    let mut s = Session::default();
    s.toggle_favorite(9);
    let before = s.favorite_ids().clone();

    assert!(s.toggle_favorite(2));
    assert!(s.is_favorite(2));
    assert!(!s.toggle_favorite(2));
    assert_eq!(s.favorite_ids(), &before);
  }

  #[test]
  fn favorites_tab_ignores_query_and_facets() {
    let c = catalog();
    let mut s = Session::default();
    s.toggle_favorite(3);
    s.toggle_favorite(2);
    s.set_query("amb");
    s.set_filter(Facet::Location, FacetValue::value("Gachibowli"));

    let on_theaters: Vec<u32> = s.visible(&c).iter().map(|t| t.id()).collect();
    assert_eq!(on_theaters, vec![1]);

    s.set_main_view(MainView::Favorites);
    let on_favorites: Vec<u32> = s.visible(&c).iter().map(|t| t.id()).collect();
    assert_eq!(on_favorites, vec![2, 3]);
  }

  #[test]
  fn favorites_tab_offered_only_when_non_empty() {
    let mut s = Session::default();
    assert_eq!(s.available_views(), vec![MainView::Theaters, MainView::Map]);
    s.toggle_favorite(1);
    assert_eq!(s.available_views(), vec![
      MainView::Theaters,
      MainView::Map,
      MainView::Favorites
    ]);
  }

  #[test]
  fn open_detail_requires_known_id() {
    let c = catalog();
    let mut s = Session::default();
    assert!(matches!(
      s.open_detail(&c, 42),
      Err(Error::TheaterNotFound(42))
    ));
    assert_eq!(s.selected_id(), None);

    let t = s.open_detail(&c, 2).unwrap();
    assert_eq!(t.name(), "Prasads Multiplex");
    assert_eq!(s.selected(&c).map(Theater::id), Some(2));

    s.close_detail();
    assert!(s.selected(&c).is_none());
  }

  #[test]
  fn view_mode_toggles_and_parses() {
    let mut s = Session::new(ViewMode::List);
    assert_eq!(s.toggle_view_mode(), ViewMode::Grid);
    assert_eq!("list".parse::<ViewMode>().unwrap(), ViewMode::List);
    assert_eq!(MainView::Favorites.to_string(), "favorites");
    assert!("carousel".parse::<ViewMode>().is_err());
  }

  #[test]
  fn favoriting_never_touches_the_catalog() {
    let c = catalog();
    let before = c.theaters().to_vec();
    let mut s = Session::default();
    s.toggle_favorite(1);
    assert_eq!(c.theaters(), &before[..]);
  }
}

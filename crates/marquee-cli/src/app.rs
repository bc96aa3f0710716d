//! Application state machine and key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use marquee_core::{
  Catalog,
  Facet,
  FacetValue,
  MainView,
  Session,
  Theater,
  ViewMode,
  filter::ALL,
  geo::Gazetteer,
  image::{ResolvedImage, resolve_image},
};

use crate::images::FsImages;

/// Cards per row in the grid layout.
pub const GRID_COLUMNS: usize = 3;

// ─── Modes ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Focus on the tab content (grid, list, map or favorites).
  Browse,
  /// Focus on the detail pane.
  Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Normal,
  /// Keystrokes edit the search query.
  Search,
  /// Keystrokes narrow the facet picker.
  Picker,
}

// ─── Facet picker ─────────────────────────────────────────────────────────────

/// Popup listing the choices for one facet, fuzzy-narrowed by typed input.
#[derive(Debug, Clone)]
pub struct FacetPicker {
  pub facet:   Facet,
  /// `"all"` first, then the facet's values.
  pub options: Vec<String>,
  pub input:   String,
  pub cursor:  usize,
}

impl FacetPicker {
  fn new(facet: Facet, options: Vec<String>, current: &FacetValue) -> Self {
    let cursor = options
      .iter()
      .position(|o| o == current.as_str())
      .unwrap_or_default();
    Self { facet, options, input: String::new(), cursor }
  }

  /// Options matching the typed input, best match first.
  pub fn matches(&self) -> Vec<&str> {
    if self.input.is_empty() {
      return self.options.iter().map(String::as_str).collect();
    }
    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &str)> = self
      .options
      .iter()
      .filter_map(|o| {
        matcher
          .fuzzy_match(o, &self.input)
          .map(|score| (score, o.as_str()))
      })
      .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, o)| o).collect()
  }

  /// The option under the cursor, if any option matches.
  pub fn selection(&self) -> Option<&str> {
    self.matches().get(self.cursor).copied()
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub catalog:       Catalog,
  pub gazetteer:     Gazetteer,
  pub session:       Session,
  pub images:        FsImages,
  pub focus:         Focus,
  pub input:         InputMode,
  pub picker:        Option<FacetPicker>,
  /// Cursor position within the visible list of the current tab.
  pub cursor:        usize,
  /// Scroll offset within the detail pane.
  pub detail_scroll: u16,
  /// One-line status message shown in the status bar.
  pub status_msg:    String,
}

impl App {
  pub fn new(
    catalog: Catalog,
    gazetteer: Gazetteer,
    images: FsImages,
    view_mode: ViewMode,
  ) -> Self {
    Self {
      catalog,
      gazetteer,
      session: Session::new(view_mode),
      images,
      focus: Focus::Browse,
      input: InputMode::Normal,
      picker: None,
      cursor: 0,
      detail_scroll: 0,
      status_msg: String::new(),
    }
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Theaters shown by the current tab.
  pub fn visible(&self) -> Vec<&Theater> { self.session.visible(&self.catalog) }

  /// The theater under the cursor, if any.
  pub fn cursor_theater(&self) -> Option<&Theater> {
    self.visible().get(self.cursor).copied()
  }

  /// The theater open in the detail pane.
  pub fn selected(&self) -> Option<&Theater> {
    self.session.selected(&self.catalog)
  }

  /// The image the detail pane should reference for `theater`.
  pub fn image_for(&self, theater: &Theater) -> ResolvedImage {
    resolve_image(theater, &self.images)
  }

  fn facet_options(&self, facet: Facet) -> Vec<String> {
    let values: Vec<String> = match facet {
      Facet::Type => self.catalog.types().to_vec(),
      Facet::Location => self.catalog.locations().to_vec(),
      Facet::Sound => self
        .catalog
        .sound_options()
        .iter()
        .map(|s| s.to_string())
        .collect(),
      Facet::Projection => self
        .catalog
        .projection_options()
        .iter()
        .map(|s| s.to_string())
        .collect(),
    };
    std::iter::once(ALL.to_string()).chain(values).collect()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match self.input {
      InputMode::Search => {
        self.handle_search_key(key);
        Ok(true)
      }
      InputMode::Picker => {
        self.handle_picker_key(key);
        Ok(true)
      }
      InputMode::Normal => match self.focus {
        Focus::Browse => self.handle_browse_key(key),
        Focus::Detail => self.handle_detail_key(key),
      },
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    let mut query = self.session.query().to_string();
    match key.code {
      KeyCode::Esc => {
        self.input = InputMode::Normal;
        query.clear();
      }
      KeyCode::Enter => {
        self.input = InputMode::Normal;
      }
      KeyCode::Backspace => {
        query.pop();
      }
      KeyCode::Char(c) => query.push(c),
      _ => return,
    }
    if query != self.session.query() {
      self.session.set_query(query);
      self.cursor = 0;
    }
  }

  fn handle_picker_key(&mut self, key: KeyEvent) {
    let Some(picker) = self.picker.as_mut() else {
      self.input = InputMode::Normal;
      return;
    };
    match key.code {
      KeyCode::Esc => {
        self.close_picker();
      }
      KeyCode::Enter => {
        let facet = picker.facet;
        let choice = picker.selection().map(str::to_string);
        self.close_picker();
        if let Some(choice) = choice {
          let value = FacetValue::from(choice);
          self.status_msg = format!("{facet}: {value}");
          self.session.set_filter(facet, value);
          self.cursor = 0;
        }
      }
      KeyCode::Down => {
        if picker.cursor + 1 < picker.matches().len() {
          picker.cursor += 1;
        }
      }
      KeyCode::Up => {
        picker.cursor = picker.cursor.saturating_sub(1);
      }
      KeyCode::Backspace => {
        picker.input.pop();
        picker.cursor = 0;
      }
      KeyCode::Char(c) => {
        picker.input.push(c);
        picker.cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.row_step() as isize),
      KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(self.row_step() as isize)),
      KeyCode::Right => self.move_cursor(1),
      KeyCode::Left => self.move_cursor(-1),
      KeyCode::Home => self.cursor = 0,

      // Open detail
      KeyCode::Enter => {
        if let Some(id) = self.cursor_theater().map(Theater::id) {
          self.open_detail(id)?;
        }
      }

      // Search and facets
      KeyCode::Char('/') => {
        self.input = InputMode::Search;
      }
      KeyCode::Char('t') => self.open_picker(Facet::Type),
      KeyCode::Char('s') => self.open_picker(Facet::Sound),
      KeyCode::Char('p') => self.open_picker(Facet::Projection),
      KeyCode::Char('l') => self.open_picker(Facet::Location),
      KeyCode::Char('x') => {
        self.session.reset_filters();
        self.session.set_query("");
        self.cursor = 0;
        self.status_msg = "Filters cleared".into();
      }

      // Tabs and density
      KeyCode::Tab => self.cycle_view(),
      KeyCode::Char('1') => self.switch_view(MainView::Theaters),
      KeyCode::Char('2') => self.switch_view(MainView::Map),
      KeyCode::Char('3') => self.switch_view(MainView::Favorites),
      KeyCode::Char('v') => {
        let mode = self.session.toggle_view_mode();
        self.status_msg = format!("{mode} view");
      }

      // Favorites
      KeyCode::Char('f') => {
        if let Some(id) = self.cursor_theater().map(Theater::id) {
          self.toggle_favorite(id);
        }
      }

      _ => {}
    }
    Ok(true)
  }

  fn handle_detail_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Back to browsing
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.focus = Focus::Browse;
        self.session.close_detail();
      }

      // Scroll detail
      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      // Step through the visible list without leaving the detail pane
      KeyCode::Char(']') | KeyCode::PageDown => {
        self.move_cursor(1);
        if let Some(id) = self.cursor_theater().map(Theater::id) {
          self.open_detail(id)?;
        }
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        self.move_cursor(-1);
        if let Some(id) = self.cursor_theater().map(Theater::id) {
          self.open_detail(id)?;
        }
      }

      KeyCode::Char('f') => {
        if let Some(id) = self.session.selected_id() {
          self.toggle_favorite(id);
        }
      }

      // External links are shown, not followed.
      KeyCode::Char('o') => {
        if let Some(url) = self.selected().map(|t| self.gazetteer.map_search_url(t)) {
          self.status_msg = url;
        }
      }
      KeyCode::Char('d') => {
        let msg = self.selected().map(|t| {
          if t.is_upcoming {
            "Directions available once the venue opens".to_string()
          } else {
            self.gazetteer.directions_url(t)
          }
        });
        if let Some(msg) = msg {
          self.status_msg = msg;
        }
      }

      _ => {}
    }
    Ok(true)
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  fn row_step(&self) -> usize {
    match (self.session.main_view(), self.session.view_mode()) {
      (MainView::Theaters, ViewMode::Grid) => GRID_COLUMNS,
      _ => 1,
    }
  }

  fn move_cursor(&mut self, delta: isize) {
    let len = self.visible().len();
    if len == 0 {
      self.cursor = 0;
      return;
    }
    let next = self.cursor as isize + delta;
    self.cursor = next.clamp(0, len as isize - 1) as usize;
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible().len();
    self.cursor = self.cursor.min(len.saturating_sub(1));
  }

  fn open_detail(&mut self, id: u32) -> anyhow::Result<()> {
    self.session.open_detail(&self.catalog, id)?;
    self.focus = Focus::Detail;
    self.detail_scroll = 0;
    self.status_msg.clear();
    Ok(())
  }

  fn open_picker(&mut self, facet: Facet) {
    let options = self.facet_options(facet);
    let current = self.session.filters().get(facet);
    self.picker = Some(FacetPicker::new(facet, options, current));
    self.input = InputMode::Picker;
  }

  fn close_picker(&mut self) {
    self.picker = None;
    self.input = InputMode::Normal;
  }

  fn switch_view(&mut self, view: MainView) {
    self.session.set_main_view(view);
    self.cursor = 0;
    self.status_msg.clear();
  }

  fn cycle_view(&mut self) {
    let views = self.session.available_views();
    let current = self.session.main_view();
    let next = views
      .iter()
      .position(|v| *v == current)
      .map_or(0, |i| (i + 1) % views.len());
    self.switch_view(views[next]);
  }

  fn toggle_favorite(&mut self, id: u32) {
    let now_favorite = self.session.toggle_favorite(id);
    let name = self.catalog.get(id).map(Theater::name).unwrap_or_default();
    self.status_msg = if now_favorite {
      format!("Added {name} to favorites")
    } else {
      format!("Removed {name} from favorites")
    };
    self.clamp_cursor();
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use marquee_core::{
    RawTheater,
    geo::{Coordinates, Gazetteer},
  };

  use super::*;

  fn raw(id: u32, name: &str, location: &str, theater_type: &str) -> RawTheater {
    RawTheater {
      id,
      name: name.into(),
      location: location.into(),
      theater_type: theater_type.into(),
      screens: 2,
      key_screen: "TBA".into(),
      sound: "Dolby Atmos".into(),
      projection: "4K Laser".into(),
      seating: "900".into(),
      features: "Fan favorite.".into(),
    }
  }

  fn app() -> App {
    let catalog = Catalog::new(vec![
      raw(1, "AMB Cinemas", "Gachibowli", "Multiplex"),
      raw(2, "Prasads Multiplex", "Khairatabad", "Multiplex"),
      raw(9, "Sree Ramulu 70mm", "Moosapet", "Single Screen"),
      raw(95, "Allu Cinemas", "Kokapet", "Multiplex (Upcoming)"),
    ]);
    let gazetteer = Gazetteer {
      city:         "Hyderabad".into(),
      center:       Coordinates { lat: 17.385, lng: 78.4867 },
      default_zoom: 11,
      entries:      HashMap::new(),
    };
    App::new(
      catalog,
      gazetteer,
      FsImages::new("/nonexistent/marquee-images"),
      ViewMode::List,
    )
  }

  fn press(app: &mut App, code: KeyCode) -> bool {
    app
      .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
      .unwrap()
  }

  fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
      press(app, KeyCode::Char(c));
    }
  }

  fn visible_ids(app: &App) -> Vec<u32> { app.visible().iter().map(|t| t.id()).collect() }

  #[test]
  fn quit_keys() {
    let mut a = app();
    assert!(!press(&mut a, KeyCode::Char('q')));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!a.handle_key(ctrl_c).unwrap());
  }

  #[test]
  fn search_narrows_live_and_escape_clears() {
    let mut a = app();
    press(&mut a, KeyCode::Char('/'));
    type_str(&mut a, "cinemas");
    assert_eq!(visible_ids(&a), vec![1, 95]);

    press(&mut a, KeyCode::Esc);
    assert_eq!(a.input, InputMode::Normal);
    assert_eq!(a.session.query(), "");
    assert_eq!(visible_ids(&a), vec![1, 2, 9, 95]);
  }

  #[test]
  fn picker_applies_fuzzy_selection() {
    let mut a = app();
    press(&mut a, KeyCode::Char('l'));
    assert_eq!(a.input, InputMode::Picker);
    type_str(&mut a, "moosa");
    assert_eq!(a.picker.as_ref().and_then(|p| p.selection()), Some("Moosapet"));
    press(&mut a, KeyCode::Enter);

    assert_eq!(a.input, InputMode::Normal);
    assert_eq!(visible_ids(&a), vec![9]);
  }

  #[test]
  fn picker_all_option_clears_facet() {
    let mut a = app();
    a.session
      .set_filter(Facet::Type, FacetValue::value("Single Screen"));
    press(&mut a, KeyCode::Char('t'));
    // Cursor starts on the current selection; move back up to "all".
    let picker = a.picker.as_ref().unwrap();
    assert_eq!(picker.selection(), Some("Single Screen"));
    for _ in 0..picker.options.len() {
      press(&mut a, KeyCode::Up);
    }
    press(&mut a, KeyCode::Enter);
    assert!(a.session.filters().is_unconstrained());
  }

  #[test]
  fn enter_opens_detail_and_escape_closes() {
    let mut a = app();
    press(&mut a, KeyCode::Down);
    press(&mut a, KeyCode::Enter);
    assert_eq!(a.focus, Focus::Detail);
    assert_eq!(a.selected().map(Theater::id), Some(2));

    press(&mut a, KeyCode::Char(']'));
    assert_eq!(a.selected().map(Theater::id), Some(9));

    press(&mut a, KeyCode::Esc);
    assert_eq!(a.focus, Focus::Browse);
    assert!(a.selected().is_none());
  }

  #[test]
  fn favorites_tab_shows_only_favorites() {
    let mut a = app();
    press(&mut a, KeyCode::Char('3'));
    assert_eq!(a.session.main_view(), MainView::Favorites);
    assert!(visible_ids(&a).is_empty());

    press(&mut a, KeyCode::Char('1'));
    press(&mut a, KeyCode::Down);
    press(&mut a, KeyCode::Down);
    press(&mut a, KeyCode::Char('f'));
    press(&mut a, KeyCode::Char('3'));
    assert_eq!(a.session.main_view(), MainView::Favorites);
    assert_eq!(visible_ids(&a), vec![9]);

    // Un-favoriting on the favorites tab leaves an empty list.
    press(&mut a, KeyCode::Char('f'));
    assert!(visible_ids(&a).is_empty());
    assert_eq!(a.cursor, 0);
  }

  #[test]
  fn tab_cycles_through_available_views() {
    let mut a = app();
    press(&mut a, KeyCode::Tab);
    assert_eq!(a.session.main_view(), MainView::Map);
    press(&mut a, KeyCode::Tab);
    assert_eq!(a.session.main_view(), MainView::Theaters);
  }

  #[test]
  fn grid_rows_move_by_column_count() {
    let mut a = app();
    press(&mut a, KeyCode::Char('v'));
    assert_eq!(a.session.view_mode(), ViewMode::Grid);
    press(&mut a, KeyCode::Down);
    assert_eq!(a.cursor, GRID_COLUMNS);
    press(&mut a, KeyCode::Down);
    assert_eq!(a.cursor, 3); // clamped to the last theater
  }

  #[test]
  fn directions_withheld_for_upcoming_venues() {
    let mut a = app();
    a.cursor = 3;
    press(&mut a, KeyCode::Enter);
    press(&mut a, KeyCode::Char('d'));
    assert_eq!(a.status_msg, "Directions available once the venue opens");

    press(&mut a, KeyCode::Char('['));
    press(&mut a, KeyCode::Char('d'));
    assert!(a.status_msg.starts_with("https://www.google.com/maps/dir/?api=1"));
  }

  #[test]
  fn detail_image_falls_back_without_local_files() {
    let a = app();
    let t = a.catalog.get(9).unwrap();
    let image = a.image_for(t);
    assert!(image.is_fallback());
    assert_eq!(
      image.as_str(),
      marquee_core::image::fallback_image(9, "Single Screen")
    );
  }

  #[test]
  fn reset_clears_query_and_facets() {
    let mut a = app();
    a.session.set_query("amb");
    a.session.set_filter(Facet::Sound, FacetValue::value("DTS"));
    press(&mut a, KeyCode::Char('x'));
    assert_eq!(a.session.query(), "");
    assert!(a.session.filters().is_unconstrained());
  }
}

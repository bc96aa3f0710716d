//! TUI rendering. Lays out the header, the body panes and the status bar.

pub mod facet_picker;
pub mod map;
pub mod theater_detail;
pub mod theater_list;

use chrono::Local;
use marquee_core::{Facet, MainView, Theater};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::app::{App, Focus, InputMode};

/// Badge color for venues that have not opened yet.
pub const UPCOMING_COLOR: Color = Color::Yellow;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, stats, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(1), // stats
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_stats(f, rows[1], app);
  draw_body(f, rows[2], app);
  draw_status(f, rows[3], app);

  if let Some(picker) = &app.picker {
    facet_picker::draw(f, rows[2], picker);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let mut spans = vec![Span::styled(
    " marquee ",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  )];
  for (i, view) in app.session.available_views().into_iter().enumerate() {
    let label = match view {
      MainView::Theaters => " 1 Theaters ".to_string(),
      MainView::Map => " 2 Map ".to_string(),
      MainView::Favorites => {
        format!(" 3 Favorites ({}) ", app.session.favorite_ids().len())
      }
    };
    let style = if view == app.session.main_view() {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    if i > 0 {
      spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(label, style));
  }

  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  // Simple left-right header: pad the middle.
  let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
  let pad = (area.width as usize)
    .saturating_sub(left_width)
    .saturating_sub(right.content.len());
  spans.push(Span::raw(" ".repeat(pad)));
  spans.push(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
  let s = app.catalog.stats();
  let label = Style::default().fg(Color::DarkGray);
  let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

  let mut spans = Vec::new();
  for (name, count) in [
    ("theaters", s.total as u64),
    ("multiplexes", s.multiplexes as u64),
    ("single screens", s.single_screens as u64),
    ("boutique", s.boutique as u64),
    ("screens", s.total_screens),
    ("Atmos", s.atmos_count as u64),
    ("laser", s.laser_count as u64),
    ("4K", s.four_k_count as u64),
  ] {
    spans.push(Span::styled(format!(" {count}"), value));
    spans.push(Span::styled(format!(" {name} "), label));
  }
  spans.push(Span::styled(
    format!(" {} coming soon", s.upcoming),
    Style::default().fg(UPCOMING_COLOR),
  ));

  f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let detail_open = app.focus == Focus::Detail && app.selected().is_some();

  // Full width while browsing; 45/55 split with the detail pane open.
  let main = if detail_open {
    let cols = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
      .split(area);
    theater_detail::draw(f, cols[1], app);
    cols[0]
  } else {
    area
  };

  let visible = app.visible();
  match app.session.main_view() {
    MainView::Theaters => {
      let main = draw_filter_bar(f, main, app);
      theater_list::draw(f, main, app, &visible, " Theaters ");
    }
    MainView::Map => {
      let main = draw_filter_bar(f, main, app);
      map::draw(f, main, app, &visible);
    }
    MainView::Favorites if visible.is_empty() => draw_no_favorites(f, main),
    MainView::Favorites => theater_list::draw(f, main, app, &visible, " Favorites "),
  }
}

/// Render the active query and facets on the first line of `area` and
/// return what is left below it.
fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) -> Rect {
  if area.height < 3 {
    return area;
  }
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(area);

  let key_style = Style::default().fg(Color::DarkGray);
  let mut spans = Vec::new();

  let query = app.session.query();
  if app.input == InputMode::Search {
    spans.push(Span::styled(
      format!(" /{query}_ "),
      Style::default().fg(Color::Yellow),
    ));
  } else if !query.is_empty() {
    spans.push(Span::styled(
      format!(" /{query} "),
      Style::default().fg(Color::Yellow),
    ));
  } else {
    spans.push(Span::styled(" / search ", key_style));
  }

  let filters = app.session.filters();
  for facet in Facet::iter() {
    let value = filters.get(facet);
    let style = if value.is_all() {
      Style::default().fg(Color::Gray)
    } else {
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(format!(" {facet}:"), key_style));
    spans.push(Span::styled(value.to_string(), style));
  }

  f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);
  rows[1]
}

fn draw_no_favorites(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Favorites ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![Span::styled(
      "No favorites yet. Press f on a theater to save it here.",
      Style::default().fg(Color::DarkGray),
    )])),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match (app.input, app.focus) {
    (InputMode::Search, _) => ("SEARCH", "Type to filter  Enter keep  Esc clear"),
    (InputMode::Picker, _) => ("FILTER", "Type to narrow  ↑↓ choose  Enter apply  Esc cancel"),
    (InputMode::Normal, Focus::Browse) => (
      "BROWSE",
      "↑↓←→ move  Enter detail  / search  t s p l filter  x reset  v grid/list  f fav  Tab view  q quit",
    ),
    (InputMode::Normal, Focus::Detail) => (
      "DETAIL",
      "↑↓ scroll  [ ] prev/next  f fav  o map link  d directions  Esc back  q quit",
    ),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Shared helpers ───────────────────────────────────────────────────────────

/// Type label styled amber for upcoming venues.
pub fn type_badge(theater: &Theater) -> Span<'static> {
  let color = if theater.is_upcoming { UPCOMING_COLOR } else { Color::Magenta };
  Span::styled(
    format!("[{}]", theater.theater_type()),
    Style::default().fg(color),
  )
}

/// Favorite marker: a filled star for favorites, blank otherwise.
pub fn favorite_marker(app: &App, theater: &Theater) -> Span<'static> {
  if app.session.is_favorite(theater.id()) {
    Span::styled("★ ", Style::default().fg(Color::Yellow))
  } else {
    Span::raw("  ")
  }
}

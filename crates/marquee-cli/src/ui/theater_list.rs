//! Theater list pane, drawn as cards in a grid or as one row per theater.

use marquee_core::{PartitionCounts, Theater, ViewMode};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{favorite_marker, type_badge};
use crate::app::{App, GRID_COLUMNS};

/// Rows per grid card, borders included.
const CARD_HEIGHT: u16 = 6;

fn cursor_style() -> Style {
  Style::default()
    .bg(Color::Blue)
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
}

/// Render `theaters` into `area` in the session's density.
pub fn draw(f: &mut Frame, area: Rect, app: &App, theaters: &[&Theater], label: &str) {
  let counts = PartitionCounts::of(theaters.iter().copied());
  let title = if counts.upcoming > 0 {
    format!(
      "{}({} open, {} coming soon) ",
      label, counts.active, counts.upcoming
    )
  } else {
    format!("{}({}) ", label, counts.total())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if theaters.is_empty() {
    f.render_widget(
      Paragraph::new("No theaters match. Press x to clear filters.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  match app.session.view_mode() {
    ViewMode::List => draw_rows(f, inner, app, theaters),
    ViewMode::Grid => draw_grid(f, inner, app, theaters),
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

fn draw_rows(f: &mut Frame, area: Rect, app: &App, theaters: &[&Theater]) {
  let items: Vec<ListItem> = theaters
    .iter()
    .map(|t| {
      ListItem::new(Line::from(vec![
        favorite_marker(app, t),
        Span::styled(
          format!("{:<32}", t.name()),
          Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
          format!("{:<18}", t.location()),
          Style::default().fg(Color::Gray),
        ),
        Span::styled(
          format!("{:<5}", t.price_range),
          Style::default().fg(Color::Green),
        ),
        Span::styled(
          format!("{:>2} scr  ", t.raw.screens),
          Style::default().fg(Color::DarkGray),
        ),
        type_badge(t),
      ]))
    })
    .collect();

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(app.cursor.min(theaters.len() - 1)));

  f.render_stateful_widget(
    List::new(items).highlight_style(cursor_style()),
    area,
    &mut state,
  );
}

// ─── Grid ─────────────────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, area: Rect, app: &App, theaters: &[&Theater]) {
  let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
  let cursor_row = app.cursor / GRID_COLUMNS;
  // Keep the cursor's row on screen.
  let first_row = cursor_row.saturating_sub(visible_rows - 1);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
    .split(area);

  let chunks = theaters.chunks(GRID_COLUMNS).skip(first_row);
  for (row_area, (row_idx, row)) in rows.iter().zip(chunks.enumerate()) {
    let cols = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(vec![
        Constraint::Ratio(1, GRID_COLUMNS as u32);
        GRID_COLUMNS
      ])
      .split(*row_area);
    for (col, theater) in row.iter().enumerate() {
      let index = (first_row + row_idx) * GRID_COLUMNS + col;
      draw_card(f, cols[col], app, theater, index == app.cursor);
    }
  }
}

fn draw_card(f: &mut Frame, area: Rect, app: &App, t: &Theater, is_cursor: bool) {
  let border = if is_cursor {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let title_style = if is_cursor {
    cursor_style()
  } else {
    Style::default().add_modifier(Modifier::BOLD)
  };

  let block = Block::default()
    .title(Line::from(vec![
      favorite_marker(app, t),
      Span::styled(t.name().to_string(), title_style),
    ]))
    .borders(Borders::ALL)
    .border_style(border);

  let highlights = if t.highlights.is_empty() {
    Span::raw("")
  } else {
    let labels: Vec<&str> = t.highlights.iter().map(|h| h.label()).collect();
    Span::styled(labels.join(" · "), Style::default().fg(Color::Cyan))
  };

  let lines = vec![
    Line::from(vec![
      Span::styled(t.location().to_string(), Style::default().fg(Color::Gray)),
      Span::raw(" "),
      type_badge(t),
    ]),
    Line::from(vec![
      Span::styled(t.price_range.clone(), Style::default().fg(Color::Green)),
      Span::styled(
        format!("  {} screens", t.raw.screens),
        Style::default().fg(Color::DarkGray),
      ),
    ]),
    Line::from(highlights),
  ];

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

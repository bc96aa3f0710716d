//! Map tab: a scatter of the filtered theaters at their location coordinates.

use marquee_core::{PartitionCounts, Theater, geo::Coordinates};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  symbols::Marker,
  text::{Line, Span},
  widgets::{
    Block,
    Borders,
    Paragraph,
    Wrap,
    canvas::{Canvas, Points},
  },
};

use super::UPCOMING_COLOR;
use crate::app::App;

const ACTIVE_COLOR: Color = Color::Cyan;
const CURSOR_COLOR: Color = Color::White;
/// Degrees of padding around the outermost markers.
const MARGIN: f64 = 0.02;

/// Render the map and its legend into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, theaters: &[&Theater]) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Min(0), Constraint::Length(32)])
    .split(area);

  let placed: Vec<(Coordinates, &Theater)> = theaters
    .iter()
    .map(|t| (app.gazetteer.coords_for(t.location()), *t))
    .collect();

  draw_canvas(f, cols[0], app, &placed);
  draw_legend(f, cols[1], app, theaters);
}

/// `([min_lng, max_lng], [min_lat, max_lat])` covering every point.
fn bounds(center: Coordinates, points: &[(Coordinates, &Theater)]) -> ([f64; 2], [f64; 2]) {
  let mut x = [center.lng, center.lng];
  let mut y = [center.lat, center.lat];
  for (c, _) in points {
    x = [x[0].min(c.lng), x[1].max(c.lng)];
    y = [y[0].min(c.lat), y[1].max(c.lat)];
  }
  ([x[0] - MARGIN, x[1] + MARGIN], [y[0] - MARGIN, y[1] + MARGIN])
}

fn draw_canvas(f: &mut Frame, area: Rect, app: &App, placed: &[(Coordinates, &Theater)]) {
  let (x_bounds, y_bounds) = bounds(app.gazetteer.center, placed);

  let point = |(c, _): &(Coordinates, &Theater)| (c.lng, c.lat);
  let active: Vec<(f64, f64)> = placed
    .iter()
    .filter(|(_, t)| !t.is_upcoming)
    .map(point)
    .collect();
  let upcoming: Vec<(f64, f64)> = placed
    .iter()
    .filter(|(_, t)| t.is_upcoming)
    .map(point)
    .collect();
  let cursor = placed.get(app.cursor);

  let title = format!(" {} ", app.gazetteer.city);
  let canvas = Canvas::default()
    .block(
      Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray)),
    )
    .marker(Marker::Braille)
    .x_bounds(x_bounds)
    .y_bounds(y_bounds)
    .paint(move |ctx| {
      ctx.draw(&Points { coords: &active, color: ACTIVE_COLOR });
      ctx.draw(&Points { coords: &upcoming, color: UPCOMING_COLOR });
      if let Some((c, t)) = cursor {
        ctx.layer();
        ctx.print(
          c.lng,
          c.lat,
          Span::styled(
            format!("● {}", t.name()),
            Style::default()
              .fg(CURSOR_COLOR)
              .add_modifier(Modifier::BOLD),
          ),
        );
      }
    });
  f.render_widget(canvas, area);
}

fn draw_legend(f: &mut Frame, area: Rect, app: &App, theaters: &[&Theater]) {
  let counts = PartitionCounts::of(theaters.iter().copied());

  let block = Block::default()
    .title(" Legend ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    Line::from(vec![
      Span::styled("● ", Style::default().fg(ACTIVE_COLOR)),
      Span::raw(format!("Active ({})", counts.active)),
    ]),
    Line::from(vec![
      Span::styled("● ", Style::default().fg(UPCOMING_COLOR)),
      Span::raw(format!("Coming soon ({})", counts.upcoming)),
    ]),
    Line::from(""),
  ];

  if let Some(t) = theaters.get(app.cursor) {
    lines.push(Line::from(Span::styled(
      t.name().to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
      t.location().to_string(),
      Style::default().fg(Color::Gray),
    )));
    if !app.gazetteer.knows(t.location()) {
      lines.push(Line::from(Span::styled(
        "(approximate: city center)",
        Style::default().fg(Color::DarkGray),
      )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      "←→ previous/next  Enter detail",
      Style::default().fg(Color::DarkGray),
    )));
  }

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

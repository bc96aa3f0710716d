//! Theater detail pane.

use marquee_core::Theater;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{UPCOMING_COLOR, type_badge};
use crate::app::App;

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the selected theater into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(t) = app.selected() else {
    return;
  };

  let star = if app.session.is_favorite(t.id()) { " ★" } else { "" };
  let block = Block::default()
    .title(format!(" {}{star} ", t.name()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let para = Paragraph::new(detail_lines(app, t))
    .wrap(Wrap { trim: false })
    .scroll((app.detail_scroll, 0));
  f.render_widget(para, inner);
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<12}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value.into()),
  ])
}

fn heading(text: &str) -> Line<'static> {
  Line::from(Span::styled(
    text.to_string(),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
  ))
}

fn dim(text: impl Into<String>) -> Line<'static> {
  Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn detail_lines(app: &App, t: &Theater) -> Vec<Line<'static>> {
  let mut lines = vec![
    Line::from(vec![
      type_badge(t),
      Span::raw("  "),
      Span::styled(t.price_range.clone(), Style::default().fg(Color::Green)),
    ]),
    Line::from(""),
    field("Location", t.location()),
    field("Screens", t.raw.screens.to_string()),
  ];
  if let Some(key) = t.key_screen() {
    lines.push(field("Key screen", key));
  }
  lines.push(field("Sound", t.raw.sound.clone()));
  lines.push(field("Projection", t.raw.projection.clone()));
  lines.push(field("Seating", t.raw.seating.clone()));

  // Technology badges.
  if !t.tech_badges.is_empty() {
    lines.push(Line::from(""));
    let mut spans = Vec::new();
    for badge in &t.tech_badges {
      spans.push(Span::styled(
        format!(" {badge} "),
        Style::default().fg(Color::Black).bg(Color::Cyan),
      ));
      spans.push(Span::raw(" "));
    }
    lines.push(Line::from(spans));
  }

  lines.push(Line::from(""));
  lines.push(heading("Highlights"));
  if t.highlights.is_empty() {
    lines.push(dim("No highlights"));
  } else {
    for h in &t.highlights {
      lines.push(Line::from(format!("• {h}")));
    }
  }

  lines.push(Line::from(""));
  lines.push(heading("About"));
  lines.push(Line::from(t.raw.features.clone()));

  lines.push(Line::from(""));
  let image = app.image_for(t);
  let source = if image.is_fallback() { "stock photo" } else { "local" };
  lines.push(field("Image", format!("{} ({source})", image.as_str())));

  lines.push(Line::from(""));
  lines.push(heading("Links"));
  lines.push(field("Map", app.gazetteer.map_search_url(t)));
  if t.is_upcoming {
    lines.push(Line::from(Span::styled(
      "Coming soon. Directions open once the venue does.",
      Style::default().fg(UPCOMING_COLOR),
    )));
  } else {
    lines.push(field("Directions", app.gazetteer.directions_url(t)));
  }

  lines
}

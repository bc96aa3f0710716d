//! Facet picker popup.

use marquee_core::Facet;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::FacetPicker;

fn title(facet: Facet) -> &'static str {
  match facet {
    Facet::Type => " Type ",
    Facet::Sound => " Sound ",
    Facet::Projection => " Projection ",
    Facet::Location => " Location ",
  }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

/// Render `picker` as a popup over `area`.
pub fn draw(f: &mut Frame, area: Rect, picker: &FacetPicker) {
  let popup = centered(area, 40, 18);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(title(picker.facet))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);
  if inner.height == 0 {
    return;
  }

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(inner);

  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled("> ", Style::default().fg(Color::DarkGray)),
      Span::styled(format!("{}_", picker.input), Style::default().fg(Color::Yellow)),
    ])),
    rows[0],
  );

  let matches = picker.matches();
  let items: Vec<ListItem> = matches.iter().map(|m| ListItem::new(m.to_string())).collect();

  let mut state = ListState::default();
  state.select((!matches.is_empty()).then_some(picker.cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    rows[1],
    &mut state,
  );
}

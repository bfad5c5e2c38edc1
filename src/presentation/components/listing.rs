use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::domain::EventRecord;

pub fn render_event_list(
    frame: &mut Frame<'_>,
    area: Rect,
    events: &[EventRecord],
    selected: usize,
) {
    let block = Block::default().title(" Events ").borders(Borders::ALL);
    if events.is_empty() {
        frame.render_widget(
            Paragraph::new("No events yet. Press n to create one.").block(block),
            area,
        );
        return;
    }

    let name_budget = (area.width / 3).max(12) as usize;
    let items: Vec<ListItem<'static>> = events
        .iter()
        .map(|event| {
            let badge = if event.status {
                Span::styled("Live", Style::default().fg(Color::Green))
            } else {
                Span::styled("Draft", Style::default().fg(Color::DarkGray))
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<width$}", truncate_to_width(&event.name, name_budget), width = name_budget),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}  {}  ", event.date, event.location)),
                badge,
                Span::styled(
                    format!(
                        "  {} sessions · {} sponsors",
                        event.itinerary.len(),
                        event.sponsors.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected.min(events.len() - 1)));
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

/// Cuts `text` so its display width fits `max_width` columns, appending an
/// ellipsis when anything was dropped. Width-aware so CJK names do not blow
/// past the column.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_display_width_aware() {
        assert_eq!(truncate_to_width("short", 20), "short");
        assert_eq!(truncate_to_width("a very long event name", 10), "a very lo…");
        // Wide glyphs count double.
        assert_eq!(truncate_to_width("東京サミット", 7), "東京サ…");
    }
}

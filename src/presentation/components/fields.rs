use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::runtime::fields::InputKind;

use super::super::view::WizardScreen;

/// Renders the current step's field rows with group headers, scrolled so the
/// focused row stays on screen.
pub fn render_rows(frame: &mut Frame<'_>, area: Rect, wizard: &WizardScreen<'_>) {
    let title = format!(" {} — {} ", wizard.record.name, wizard.steps.current().label());
    let block = Block::default().title(title).borders(Borders::ALL);

    if wizard.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing to edit on this step").block(block),
            area,
        );
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focused_line = 0usize;
    let mut last_group: Option<&str> = None;
    for (index, row) in wizard.rows.iter().enumerate() {
        if row.group.as_deref() != last_group {
            if let Some(group) = row.group.as_deref() {
                if !lines.is_empty() {
                    lines.push(Line::raw(""));
                }
                lines.push(Line::from(Span::styled(
                    group.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            last_group = row.group.as_deref();
        }

        let focused = index == wizard.focus;
        if focused {
            focused_line = lines.len();
        }
        let marker = if focused { "▸ " } else { "  " };
        let hint = match row.input {
            InputKind::Choice => " ⏎",
            InputKind::OptionList | InputKind::Text => "",
        };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if row.value.is_empty() {
            Span::styled("—", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(row.value.clone())
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{hint}: ", row.label), label_style),
            value,
        ]));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = focused_line.saturating_sub(visible.saturating_sub(1)) as u16;
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

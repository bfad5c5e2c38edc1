use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use crate::draft::{Step, StepCursor};

/// Fixed seven-step progress strip. Completed steps carry a check mark, but
/// the mark is cosmetic; every tab stays reachable via Alt+digit.
pub fn render_step_strip(frame: &mut Frame<'_>, area: Rect, steps: StepCursor) {
    let titles: Vec<Line<'static>> = Step::ALL
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let marker = if steps.is_complete(step) {
                Span::styled("✓", Style::default().fg(Color::Green))
            } else {
                Span::styled(
                    format!("{}", index + 1),
                    Style::default().fg(Color::DarkGray),
                )
            };
            Line::from(vec![marker, Span::raw(" "), Span::raw(step.label())])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().title("Steps").borders(Borders::ALL))
        .select(steps.current().rank())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
};

use crate::domain::EventRecord;

// Canned analytics. There is no live telemetry backend; the dashboard shows a
// representative engagement shape alongside whatever events actually exist.
const HOURLY_ENGAGEMENT: [(&str, u64); 7] = [
    ("08:00", 45),
    ("09:00", 180),
    ("10:00", 320),
    ("11:00", 290),
    ("12:00", 450),
    ("13:00", 380),
    ("14:00", 510),
];

const POLL_RESULTS: [(&str, u64); 4] = [
    ("Excellent", 65),
    ("Good", 25),
    ("Average", 7),
    ("Poor", 3),
];

const SPONSOR_CLICKS: [(&str, u64, &str); 3] = [
    ("Axel Tech", 420, "+12%"),
    ("Luminary", 280, "+5%"),
    ("Horizon", 195, "-2%"),
];

pub fn render_dashboard(frame: &mut Frame<'_>, area: Rect, events: &[EventRecord]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_summary(frame, chunks[0], events);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_engagement(frame, columns[0]);
    render_breakdown(frame, columns[1]);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, events: &[EventRecord]) {
    let live = events.iter().filter(|event| event.status).count();
    let responses: u32 = events
        .iter()
        .flat_map(|event| &event.survey)
        .filter_map(|question| question.response_count)
        .sum();
    let line = Line::from(vec![
        Span::styled(
            format!("{} events", events.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(format!("{live} live"), Style::default().fg(Color::Green)),
        Span::raw("  ·  "),
        Span::raw(format!("{responses} survey responses")),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().title(" Overview ").borders(Borders::ALL)),
        area,
    );
}

fn render_engagement(frame: &mut Frame<'_>, area: Rect) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" QR scans by hour ")
                .borders(Borders::ALL),
        )
        .data(&HOURLY_ENGAGEMENT)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}

fn render_breakdown(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Session rating",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    for (label, percent) in POLL_RESULTS {
        let filled = (percent as usize * 20).div_ceil(100);
        lines.push(Line::from(vec![
            Span::raw(format!("{label:<10}")),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {percent}%")),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Sponsor clicks",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for (name, clicks, trend) in SPONSOR_CLICKS {
        let trend_style = if trend.starts_with('-') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{name:<10} {clicks:>4} ")),
            Span::styled(trend, trend_style),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(" Feedback ").borders(Borders::ALL)),
        area,
    );
}

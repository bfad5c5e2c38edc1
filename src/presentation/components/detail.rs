use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::EventRecord;

/// Read-only event sheet: header facts, wrapped description, then the four
/// sub-item collections side by side.
pub fn render_detail(frame: &mut Frame<'_>, area: Rect, event: &EventRecord) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_header(frame, chunks[0], event);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_itinerary(frame, columns[0], event);
    render_feedback(frame, columns[1], event);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, event: &EventRecord) {
    let badge = if event.status {
        Span::styled("Live", Style::default().fg(Color::Green))
    } else {
        Span::styled("Draft", Style::default().fg(Color::DarkGray))
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                event.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge,
        ]),
        Line::raw(format!("{} · {}", event.date, event.location)),
    ];
    let width = area.width.saturating_sub(2).max(20) as usize;
    for piece in textwrap::wrap(&event.description, width).into_iter().take(2) {
        lines.push(Line::raw(piece.into_owned()));
    }
    if !event.social_links.is_empty() {
        let socials: Vec<String> = event
            .social_links
            .iter()
            .map(|(platform, handle)| format!("{}: {handle}", platform.display_label()))
            .collect();
        lines.push(Line::from(Span::styled(
            socials.join("  "),
            Style::default().fg(Color::Cyan),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_itinerary(frame: &mut Frame<'_>, area: Rect, event: &EventRecord) {
    let mut lines = Vec::new();
    for session in &event.itinerary {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}–{} ", session.start_time, session.end_time),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                session.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        let mut detail = session.speaker.clone();
        if let Some(room) = &session.location {
            detail.push_str(&format!(" · {room}"));
        }
        lines.push(Line::raw(format!("  {detail}")));
    }
    if !event.sponsors.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Sponsors",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for sponsor in &event.sponsors {
            lines.push(Line::raw(format!("  {} — {}", sponsor.name, sponsor.website)));
        }
    }
    let title = format!(" Itinerary ({}) ", event.itinerary.len());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn render_feedback(frame: &mut Frame<'_>, area: Rect, event: &EventRecord) {
    let mut lines = Vec::new();
    for question in &event.survey {
        let responses = question
            .response_count
            .map(|count| format!(" — {count} responses"))
            .unwrap_or_default();
        lines.push(Line::raw(format!(
            "{} [{}]{responses}",
            question.question,
            question.kind.display_label()
        )));
    }
    if !event.polls.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Polls",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for poll in &event.polls {
            lines.push(Line::raw(poll.question.clone()));
            let tallies = poll.votes.as_deref().unwrap_or(&[]);
            for (index, option) in poll.options.iter().enumerate() {
                let votes = tallies
                    .get(index)
                    .map(|count| format!(" ({count})"))
                    .unwrap_or_default();
                lines.push(Line::raw(format!("  • {option}{votes}")));
            }
        }
    }
    let title = format!(" Survey & Polls ({}) ", event.survey.len() + event.polls.len());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

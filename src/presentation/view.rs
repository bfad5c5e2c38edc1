use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::runtime::fields::FieldRow, domain::EventRecord, draft::StepCursor};

use super::components::{
    render_dashboard, render_detail, render_event_list, render_footer, render_popup,
    render_rows, render_step_strip,
};

pub struct UiContext<'a> {
    pub view: ScreenView<'a>,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub enum ScreenView<'a> {
    List {
        events: &'a [EventRecord],
        selected: usize,
    },
    Dashboard {
        events: &'a [EventRecord],
    },
    Detail {
        event: &'a EventRecord,
    },
    Wizard(WizardScreen<'a>),
}

pub struct WizardScreen<'a> {
    pub record: &'a EventRecord,
    pub rows: Vec<FieldRow>,
    pub focus: usize,
    pub steps: StepCursor,
    pub dirty: bool,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub choices: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let dirty = match &ctx.view {
        ScreenView::Wizard(wizard) => wizard.dirty,
        _ => false,
    };

    match &ctx.view {
        ScreenView::List { events, selected } => {
            render_event_list(frame, chunks[0], events, *selected);
        }
        ScreenView::Dashboard { events } => render_dashboard(frame, chunks[0], events),
        ScreenView::Detail { event } => render_detail(frame, chunks[0], event),
        ScreenView::Wizard(wizard) => {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(chunks[0]);
            render_step_strip(frame, body[0], wizard.steps);
            render_rows(frame, body[1], wizard);
        }
    }

    render_footer(frame, chunks[1], ctx.status_message, ctx.help, dirty);

    if let ScreenView::Wizard(wizard) = &ctx.view {
        if let Some(popup) = &wizard.popup {
            render_popup(frame, popup);
        }
    }
}

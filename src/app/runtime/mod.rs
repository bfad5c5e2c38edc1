pub(crate) mod fields;
pub(crate) mod wizard;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::EventRecord,
    draft::{RemoveOutcome, Step},
    presentation::{self, PopupRender, ScreenView, UiContext, WizardScreen},
    registry::{CancelTarget, EventRegistry},
};

use super::{
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};
use fields::InputKind;
use wizard::WizardSession;

const LIST_HELP: &str =
    "↑/↓ select • Enter details • e edit • n new event • d dashboard • Ctrl+Q quit";
const WIZARD_HELP: &str =
    "Tab/↑↓ fields • Ctrl+Tab step • Ctrl+N/Ctrl+D add/remove item • Ctrl+S save • Ctrl+Q cancel";
const READONLY_HELP: &str = "e edit • Esc back • Ctrl+Q quit";

/// Which screen the console is showing. Exactly one wizard session can be
/// live, and only while `Wizard` is current.
#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    List,
    Dashboard,
    Detail(String),
    Wizard,
}

pub(crate) struct App {
    registry: EventRegistry,
    options: UiOptions,
    view: View,
    selected: usize,
    session: Option<WizardSession>,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(events: Vec<EventRecord>, options: UiOptions) -> Self {
        Self {
            registry: EventRegistry::with_events(events),
            options,
            view: View::List,
            selected: 0,
            session: None,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<Vec<EventRecord>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.registry.into_events())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let view = match &self.view {
            View::List => ScreenView::List {
                events: self.registry.events(),
                selected: self.selected,
            },
            View::Dashboard => ScreenView::Dashboard {
                events: self.registry.events(),
            },
            View::Detail(id) => match self.registry.get(id) {
                Some(event) => ScreenView::Detail { event },
                None => ScreenView::List {
                    events: self.registry.events(),
                    selected: self.selected,
                },
            },
            View::Wizard => match &self.session {
                Some(session) => ScreenView::Wizard(WizardScreen {
                    record: session.draft.record(),
                    rows: session.rows(),
                    focus: session.focus,
                    steps: session.steps,
                    dirty: session.draft.is_dirty(),
                    popup: session.popup.as_ref().map(|popup| PopupRender {
                        title: popup.title,
                        choices: &popup.choices,
                        selected: popup.selected,
                    }),
                }),
                None => ScreenView::List {
                    events: self.registry.events(),
                    selected: self.selected,
                },
            },
        };
        let help = self.options.show_help.then(|| match self.view {
            View::List => LIST_HELP,
            View::Wizard => WIZARD_HELP,
            View::Dashboard | View::Detail(_) => READONLY_HELP,
        });
        presentation::draw(
            frame,
            UiContext {
                view,
                status_message: self.status.message(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Wizard => self.handle_wizard_key(key),
            View::List => self.handle_list_key(key),
            View::Detail(_) => self.handle_detail_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
    }

    // -- read-only screens ---------------------------------------------------

    fn handle_list_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.registry.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(event) = self.registry.events().get(self.selected) {
                    self.view = View::Detail(event.id.clone());
                }
            }
            KeyCode::Char('e') => {
                if let Some(event) = self.registry.events().get(self.selected) {
                    self.open_wizard(event.clone());
                }
            }
            KeyCode::Char('n') => self.open_wizard(EventRecord::create()),
            KeyCode::Char('d') => self.view = View::Dashboard,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.view = View::List,
            KeyCode::Char('e') => {
                if let View::Detail(id) = &self.view {
                    if let Some(event) = self.registry.get(id) {
                        self.open_wizard(event.clone());
                    }
                }
            }
            KeyCode::Char('d') => self.view = View::Dashboard,
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.view = View::List;
        }
    }

    // -- wizard --------------------------------------------------------------

    fn open_wizard(&mut self, source: EventRecord) {
        self.session = Some(WizardSession::open(&source));
        self.view = View::Wizard;
        self.exit_armed = false;
        self.status.ready();
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if self.handle_popup_key(key) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            self.view = View::List;
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.exit_armed = false;
                    self.on_save();
                    return;
                }
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.on_cancel();
                    return;
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT)
                        || key.code == KeyCode::BackTab
                    {
                        session.prev_step();
                    } else {
                        session.next_step();
                    }
                    self.exit_armed = false;
                    return;
                }
                KeyCode::Char('n') => {
                    if session.add_item() {
                        self.exit_armed = false;
                        self.status.set_raw("Item added");
                    }
                    return;
                }
                KeyCode::Char('d') => {
                    match session.remove_focused_item() {
                        RemoveOutcome::Removed => self.status.set_raw("Item removed"),
                        RemoveOutcome::Replaced => {
                            self.status.set_raw("Item removed; a blank one remains")
                        }
                        RemoveOutcome::NotFound => return,
                    }
                    self.exit_armed = false;
                    return;
                }
                KeyCode::Char('x') => {
                    if session.remove_last_poll_option() {
                        self.exit_armed = false;
                        self.status.value_updated();
                    }
                    return;
                }
                _ => {}
            }
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(digit @ '1'..='7') = key.code {
                let index = digit as usize - '1' as usize;
                session.jump_to_step(Step::ALL[index]);
                self.exit_armed = false;
                return;
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                session.focus_next();
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                session.focus_prev();
                self.exit_armed = false;
            }
            KeyCode::PageDown => {
                session.next_step();
                self.exit_armed = false;
            }
            KeyCode::PageUp => {
                session.prev_step();
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCode::Enter => {
                if session.commit_option_buffer() {
                    self.exit_armed = false;
                    self.status.value_updated();
                } else if session.open_popup() {
                    self.status.set_raw("Use ↑/↓ and Enter to choose");
                }
            }
            _ => self.edit_focused_field(key),
        }
    }

    fn edit_focused_field(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(row) = session.focused_row() else {
            return;
        };
        match row.input {
            InputKind::OptionList => {
                let changed = match key.code {
                    KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        session.option_buffer.push(ch);
                        true
                    }
                    KeyCode::Backspace => session.option_buffer.pop().is_some(),
                    KeyCode::Delete => {
                        session.option_buffer.clear();
                        true
                    }
                    _ => false,
                };
                if changed {
                    self.exit_armed = false;
                    self.status.set_raw("New option. Press Enter to add it.");
                }
            }
            InputKind::Text => {
                if fields::apply_text_key(&mut session.draft, &row.target, &key) {
                    self.exit_armed = false;
                    self.status.editing(row.label);
                }
            }
            InputKind::Choice => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.popup.is_none() {
            return false;
        }
        match key.code {
            KeyCode::Esc => {
                session.close_popup();
                self.status.ready();
            }
            KeyCode::Up => {
                if let Some(popup) = session.popup.as_mut() {
                    popup.select_prev();
                }
            }
            KeyCode::Down => {
                if let Some(popup) = session.popup.as_mut() {
                    popup.select_next();
                }
            }
            KeyCode::Enter => {
                if session.apply_popup() {
                    self.status.value_updated();
                } else {
                    self.status.ready();
                }
            }
            _ => {}
        }
        true
    }

    /// Ctrl+S: snapshot the draft into the committed list and land on the
    /// saved record's detail screen. Blank placeholder rows are saved as-is.
    fn on_save(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let record = session.draft.snapshot();
        let id = record.id.clone();
        let name = record.name.clone();
        self.registry.upsert(record);
        self.selected = self
            .registry
            .iter()
            .position(|event| event.id == id)
            .unwrap_or(0);
        self.view = View::Detail(id);
        self.status.saved(&name);
    }

    /// Ctrl+Q inside the wizard: confirm once when dirty, then throw the
    /// draft away. A never-committed draft falls back to the list; edits to
    /// an existing record fall back to its committed version.
    fn on_cancel(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if self.options.confirm_cancel && session.draft.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_cancel();
            return;
        }
        let draft_id = session.draft.id().to_string();
        self.session = None;
        self.exit_armed = false;
        self.view = match self.registry.cancel_target(&draft_id) {
            CancelTarget::List => View::List,
            CancelTarget::Detail => View::Detail(draft_id),
        };
        self.status.ready();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app_with(events: Vec<EventRecord>) -> App {
        App::new(events, UiOptions::default())
    }

    fn named(id: &str, name: &str) -> EventRecord {
        let mut event = EventRecord::blank(id);
        event.name = name.to_string();
        event
    }

    #[test]
    fn saving_a_new_draft_appends_and_shows_detail() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.view, View::Wizard);
        app.handle_key(press(KeyCode::Char('E')));
        app.handle_key(ctrl('s'));
        assert_eq!(app.registry.len(), 2);
        let new = &app.registry.events()[1];
        assert_eq!(new.name, "New EventE");
        assert_eq!(app.view, View::Detail(new.id.clone()));
        assert!(app.session.is_none());
    }

    #[test]
    fn cancelling_a_new_draft_discards_it() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(ctrl('q')); // arms the confirm
        assert_eq!(app.view, View::Wizard);
        app.handle_key(ctrl('q'));
        assert_eq!(app.view, View::List);
        assert_eq!(app.registry.len(), 1);
    }

    #[test]
    fn cancelling_an_edit_reverts_to_the_committed_version() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Delete)); // clear the name
        assert_eq!(app.session.as_ref().unwrap().draft.record().name, "");
        app.handle_key(ctrl('q'));
        app.handle_key(ctrl('q'));
        assert_eq!(app.view, View::Detail("1".to_string()));
        assert_eq!(app.registry.get("1").unwrap().name, "Summit");
    }

    #[test]
    fn clean_session_cancels_without_confirmation() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(ctrl('q'));
        assert_eq!(app.view, View::Detail("1".to_string()));
    }

    #[test]
    fn saving_an_edit_replaces_in_place() {
        let mut app = app_with(vec![named("1", "Summit"), named("2", "Gala")]);
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Char('!')));
        app.handle_key(ctrl('s'));
        let names: Vec<&str> = app.registry.iter().map(|event| event.name.as_str()).collect();
        assert_eq!(names, ["Summit!", "Gala"]);
    }

    #[test]
    fn alt_digit_jumps_straight_to_a_step() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::ALT));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.steps.current(), Step::Publish);
    }

    #[test]
    fn poll_option_flow_through_the_key_handler() {
        let mut app = app_with(vec![named("1", "Summit")]);
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));
        app.handle_key(press(KeyCode::Down)); // options row
        for ch in "Yes".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        app.handle_key(press(KeyCode::Enter));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.draft.record().polls[0].options, ["Yes"]);
    }
}

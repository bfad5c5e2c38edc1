use crate::domain::{EventRecord, QuestionKind};
use crate::draft::{EventDraft, RemoveOutcome, Step, StepCursor};

use super::fields::{self, FieldRow, FieldTarget, InputKind, PollColumn, QuestionColumn};

/// Enter-opened chooser over a fixed label set, anchored to the row that
/// spawned it. Selection wraps; Esc abandons without writing.
#[derive(Debug, Clone)]
pub(crate) struct PopupState {
    pub target: FieldTarget,
    pub title: &'static str,
    pub choices: Vec<String>,
    pub selected: usize,
}

impl PopupState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.choices.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.choices.len() - 1) % self.choices.len();
    }
}

/// One live edit session: the working draft plus all transient wizard UI
/// state. Dropped wholesale on save or cancel.
#[derive(Debug, Clone)]
pub(crate) struct WizardSession {
    pub draft: EventDraft,
    pub steps: StepCursor,
    pub focus: usize,
    pub option_buffer: String,
    pub popup: Option<PopupState>,
}

impl WizardSession {
    pub fn open(source: &EventRecord) -> Self {
        Self {
            draft: EventDraft::open(source),
            steps: StepCursor::new(),
            focus: 0,
            option_buffer: String::new(),
            popup: None,
        }
    }

    pub fn rows(&self) -> Vec<FieldRow> {
        fields::build_rows(&self.draft, self.steps.current(), &self.option_buffer)
    }

    pub fn focused_row(&self) -> Option<FieldRow> {
        let rows = self.rows();
        rows.get(self.focus).cloned()
    }

    pub fn focus_next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    fn reset_row_state(&mut self) {
        self.focus = 0;
        self.option_buffer.clear();
        self.popup = None;
    }

    pub fn next_step(&mut self) {
        self.steps.advance();
        self.reset_row_state();
    }

    pub fn prev_step(&mut self) {
        self.steps.retreat();
        self.reset_row_state();
    }

    pub fn jump_to_step(&mut self, step: Step) {
        self.steps.jump_to(step);
        self.reset_row_state();
    }

    /// Ctrl+N on a repeated-collection step: appends a blank row and moves
    /// focus onto it. Steps without a collection ignore the key.
    pub fn add_item(&mut self) -> bool {
        let added = match self.steps.current() {
            Step::Itinerary => {
                self.draft.add_session();
                true
            }
            Step::Sponsors => {
                self.draft.add_sponsor();
                true
            }
            Step::Survey => {
                self.draft.add_question();
                true
            }
            Step::Polls => {
                self.draft.add_poll();
                true
            }
            _ => false,
        };
        if added {
            self.option_buffer.clear();
            self.focus = self.rows().len().saturating_sub(1);
        }
        added
    }

    /// Ctrl+D: removes the item owning the focused row. The collection never
    /// empties; removing the last item leaves a fresh placeholder behind.
    pub fn remove_focused_item(&mut self) -> RemoveOutcome {
        let Some(id) = self.focused_row().and_then(|row| row.item_id().map(str::to_string))
        else {
            return RemoveOutcome::NotFound;
        };
        let outcome = match self.steps.current() {
            Step::Itinerary => self.draft.remove_session(&id),
            Step::Sponsors => self.draft.remove_sponsor(&id),
            Step::Survey => self.draft.remove_question(&id),
            Step::Polls => self.draft.remove_poll(&id),
            _ => RemoveOutcome::NotFound,
        };
        if outcome != RemoveOutcome::NotFound {
            self.option_buffer.clear();
            let len = self.rows().len();
            if self.focus >= len {
                self.focus = len.saturating_sub(1);
            }
        }
        outcome
    }

    /// Enter on the focused option list: commits the typed buffer as a new
    /// poll option. Empty buffers are ignored.
    pub fn commit_option_buffer(&mut self) -> bool {
        let Some(row) = self.focused_row() else {
            return false;
        };
        if row.input != InputKind::OptionList || self.option_buffer.trim().is_empty() {
            return false;
        }
        let FieldTarget::Poll { id, .. } = row.target else {
            return false;
        };
        let text = std::mem::take(&mut self.option_buffer).trim().to_string();
        self.draft.add_poll_option(&id, text)
    }

    /// Ctrl+X on the focused option list: drops the last option. Positional
    /// by contract, so the matching vote tally slot goes with it.
    pub fn remove_last_poll_option(&mut self) -> bool {
        let Some(row) = self.focused_row() else {
            return false;
        };
        let FieldTarget::Poll {
            id,
            column: PollColumn::Options,
        } = row.target
        else {
            return false;
        };
        let count = self
            .draft
            .record()
            .polls
            .iter()
            .find(|poll| poll.id == id)
            .map_or(0, |poll| poll.options.len());
        match count.checked_sub(1) {
            Some(last) => self.draft.remove_poll_option(&id, last),
            None => false,
        }
    }

    /// Enter on a chooser row: builds the popup with the row's label set and
    /// the current value preselected.
    pub fn open_popup(&mut self) -> bool {
        let Some(row) = self.focused_row() else {
            return false;
        };
        if row.input != InputKind::Choice {
            return false;
        }
        let record = self.draft.record();
        let popup = match &row.target {
            FieldTarget::Status => PopupState {
                target: row.target.clone(),
                title: "Status",
                choices: vec!["Draft".to_string(), "Live".to_string()],
                selected: usize::from(record.status),
            },
            FieldTarget::Question { id, column } => {
                let Some(question) = record.survey.iter().find(|item| item.id == *id) else {
                    return false;
                };
                match column {
                    QuestionColumn::Kind => PopupState {
                        target: row.target.clone(),
                        title: "Question type",
                        choices: QuestionKind::ALL
                            .iter()
                            .map(|kind| kind.display_label().to_string())
                            .collect(),
                        selected: QuestionKind::ALL
                            .iter()
                            .position(|kind| *kind == question.kind)
                            .unwrap_or(0),
                    },
                    QuestionColumn::Required => PopupState {
                        target: row.target.clone(),
                        title: "Required",
                        choices: vec!["No".to_string(), "Yes".to_string()],
                        selected: usize::from(question.required),
                    },
                    QuestionColumn::Question => return false,
                }
            }
            _ => return false,
        };
        self.popup = Some(popup);
        true
    }

    /// Writes the popup's highlighted choice through the draft and closes it.
    pub fn apply_popup(&mut self) -> bool {
        let Some(popup) = self.popup.take() else {
            return false;
        };
        match &popup.target {
            FieldTarget::Status => {
                self.draft.set_status(popup.selected == 1);
                true
            }
            FieldTarget::Question { id, column } => match column {
                QuestionColumn::Kind => {
                    let kind = QuestionKind::ALL
                        .get(popup.selected)
                        .copied()
                        .unwrap_or(QuestionKind::Text);
                    self.draft.update_question(id, |question| question.kind = kind)
                }
                QuestionColumn::Required => {
                    let required = popup.selected == 1;
                    self.draft
                        .update_question(id, |question| question.required = required)
                }
                QuestionColumn::Question => false,
            },
            _ => false,
        }
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> WizardSession {
        WizardSession::open(&EventRecord::blank("e1"))
    }

    #[test]
    fn add_item_focuses_the_new_rows() {
        let mut session = session();
        session.jump_to_step(Step::Sponsors);
        assert!(session.add_item());
        assert_eq!(session.draft.record().sponsors.len(), 2);
        let row = session.focused_row().unwrap();
        assert_eq!(row.group.as_deref(), Some("Sponsor 2"));
    }

    #[test]
    fn remove_last_item_leaves_a_placeholder() {
        let mut session = session();
        session.jump_to_step(Step::Survey);
        let original = session.draft.record().survey[0].id.clone();
        assert_eq!(session.remove_focused_item(), RemoveOutcome::Replaced);
        let survey = &session.draft.record().survey;
        assert_eq!(survey.len(), 1);
        assert_ne!(survey[0].id, original);
    }

    #[test]
    fn option_buffer_commits_only_on_the_option_row() {
        let mut session = session();
        session.jump_to_step(Step::Polls);
        session.option_buffer = "Yes".to_string();
        // Focus sits on the question row; the buffer must not land there.
        assert!(!session.commit_option_buffer());
        session.focus_next();
        assert!(session.commit_option_buffer());
        assert_eq!(session.draft.record().polls[0].options, ["Yes"]);
        assert!(session.option_buffer.is_empty());
    }

    #[test]
    fn popup_round_trip_flips_question_kind() {
        let mut session = session();
        session.jump_to_step(Step::Survey);
        session.focus_next(); // Type row
        assert!(session.open_popup());
        session.popup.as_mut().unwrap().select_next();
        assert!(session.apply_popup());
        assert_eq!(
            session.draft.record().survey[0].kind,
            QuestionKind::MultipleChoice
        );
        assert!(session.popup.is_none());
    }

    #[test]
    fn status_popup_preselects_current_value() {
        let mut session = session();
        session.draft.set_status(true);
        session.jump_to_step(Step::Publish);
        assert!(session.open_popup());
        assert_eq!(session.popup.as_ref().unwrap().selected, 1);
    }
}

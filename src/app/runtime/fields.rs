use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::SocialPlatform;
use crate::draft::{EventDraft, Step};

/// Which piece of the draft a rendered field row writes to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldTarget {
    Name,
    Date,
    Location,
    Description,
    Logo,
    Status,
    Social(SocialPlatform),
    Session { id: String, column: SessionColumn },
    Sponsor { id: String, column: SponsorColumn },
    Question { id: String, column: QuestionColumn },
    Poll { id: String, column: PollColumn },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SessionColumn {
    Title,
    Start,
    End,
    Speaker,
    Description,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SponsorColumn {
    Name,
    Website,
    Description,
    Social(SocialPlatform),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum QuestionColumn {
    Question,
    Kind,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PollColumn {
    Question,
    Options,
    Media,
}

/// How a row accepts input: free text, an Enter-opened chooser, or the poll
/// option list with its pending-entry buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum InputKind {
    Text,
    Choice,
    OptionList,
}

#[derive(Debug, Clone)]
pub(crate) struct FieldRow {
    pub group: Option<String>,
    pub label: &'static str,
    pub value: String,
    pub target: FieldTarget,
    pub input: InputKind,
}

impl FieldRow {
    fn text(group: Option<String>, label: &'static str, value: String, target: FieldTarget) -> Self {
        Self {
            group,
            label,
            value,
            target,
            input: InputKind::Text,
        }
    }

    fn choice(
        group: Option<String>,
        label: &'static str,
        value: String,
        target: FieldTarget,
    ) -> Self {
        Self {
            group,
            label,
            value,
            target,
            input: InputKind::Choice,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match &self.target {
            FieldTarget::Session { id, .. }
            | FieldTarget::Sponsor { id, .. }
            | FieldTarget::Question { id, .. }
            | FieldTarget::Poll { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Derives the editable rows for one wizard step from the current draft.
/// Rebuilt after every mutation, the same way the teacher form re-renders
/// its sections from state.
pub(crate) fn build_rows(draft: &EventDraft, step: Step, option_buffer: &str) -> Vec<FieldRow> {
    let record = draft.record();
    let mut rows = Vec::new();
    match step {
        Step::Basics => {
            rows.push(FieldRow::text(None, "Event name", record.name.clone(), FieldTarget::Name));
            rows.push(FieldRow::text(None, "Date", record.date.clone(), FieldTarget::Date));
            rows.push(FieldRow::text(
                None,
                "Location",
                record.location.clone(),
                FieldTarget::Location,
            ));
            rows.push(FieldRow::text(
                None,
                "Description",
                record.description.clone(),
                FieldTarget::Description,
            ));
            for platform in SocialPlatform::ALL {
                rows.push(FieldRow::text(
                    Some("Social media".to_string()),
                    platform.display_label(),
                    record
                        .social_links
                        .get(platform)
                        .unwrap_or_default()
                        .to_string(),
                    FieldTarget::Social(platform),
                ));
            }
        }
        Step::Itinerary => {
            for (index, session) in record.itinerary.iter().enumerate() {
                let group = Some(format!("Session {}", index + 1));
                let id = session.id.clone();
                let mk = |column| FieldTarget::Session {
                    id: id.clone(),
                    column,
                };
                rows.push(FieldRow::text(
                    group.clone(),
                    "Title",
                    session.title.clone(),
                    mk(SessionColumn::Title),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "Start time",
                    session.start_time.clone(),
                    mk(SessionColumn::Start),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "End time",
                    session.end_time.clone(),
                    mk(SessionColumn::End),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "Speaker",
                    session.speaker.clone(),
                    mk(SessionColumn::Speaker),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "Description",
                    session.description.clone(),
                    mk(SessionColumn::Description),
                ));
                rows.push(FieldRow::text(
                    group,
                    "Room (optional)",
                    session.location.clone().unwrap_or_default(),
                    mk(SessionColumn::Location),
                ));
            }
        }
        Step::Sponsors => {
            for (index, sponsor) in record.sponsors.iter().enumerate() {
                let group = Some(format!("Sponsor {}", index + 1));
                let id = sponsor.id.clone();
                let mk = |column| FieldTarget::Sponsor {
                    id: id.clone(),
                    column,
                };
                rows.push(FieldRow::text(
                    group.clone(),
                    "Sponsor name",
                    sponsor.name.clone(),
                    mk(SponsorColumn::Name),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "Website URL",
                    sponsor.website.clone(),
                    mk(SponsorColumn::Website),
                ));
                rows.push(FieldRow::text(
                    group.clone(),
                    "Description",
                    sponsor.description.clone(),
                    mk(SponsorColumn::Description),
                ));
                for platform in SocialPlatform::ALL {
                    rows.push(FieldRow::text(
                        group.clone(),
                        platform.display_label(),
                        sponsor
                            .social_links
                            .get(platform)
                            .unwrap_or_default()
                            .to_string(),
                        mk(SponsorColumn::Social(platform)),
                    ));
                }
            }
        }
        Step::Survey => {
            for (index, question) in record.survey.iter().enumerate() {
                let group = Some(format!("Question {}", index + 1));
                let id = question.id.clone();
                let mk = |column| FieldTarget::Question {
                    id: id.clone(),
                    column,
                };
                rows.push(FieldRow::text(
                    group.clone(),
                    "Question",
                    question.question.clone(),
                    mk(QuestionColumn::Question),
                ));
                rows.push(FieldRow::choice(
                    group.clone(),
                    "Type",
                    question.kind.display_label().to_string(),
                    mk(QuestionColumn::Kind),
                ));
                rows.push(FieldRow::choice(
                    group,
                    "Required",
                    if question.required { "yes" } else { "no" }.to_string(),
                    mk(QuestionColumn::Required),
                ));
            }
        }
        Step::Polls => {
            for (index, poll) in record.polls.iter().enumerate() {
                let group = Some(format!("Poll {}", index + 1));
                let id = poll.id.clone();
                let mk = |column| FieldTarget::Poll {
                    id: id.clone(),
                    column,
                };
                rows.push(FieldRow::text(
                    group.clone(),
                    "Question",
                    poll.question.clone(),
                    mk(PollColumn::Question),
                ));
                rows.push(FieldRow {
                    group: group.clone(),
                    label: "Options",
                    value: options_summary(&poll.options, option_buffer),
                    target: mk(PollColumn::Options),
                    input: InputKind::OptionList,
                });
                rows.push(FieldRow::text(
                    group,
                    "Graphic (optional)",
                    poll.media.clone().unwrap_or_default(),
                    mk(PollColumn::Media),
                ));
            }
        }
        Step::QrMedia => {
            rows.push(FieldRow::text(
                None,
                "Logo / QR target",
                record.logo.clone().unwrap_or_default(),
                FieldTarget::Logo,
            ));
        }
        Step::Publish => {
            rows.push(FieldRow::choice(
                None,
                "Status",
                if record.status { "Live" } else { "Draft" }.to_string(),
                FieldTarget::Status,
            ));
        }
    }
    rows
}

fn options_summary(options: &[String], buffer: &str) -> String {
    let mut summary = if options.is_empty() {
        "(no options yet)".to_string()
    } else {
        options.join(" · ")
    };
    if !buffer.is_empty() {
        summary.push_str(&format!("  +[{buffer}]"));
    }
    summary
}

/// Text-entry keys against the focused row, in the teacher's edit idiom:
/// plain characters append, Backspace pops, Delete clears. Returns whether
/// the draft changed.
pub(crate) fn apply_text_key(draft: &mut EventDraft, target: &FieldTarget, key: &KeyEvent) -> bool {
    let Some(mut value) = current_text(draft, target) else {
        return false;
    };
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            value.push(ch);
        }
        KeyCode::Backspace => {
            value.pop();
        }
        KeyCode::Delete => value.clear(),
        _ => return false,
    }
    write_text(draft, target, value);
    true
}

fn current_text(draft: &EventDraft, target: &FieldTarget) -> Option<String> {
    let record = draft.record();
    let value = match target {
        FieldTarget::Name => record.name.clone(),
        FieldTarget::Date => record.date.clone(),
        FieldTarget::Location => record.location.clone(),
        FieldTarget::Description => record.description.clone(),
        FieldTarget::Logo => record.logo.clone().unwrap_or_default(),
        FieldTarget::Social(platform) => record
            .social_links
            .get(*platform)
            .unwrap_or_default()
            .to_string(),
        FieldTarget::Session { id, column } => {
            let session = record.itinerary.iter().find(|item| item.id == *id)?;
            match column {
                SessionColumn::Title => session.title.clone(),
                SessionColumn::Start => session.start_time.clone(),
                SessionColumn::End => session.end_time.clone(),
                SessionColumn::Speaker => session.speaker.clone(),
                SessionColumn::Description => session.description.clone(),
                SessionColumn::Location => session.location.clone().unwrap_or_default(),
            }
        }
        FieldTarget::Sponsor { id, column } => {
            let sponsor = record.sponsors.iter().find(|item| item.id == *id)?;
            match column {
                SponsorColumn::Name => sponsor.name.clone(),
                SponsorColumn::Website => sponsor.website.clone(),
                SponsorColumn::Description => sponsor.description.clone(),
                SponsorColumn::Social(platform) => sponsor
                    .social_links
                    .get(*platform)
                    .unwrap_or_default()
                    .to_string(),
            }
        }
        FieldTarget::Question { id, column } => {
            let question = record.survey.iter().find(|item| item.id == *id)?;
            match column {
                QuestionColumn::Question => question.question.clone(),
                QuestionColumn::Kind | QuestionColumn::Required => return None,
            }
        }
        FieldTarget::Poll { id, column } => {
            let poll = record.polls.iter().find(|item| item.id == *id)?;
            match column {
                PollColumn::Question => poll.question.clone(),
                PollColumn::Media => poll.media.clone().unwrap_or_default(),
                PollColumn::Options => return None,
            }
        }
        FieldTarget::Status => return None,
    };
    Some(value)
}

fn write_text(draft: &mut EventDraft, target: &FieldTarget, value: String) {
    match target {
        FieldTarget::Name => draft.set_name(value),
        FieldTarget::Date => draft.set_date(value),
        FieldTarget::Location => draft.set_location(value),
        FieldTarget::Description => draft.set_description(value),
        FieldTarget::Logo => draft.set_logo(Some(value)),
        // Platform comes from the fixed enum, so the string round trip
        // through the draft's checked setter cannot fail.
        FieldTarget::Social(platform) => {
            let _ = draft.set_social_link(platform.as_str(), &value);
        }
        FieldTarget::Session { id, column } => {
            let column = *column;
            draft.update_session(id, |session| match column {
                SessionColumn::Title => session.title = value,
                SessionColumn::Start => session.start_time = value,
                SessionColumn::End => session.end_time = value,
                SessionColumn::Speaker => session.speaker = value,
                SessionColumn::Description => session.description = value,
                SessionColumn::Location => {
                    session.location = Some(value).filter(|text| !text.is_empty());
                }
            });
        }
        FieldTarget::Sponsor { id, column } => match *column {
            SponsorColumn::Social(platform) => {
                let _ = draft.set_sponsor_social_link(id, platform.as_str(), &value);
            }
            column => {
                draft.update_sponsor(id, |sponsor| match column {
                    SponsorColumn::Name => sponsor.name = value,
                    SponsorColumn::Website => sponsor.website = value,
                    SponsorColumn::Description => sponsor.description = value,
                    SponsorColumn::Social(_) => {}
                });
            }
        },
        FieldTarget::Question { id, column } => {
            if *column == QuestionColumn::Question {
                draft.update_question(id, |question| question.question = value);
            }
        }
        FieldTarget::Poll { id, column } => match column {
            PollColumn::Question => {
                draft.update_poll(id, |poll| poll.question = value);
            }
            PollColumn::Media => {
                draft.update_poll(id, |poll| {
                    poll.media = Some(value).filter(|text| !text.is_empty());
                });
            }
            PollColumn::Options => {}
        },
        FieldTarget::Status => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventRecord;

    #[test]
    fn basics_step_lists_scalars_then_social_rows() {
        let draft = EventDraft::open(&EventRecord::blank("e1"));
        let rows = build_rows(&draft, Step::Basics, "");
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].label, "Event name");
        assert!(rows[4..].iter().all(|row| matches!(row.target, FieldTarget::Social(_))));
    }

    #[test]
    fn each_seeded_collection_step_renders_one_group() {
        let draft = EventDraft::open(&EventRecord::blank("e1"));
        let rows = build_rows(&draft, Step::Survey, "");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.group.as_deref() == Some("Question 1")));
        assert_eq!(rows[1].input, InputKind::Choice);
    }

    #[test]
    fn typed_characters_land_in_the_focused_field_only() {
        let mut draft = EventDraft::open(&EventRecord::blank("e1"));
        let session_id = draft.record().itinerary[0].id.clone();
        let target = FieldTarget::Session {
            id: session_id,
            column: SessionColumn::Speaker,
        };
        let key = KeyEvent::new(KeyCode::Char('O'), KeyModifiers::NONE);
        assert!(apply_text_key(&mut draft, &target, &key));
        assert_eq!(draft.record().itinerary[0].speaker, "O");
        assert!(draft.record().itinerary[0].title.is_empty());
        assert!(draft.record().name.is_empty());
    }
}

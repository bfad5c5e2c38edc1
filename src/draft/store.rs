use crate::domain::{EventRecord, ItineraryItem, Poll, SocialPlatform, Sponsor, SurveyQuestion};

use super::{
    collections::{self, RemoveOutcome},
    error::InvalidField,
};

/// The single in-edit working copy of an event record.
///
/// A draft is opened from a record handed in by the caller, mutated
/// exclusively through the operations below, and dropped when the session
/// ends. Saving hands a snapshot back to the registry; the draft never writes
/// to the committed list itself.
#[derive(Debug, Clone)]
pub struct EventDraft {
    record: EventRecord,
    dirty: bool,
}

impl EventDraft {
    /// Clones `source` into a fresh working copy and seeds every empty
    /// sub-item collection with one blank placeholder so each wizard step
    /// renders an editable row immediately. The caller's record is never
    /// aliased; nothing is visible outside until an explicit save.
    pub fn open(source: &EventRecord) -> Self {
        let mut record = source.clone();
        collections::seed_if_empty(&mut record.itinerary);
        collections::seed_if_empty(&mut record.sponsors);
        collections::seed_if_empty(&mut record.survey);
        collections::seed_if_empty(&mut record.polls);
        Self {
            record,
            dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Read-only view of the working copy for rendering.
    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    /// Deep copy of the current working state, the value handed to the
    /// registry on save. Blank placeholder rows are included as-is.
    pub fn snapshot(&self) -> EventRecord {
        self.record.clone()
    }

    /// True once any mutation succeeded since the draft was opened.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // Top-level scalar fields. No validation here: required-field display is
    // the presentation layer's concern.

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.record.name = value.into();
        self.dirty = true;
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.record.date = value.into();
        self.dirty = true;
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.record.location = value.into();
        self.dirty = true;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.record.description = value.into();
        self.dirty = true;
    }

    pub fn set_logo(&mut self, value: Option<String>) {
        self.record.logo = value.filter(|uri| !uri.is_empty());
        self.dirty = true;
    }

    pub fn set_status(&mut self, live: bool) {
        self.record.status = live;
        self.dirty = true;
    }

    /// Replaces one event-level social link. Platform keys outside the fixed
    /// enumeration are rejected and the store stays unchanged.
    pub fn set_social_link(&mut self, platform: &str, value: &str) -> Result<(), InvalidField> {
        let platform = parse_platform(platform)?;
        self.record.social_links.set(platform, value);
        self.dirty = true;
        Ok(())
    }

    /// Sponsor-level counterpart of [`set_social_link`](Self::set_social_link).
    /// A stale sponsor id is a silent no-op like every other item update.
    pub fn set_sponsor_social_link(
        &mut self,
        sponsor_id: &str,
        platform: &str,
        value: &str,
    ) -> Result<(), InvalidField> {
        let platform = parse_platform(platform)?;
        if collections::update(&mut self.record.sponsors, sponsor_id, |sponsor| {
            sponsor.social_links.set(platform, value);
        }) {
            self.dirty = true;
        }
        Ok(())
    }

    // Itinerary sessions.

    pub fn add_session(&mut self) -> String {
        self.dirty = true;
        collections::append(&mut self.record.itinerary)
    }

    pub fn remove_session(&mut self, id: &str) -> RemoveOutcome {
        let outcome = collections::remove(&mut self.record.itinerary, id);
        self.touch_on_hit(outcome)
    }

    pub fn update_session(&mut self, id: &str, apply: impl FnOnce(&mut ItineraryItem)) -> bool {
        let hit = collections::update(&mut self.record.itinerary, id, apply);
        self.dirty |= hit;
        hit
    }

    // Sponsors.

    pub fn add_sponsor(&mut self) -> String {
        self.dirty = true;
        collections::append(&mut self.record.sponsors)
    }

    pub fn remove_sponsor(&mut self, id: &str) -> RemoveOutcome {
        let outcome = collections::remove(&mut self.record.sponsors, id);
        self.touch_on_hit(outcome)
    }

    pub fn update_sponsor(&mut self, id: &str, apply: impl FnOnce(&mut Sponsor)) -> bool {
        let hit = collections::update(&mut self.record.sponsors, id, apply);
        self.dirty |= hit;
        hit
    }

    // Survey questions.

    pub fn add_question(&mut self) -> String {
        self.dirty = true;
        collections::append(&mut self.record.survey)
    }

    pub fn remove_question(&mut self, id: &str) -> RemoveOutcome {
        let outcome = collections::remove(&mut self.record.survey, id);
        self.touch_on_hit(outcome)
    }

    pub fn update_question(&mut self, id: &str, apply: impl FnOnce(&mut SurveyQuestion)) -> bool {
        let hit = collections::update(&mut self.record.survey, id, apply);
        self.dirty |= hit;
        hit
    }

    // Polls.

    pub fn add_poll(&mut self) -> String {
        self.dirty = true;
        collections::append(&mut self.record.polls)
    }

    pub fn remove_poll(&mut self, id: &str) -> RemoveOutcome {
        let outcome = collections::remove(&mut self.record.polls, id);
        self.touch_on_hit(outcome)
    }

    pub fn update_poll(&mut self, id: &str, apply: impl FnOnce(&mut Poll)) -> bool {
        let hit = collections::update(&mut self.record.polls, id, apply);
        self.dirty |= hit;
        hit
    }

    /// Appends an option to the named poll, keeping any vote tally aligned.
    pub fn add_poll_option(&mut self, poll_id: &str, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update_poll(poll_id, |poll| poll.push_option(text))
    }

    /// Removes the option at `index` from the named poll. Positional by
    /// contract: options are a plain ordered sequence without ids.
    pub fn remove_poll_option(&mut self, poll_id: &str, index: usize) -> bool {
        let mut removed = false;
        self.update_poll(poll_id, |poll| removed = poll.remove_option(index));
        removed
    }

    fn touch_on_hit(&mut self, outcome: RemoveOutcome) -> RemoveOutcome {
        if outcome != RemoveOutcome::NotFound {
            self.dirty = true;
        }
        outcome
    }
}

fn parse_platform(raw: &str) -> Result<SocialPlatform, InvalidField> {
    SocialPlatform::parse(raw).ok_or_else(|| {
        InvalidField::new(
            format!("socialLinks.{raw}"),
            "platform must be one of facebook, instagram, twitter, linkedin",
        )
    })
}

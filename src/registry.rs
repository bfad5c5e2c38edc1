use crate::domain::EventRecord;

/// Where the shell should land after cancelling an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTarget {
    /// The draft was never committed; discard it and return to the list.
    List,
    /// A committed version exists; drop the edits and show it read-only.
    Detail,
}

/// Owner of the authoritative committed event list.
///
/// Edit sessions never touch this collection directly: the single write path
/// is [`upsert`](Self::upsert), invoked by the shell when the user saves.
/// That exclusivity is what makes the whole console lock-free.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: Vec<EventRecord>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    /// Replaces the entry with a matching id in place (order preserved), or
    /// appends when the id is new.
    pub fn upsert(&mut self, record: EventRecord) {
        match self.events.iter_mut().find(|event| event.id == record.id) {
            Some(slot) => *slot = record,
            None => self.events.push(record),
        }
    }

    /// Decides the rollback target for a cancelled session: a draft whose id
    /// was never committed simply evaporates, while edits to an existing
    /// record fall back to its last committed version. The working copy is
    /// dropped either way, never merged.
    pub fn cancel_target(&self, draft_id: &str) -> CancelTarget {
        if self.contains(draft_id) {
            CancelTarget::Detail
        } else {
            CancelTarget::List
        }
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_in_place_and_appends_new() {
        let mut registry = EventRegistry::with_events(vec![
            EventRecord::blank("1"),
            EventRecord::blank("2"),
        ]);

        let mut updated = EventRecord::blank("2");
        updated.name = "X".into();
        registry.upsert(updated);
        let ids: Vec<&str> = registry.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(registry.get("2").unwrap().name, "X");

        registry.upsert(EventRecord::blank("3"));
        let ids: Vec<&str> = registry.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn cancel_target_depends_on_membership() {
        let registry = EventRegistry::with_events(vec![EventRecord::blank("2")]);
        assert_eq!(registry.cancel_target("2"), CancelTarget::Detail);
        assert_eq!(registry.cancel_target("never-saved"), CancelTarget::List);
    }
}

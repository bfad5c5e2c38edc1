use uuid::Uuid;

use crate::domain::{ItineraryItem, Poll, QuestionKind, SocialLinks, Sponsor, SurveyQuestion};

/// A sub-item of one of the four repeated collections. Each item carries a
/// stable id and knows its blank placeholder shape.
pub trait DraftItem {
    fn id(&self) -> &str;
    fn placeholder(id: String) -> Self;
}

/// What a remove call actually did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item was removed and other items remain.
    Removed,
    /// The item was the last one; the collection now holds a single fresh
    /// placeholder so the editor keeps at least one visible row.
    Replaced,
    /// No item with that id exists. Callers hand over ids taken from the
    /// current snapshot, so a miss means a stale reference from a re-rendered
    /// view; swallowing it is deliberate, not an error worth surfacing.
    NotFound,
}

pub(crate) fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Appends a blank item with a fresh id and returns that id.
pub(crate) fn append<T: DraftItem>(items: &mut Vec<T>) -> String {
    let id = new_item_id();
    items.push(T::placeholder(id.clone()));
    id
}

/// Removes the item with the given id, replacing the whole collection with a
/// single placeholder when removal would leave it empty.
pub(crate) fn remove<T: DraftItem>(items: &mut Vec<T>, id: &str) -> RemoveOutcome {
    let Some(index) = items.iter().position(|item| item.id() == id) else {
        return RemoveOutcome::NotFound;
    };
    items.remove(index);
    if items.is_empty() {
        items.push(T::placeholder(new_item_id()));
        RemoveOutcome::Replaced
    } else {
        RemoveOutcome::Removed
    }
}

/// Applies `apply` to the item with the given id. Returns false on a stale
/// id, leaving every other item untouched.
pub(crate) fn update<T: DraftItem>(
    items: &mut [T],
    id: &str,
    apply: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            apply(item);
            true
        }
        None => false,
    }
}

/// The seeding rule: an empty collection gains exactly one placeholder so the
/// form always renders an editable row.
pub(crate) fn seed_if_empty<T: DraftItem>(items: &mut Vec<T>) {
    if items.is_empty() {
        items.push(T::placeholder(new_item_id()));
    }
}

impl DraftItem for ItineraryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            speaker: String::new(),
            description: String::new(),
            location: None,
        }
    }
}

impl DraftItem for Sponsor {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            website: String::new(),
            description: String::new(),
            logo: None,
            social_links: SocialLinks::new(),
        }
    }
}

impl DraftItem for SurveyQuestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            question: String::new(),
            kind: QuestionKind::Text,
            required: false,
            response_count: None,
        }
    }
}

impl DraftItem for Poll {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            question: String::new(),
            options: Vec::new(),
            votes: None,
            media: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, title: &str) -> ItineraryItem {
        let mut item = ItineraryItem::placeholder(id.to_string());
        item.title = title.to_string();
        item
    }

    #[test]
    fn removing_the_last_item_leaves_a_placeholder() {
        let mut items = vec![session("a", "Opening")];
        assert_eq!(remove(&mut items, "a"), RemoveOutcome::Replaced);
        assert_eq!(items.len(), 1);
        assert!(items[0].title.is_empty());
        assert_ne!(items[0].id, "a");
    }

    #[test]
    fn removing_a_stale_id_is_a_no_op() {
        let mut items = vec![session("a", "Opening"), session("b", "Keynote")];
        assert_eq!(remove(&mut items, "zz"), RemoveOutcome::NotFound);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Opening");
    }

    #[test]
    fn add_then_remove_restores_only_nonempty_collections() {
        let mut items = vec![session("a", "Opening")];
        let before = items.clone();
        let added = append(&mut items);
        assert_eq!(items.len(), 2);
        assert_eq!(remove(&mut items, &added), RemoveOutcome::Removed);
        assert_eq!(items, before);

        // Starting from empty the round trip yields a placeholder, not the
        // original empty collection.
        let mut empty: Vec<ItineraryItem> = Vec::new();
        let added = append(&mut empty);
        assert_eq!(remove(&mut empty, &added), RemoveOutcome::Replaced);
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn update_misses_leave_every_item_untouched() {
        let mut items = vec![session("a", "Opening"), session("b", "Keynote")];
        assert!(!update(&mut items, "zz", |item| item.title = "X".into()));
        assert_eq!(items[0].title, "Opening");
        assert_eq!(items[1].title, "Keynote");
        assert!(update(&mut items, "b", |item| item.speaker = "Omer".into()));
        assert_eq!(items[1].speaker, "Omer");
        assert!(items[0].speaker.is_empty());
    }

    #[test]
    fn seeding_only_touches_empty_collections() {
        let mut empty: Vec<Poll> = Vec::new();
        seed_if_empty(&mut empty);
        assert_eq!(empty.len(), 1);
        assert!(empty[0].question.is_empty());

        let mut filled = vec![Poll::placeholder("p".into())];
        filled[0].question = "Enjoying the talk?".into();
        seed_if_empty(&mut filled);
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].question, "Enjoying the talk?");
    }
}

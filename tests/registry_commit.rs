use eventdesk::{CancelTarget, EventDraft, EventRecord, EventRegistry};

fn named(id: &str, name: &str) -> EventRecord {
    let mut event = EventRecord::blank(id);
    event.name = name.to_string();
    event
}

#[test]
fn saving_an_edit_replaces_the_committed_version_in_place() {
    let mut registry =
        EventRegistry::with_events(vec![named("1", "Breakfast"), named("2", "Summit")]);
    let mut draft = EventDraft::open(registry.get("1").unwrap());
    draft.set_name("Breakfast 2026");

    registry.upsert(draft.snapshot());

    let names: Vec<&str> = registry.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, ["Breakfast 2026", "Summit"]);
}

#[test]
fn saving_a_new_draft_appends_it() {
    let mut registry = EventRegistry::with_events(vec![named("1", "Breakfast")]);
    let draft = EventDraft::open(&EventRecord::create());
    let draft_id = draft.id().to_string();

    registry.upsert(draft.snapshot());

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(&draft_id).unwrap().name, "New Event");
    // Seeded placeholder rows are committed as-is.
    assert_eq!(registry.get(&draft_id).unwrap().itinerary.len(), 1);
}

#[test]
fn cancelling_a_never_committed_draft_falls_back_to_the_list() {
    let registry = EventRegistry::with_events(vec![named("1", "Breakfast")]);
    let mut draft = EventDraft::open(&EventRecord::create());
    draft.set_name("Abandoned");

    assert_eq!(registry.cancel_target(draft.id()), CancelTarget::List);
    drop(draft);
    assert_eq!(registry.len(), 1);
}

#[test]
fn cancelling_an_edit_keeps_the_last_committed_version() {
    let mut registry = EventRegistry::with_events(vec![named("1", "Breakfast")]);
    let mut draft = EventDraft::open(registry.get("1").unwrap());
    draft.set_name("Mangled beyond repair");
    draft.add_sponsor();

    assert_eq!(registry.cancel_target(draft.id()), CancelTarget::Detail);
    drop(draft);
    assert_eq!(registry.get("1").unwrap().name, "Breakfast");
    assert!(registry.get("1").unwrap().sponsors.is_empty());

    // A later save of a fresh draft still works against the same record.
    let mut retry = EventDraft::open(registry.get("1").unwrap());
    retry.set_name("Breakfast, take two");
    registry.upsert(retry.snapshot());
    assert_eq!(registry.get("1").unwrap().name, "Breakfast, take two");
}

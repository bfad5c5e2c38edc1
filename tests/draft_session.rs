use eventdesk::{EventDraft, EventRecord, QuestionKind, RemoveOutcome};

fn committed_event() -> EventRecord {
    let json = serde_json::json!({
        "id": "1",
        "name": "Barclays Business Breakfast",
        "date": "2025-10-23T08:50",
        "location": "Racquet Club",
        "description": "A morning of networking and business insights.",
        "itinerary": [
            {
                "id": "s1",
                "title": "Introduction",
                "startTime": "08:00",
                "endTime": "09:00",
                "speaker": "Omer Motiwala",
                "description": "Opening remarks."
            }
        ],
        "sponsors": [
            { "id": "sp1", "name": "Axel", "website": "https://axel.com", "description": "Tech partner." }
        ],
        "survey": [
            { "id": "q1", "question": "Rate the coffee", "type": "Text", "required": true }
        ],
        "polls": [
            { "id": "p1", "question": "Enjoying the talk?", "options": ["Yes", "No"], "votes": [12, 3] }
        ],
        "status": true
    });
    serde_json::from_value(json).expect("fixture deserializes")
}

#[test]
fn opening_a_blank_record_seeds_every_collection() {
    let draft = EventDraft::open(&EventRecord::blank("fresh"));
    let record = draft.record();
    assert_eq!(record.itinerary.len(), 1);
    assert_eq!(record.sponsors.len(), 1);
    assert_eq!(record.survey.len(), 1);
    assert_eq!(record.polls.len(), 1);
    assert!(record.itinerary[0].title.is_empty());
    assert_eq!(record.survey[0].kind, QuestionKind::Text);
    assert!(!draft.is_dirty());
}

#[test]
fn opening_a_populated_record_keeps_existing_items() {
    let draft = EventDraft::open(&committed_event());
    assert_eq!(draft.record().itinerary.len(), 1);
    assert_eq!(draft.record().itinerary[0].title, "Introduction");
}

#[test]
fn removing_the_last_item_refills_a_placeholder() {
    let mut draft = EventDraft::open(&committed_event());
    assert_eq!(draft.remove_sponsor("sp1"), RemoveOutcome::Replaced);
    let sponsors = &draft.record().sponsors;
    assert_eq!(sponsors.len(), 1);
    assert_ne!(sponsors[0].id, "sp1");
    assert!(sponsors[0].name.is_empty());
}

#[test]
fn stale_ids_are_silent_no_ops() {
    let mut draft = EventDraft::open(&committed_event());
    let before = draft.snapshot();
    assert_eq!(draft.remove_session("ghost"), RemoveOutcome::NotFound);
    assert!(!draft.update_question("ghost", |question| question.required = false));
    assert_eq!(draft.snapshot(), before);
    assert!(!draft.is_dirty());
}

#[test]
fn updates_touch_exactly_one_item() {
    let mut draft = EventDraft::open(&committed_event());
    draft.add_session();
    let second = draft.record().itinerary[1].id.clone();
    assert!(draft.update_session(&second, |session| session.title = "Panel".into()));
    assert_eq!(draft.record().itinerary[0].title, "Introduction");
    assert_eq!(draft.record().itinerary[1].title, "Panel");
}

#[test]
fn invalid_social_platform_is_rejected_and_leaves_the_draft_alone() {
    let mut draft = EventDraft::open(&committed_event());
    let err = draft
        .set_social_link("myspace", "@breakfast")
        .expect_err("unknown platform must fail");
    assert!(err.to_string().contains("socialLinks.myspace"));
    assert!(!draft.is_dirty());

    draft
        .set_social_link("Twitter", "@breakfast")
        .expect("known platform, case-insensitive");
    assert_eq!(
        draft.record().social_links.get(eventdesk::SocialPlatform::Twitter),
        Some("@breakfast")
    );
}

#[test]
fn poll_votes_stay_aligned_with_options() {
    let mut draft = EventDraft::open(&committed_event());
    assert!(draft.add_poll_option("p1", "Maybe"));
    let poll = &draft.record().polls[0];
    assert_eq!(poll.options, ["Yes", "No", "Maybe"]);
    assert_eq!(poll.votes.as_deref(), Some(&[12, 3, 0][..]));

    assert!(draft.remove_poll_option("p1", 0));
    let poll = &draft.record().polls[0];
    assert_eq!(poll.options, ["No", "Maybe"]);
    assert_eq!(poll.votes.as_deref(), Some(&[3, 0][..]));

    assert!(!draft.remove_poll_option("p1", 9));
}

#[test]
fn snapshots_do_not_alias_the_working_copy() {
    let mut draft = EventDraft::open(&committed_event());
    let snapshot = draft.snapshot();
    draft.set_name("Renamed");
    assert_eq!(snapshot.name, "Barclays Business Breakfast");
    assert_eq!(draft.record().name, "Renamed");
    assert!(draft.is_dirty());
}

#[test]
fn wire_format_round_trips_through_camel_case() {
    let event = committed_event();
    let value = serde_json::to_value(&event).expect("serializes");
    assert_eq!(value["itinerary"][0]["startTime"], "08:00");
    assert_eq!(value["survey"][0]["type"], "Text");
    let back: EventRecord = serde_json::from_value(value).expect("deserializes");
    assert_eq!(back, event);
}

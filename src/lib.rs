#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod draft;
mod presentation;
mod registry;

pub use app::{EventConsole, UiOptions};
pub use domain::{
    EventRecord, ItineraryItem, Poll, QuestionKind, SocialLinks, SocialPlatform, Sponsor,
    SurveyQuestion,
};
pub use draft::{DraftItem, EventDraft, InvalidField, RemoveOutcome, Step, StepCursor};
pub use registry::{CancelTarget, EventRegistry};

pub mod prelude {
    pub use super::{EventConsole, EventRecord, UiOptions};
}

mod collections;
mod error;
mod steps;
mod store;

pub use collections::{DraftItem, RemoveOutcome};
pub use error::InvalidField;
pub use steps::{Step, StepCursor};
pub use store::EventDraft;

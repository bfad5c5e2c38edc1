mod event;

pub use event::{
    EventRecord, ItineraryItem, Poll, QuestionKind, SocialLinks, SocialPlatform, Sponsor,
    SurveyQuestion,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of social platforms an event (or sponsor) may link to.
/// Keys outside this enumeration are not part of the record contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == normalized)
    }

    pub fn display_label(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered platform → handle/URL mapping. An absent entry and an empty string
/// are the same "not set" state, so writes of empty values drop the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(IndexMap<SocialPlatform, String>);

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, platform: SocialPlatform, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.0.shift_remove(&platform);
        } else {
            self.0.insert(platform, value);
        }
    }

    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.0.iter().map(|(platform, value)| (*platform, value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub speaker: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub website: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "SocialLinks::is_empty")]
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Text,
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 2] = [QuestionKind::Text, QuestionKind::MultipleChoice];

    pub fn display_label(self) -> &'static str {
        match self {
            QuestionKind::Text => "Text",
            QuestionKind::MultipleChoice => "Multiple Choice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl Poll {
    /// Appends an option. When a vote tally is present a zero entry is
    /// appended alongside so `votes[i]` stays the count for `options[i]`.
    pub fn push_option(&mut self, text: impl Into<String>) {
        self.options.push(text.into());
        if let Some(votes) = self.votes.as_mut() {
            votes.push(0);
        }
    }

    /// Removes the option at `index` together with its tally. Options carry
    /// no ids of their own, so removal is strictly positional. Out-of-range
    /// indices are ignored.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        if let Some(votes) = self.votes.as_mut()
            && index < votes.len()
        {
            votes.remove(index);
        }
        true
    }
}

/// The root entity: one event with its itinerary, sponsors, survey and polls.
///
/// Serialized field names follow the camelCase wire shape the surrounding
/// tooling exchanges (`startTime`, `socialLinks`, survey `type`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "SocialLinks::is_empty")]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub survey: Vec<SurveyQuestion>,
    #[serde(default)]
    pub polls: Vec<Poll>,
    pub status: bool,
}

impl EventRecord {
    /// An empty record with the caller-chosen id. Collections start empty;
    /// a draft session seeds them with placeholders when editing begins.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            date: String::new(),
            location: String::new(),
            logo: None,
            description: String::new(),
            social_links: SocialLinks::new(),
            itinerary: Vec::new(),
            sponsors: Vec::new(),
            survey: Vec::new(),
            polls: Vec::new(),
            status: false,
        }
    }

    /// A brand-new unsaved event with a freshly generated id, as handed to
    /// the wizard when the user asks to create one.
    pub fn create() -> Self {
        let mut record = Self::blank(Uuid::new_v4().to_string());
        record.name = "New Event".to_string();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_platform_parse_is_case_insensitive() {
        assert_eq!(
            SocialPlatform::parse("LinkedIn"),
            Some(SocialPlatform::Linkedin)
        );
        assert_eq!(SocialPlatform::parse(" twitter "), Some(SocialPlatform::Twitter));
        assert_eq!(SocialPlatform::parse("myspace"), None);
    }

    #[test]
    fn empty_social_value_clears_the_entry() {
        let mut links = SocialLinks::new();
        links.set(SocialPlatform::Facebook, "https://fb.com/acme");
        assert_eq!(links.get(SocialPlatform::Facebook), Some("https://fb.com/acme"));
        links.set(SocialPlatform::Facebook, "");
        assert!(links.is_empty());
    }

    #[test]
    fn poll_option_ops_keep_votes_aligned() {
        let mut poll = Poll {
            id: "p1".into(),
            question: "Enjoying the talk?".into(),
            options: vec!["Yes".into(), "No".into()],
            votes: Some(vec![7, 2]),
            media: None,
        };
        poll.push_option("Maybe");
        assert_eq!(poll.votes.as_deref(), Some([7, 2, 0].as_slice()));
        assert!(poll.remove_option(0));
        assert_eq!(poll.options, vec!["No".to_string(), "Maybe".to_string()]);
        assert_eq!(poll.votes.as_deref(), Some([2, 0].as_slice()));
        assert!(!poll.remove_option(9));
    }

    #[test]
    fn survey_type_uses_original_wire_labels() {
        let question = SurveyQuestion {
            id: "q1".into(),
            question: "Rate the coffee".into(),
            kind: QuestionKind::MultipleChoice,
            required: true,
            response_count: None,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "Multiple Choice");
    }
}

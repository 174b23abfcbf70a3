use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of exercise an activity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    PronunciationRecognitionActivity,
    WritingRecognitionActivity,
    SentenceMatchingActivity,
    ImageMatchingActivity,
}

/// How many items an activity type holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPolicy {
    /// Exactly one item, managed by the form.
    Single,
    /// Any number of items, managed by the user.
    Multi,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::PronunciationRecognitionActivity,
        ActivityType::WritingRecognitionActivity,
        ActivityType::SentenceMatchingActivity,
        ActivityType::ImageMatchingActivity,
    ];

    pub fn item_policy(&self) -> ItemPolicy {
        match self {
            ActivityType::PronunciationRecognitionActivity
            | ActivityType::WritingRecognitionActivity => ItemPolicy::Single,
            ActivityType::SentenceMatchingActivity | ActivityType::ImageMatchingActivity => {
                ItemPolicy::Multi
            }
        }
    }

    pub fn is_single_item(&self) -> bool {
        self.item_policy() == ItemPolicy::Single
    }

    /// Identifier sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::PronunciationRecognitionActivity => "PronunciationRecognitionActivity",
            ActivityType::WritingRecognitionActivity => "WritingRecognitionActivity",
            ActivityType::SentenceMatchingActivity => "SentenceMatchingActivity",
            ActivityType::ImageMatchingActivity => "ImageMatchingActivity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::PronunciationRecognitionActivity => "Pronunciation Recognition",
            ActivityType::WritingRecognitionActivity => "Writing Recognition",
            ActivityType::SentenceMatchingActivity => "Sentence Matching",
            ActivityType::ImageMatchingActivity => "Image Matching",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|activity_type| activity_type.as_str() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

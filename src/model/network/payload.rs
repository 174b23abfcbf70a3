use super::ApiError;
use crate::model::{ActivityDraft, ItemDraft};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// JSON body of the activity-creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPayload {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub gives_experience: bool,
    pub challenge: Option<u32>,
    pub phonemes: String,
}

impl<F> From<&ActivityDraft<F>> for ActivityPayload {
    fn from(draft: &ActivityDraft<F>) -> Self {
        Self {
            activity_type: draft
                .activity_type
                .map(|activity_type| activity_type.as_str().to_string())
                .unwrap_or_default(),
            description: draft.description.clone(),
            gives_experience: draft.gives_experience,
            challenge: draft.challenge,
            phonemes: draft.phonemes.clone(),
        }
    }
}

/// Identifier the backend assigned to a created activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        ActivityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedActivity {
    pub id: ActivityId,
    pub body: Value,
}

impl CreatedActivity {
    /// Accepts string and numeric ids.
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let id = match body.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return Err(ApiError::MissingId),
        };
        Ok(Self {
            id: ActivityId(id),
            body,
        })
    }
}

/// Multipart body of one item-creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpload<F> {
    pub activity: ActivityId,
    pub text: String,
    pub text_translation: String,
    pub audio: Option<F>,
    pub image: Option<F>,
}

impl<F: Clone> ItemUpload<F> {
    pub fn new(activity: &ActivityId, item: &ItemDraft<F>) -> Self {
        Self {
            activity: activity.clone(),
            text: item.text.clone(),
            text_translation: item.text_translation.clone(),
            audio: item.audio.clone(),
            image: item.image.clone(),
        }
    }
}

impl<F> ItemUpload<F> {
    pub fn text_parts(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("text", self.text.as_str()),
            ("text_translation", self.text_translation.as_str()),
            ("activity", self.activity.as_str()),
        ]
    }

    /// Only the files that were selected; unset handles produce no part.
    pub fn file_parts(&self) -> Vec<(&'static str, &F)> {
        [("audio", self.audio.as_ref()), ("image", self.image.as_ref())]
            .into_iter()
            .filter_map(|(name, file)| file.map(|file| (name, file)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityType;
    use serde_json::json;

    #[test]
    fn activity_payload_carries_all_scalars() {
        let draft = ActivityDraft::<()> {
            activity_type: Some(ActivityType::WritingRecognitionActivity),
            description: "Write the word".to_string(),
            gives_experience: false,
            challenge: Some(7),
            phonemes: "h ə l oʊ".to_string(),
            items: vec![ItemDraft::default()],
        };

        let body = serde_json::to_value(ActivityPayload::from(&draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "WritingRecognitionActivity",
                "description": "Write the word",
                "gives_experience": false,
                "challenge": 7,
                "phonemes": "h ə l oʊ",
            })
        );
    }

    #[test]
    fn created_activity_accepts_string_and_number_ids() {
        let created = CreatedActivity::from_json(json!({"id": "A1", "type": "x"})).unwrap();
        assert_eq!(created.id, ActivityId::new("A1"));

        let created = CreatedActivity::from_json(json!({"id": 12})).unwrap();
        assert_eq!(created.id.as_str(), "12");
    }

    #[test]
    fn created_activity_without_id_fails() {
        assert_eq!(
            CreatedActivity::from_json(json!({"detail": "ok"})),
            Err(ApiError::MissingId)
        );
        assert_eq!(
            CreatedActivity::from_json(json!({"id": ""})),
            Err(ApiError::MissingId)
        );
        assert_eq!(
            CreatedActivity::from_json(json!({"id": null})),
            Err(ApiError::MissingId)
        );
    }

    #[test]
    fn item_upload_omits_unset_files() {
        let item = ItemDraft::new("Katze", "cat").with_audio("katze.mp3");
        let upload = ItemUpload::new(&ActivityId::new("A1"), &item);

        assert_eq!(
            upload.text_parts(),
            vec![
                ("text", "Katze"),
                ("text_translation", "cat"),
                ("activity", "A1")
            ]
        );
        assert_eq!(upload.file_parts(), vec![("audio", &"katze.mp3")]);
    }
}

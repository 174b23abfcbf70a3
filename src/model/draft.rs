use super::{is_visible, ActivityType, Field, FieldPath, FileHandle, FormError};
use uuid::Uuid;

/// Stable identity of an item across reorders and removals.
pub type ItemId = Uuid;

/// A raw value coming from a form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<F> {
    Text(String),
    Flag(bool),
    File(Option<F>),
}

impl<F> FieldValue<F> {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::File(_) => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft<F> {
    pub id: ItemId,
    pub text: String,
    pub text_translation: String,
    pub audio: Option<F>,
    pub image: Option<F>,
}

impl<F> Default for ItemDraft<F> {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            text_translation: String::new(),
            audio: None,
            image: None,
        }
    }
}

impl<F> ItemDraft<F> {
    pub fn new(text: impl Into<String>, text_translation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            text_translation: text_translation.into(),
            audio: None,
            image: None,
        }
    }

    pub fn with_audio(mut self, audio: F) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_image(mut self, image: F) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
            && self.text_translation.is_empty()
            && self.audio.is_none()
            && self.image.is_none()
    }
}

/// The in-progress activity and its items.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft<F> {
    pub activity_type: Option<ActivityType>,
    pub description: String,
    pub gives_experience: bool,
    pub challenge: Option<u32>,
    pub phonemes: String,
    pub items: Vec<ItemDraft<F>>,
}

impl<F> Default for ActivityDraft<F> {
    fn default() -> Self {
        Self {
            activity_type: None,
            description: String::new(),
            gives_experience: true,
            challenge: None,
            phonemes: String::new(),
            items: Vec::new(),
        }
    }
}

impl<F: FileHandle> ActivityDraft<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type. Single-item types always start over with one blank item.
    pub fn change_type(&mut self, activity_type: Option<ActivityType>) {
        self.activity_type = activity_type;
        if activity_type.is_some_and(|activity_type| activity_type.is_single_item()) {
            self.items = vec![ItemDraft::default()];
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(ItemDraft::default());
    }

    /// Removes the item at `index`. Out of range indexes leave the items untouched.
    pub fn remove_item(&mut self, index: usize) -> Option<ItemDraft<F>> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn apply_field_edit(
        &mut self,
        path: FieldPath,
        value: FieldValue<F>,
    ) -> Result<(), FormError> {
        let field = path.field();
        if !is_visible(self.activity_type, field) {
            return Err(FormError::HiddenField {
                field,
                activity_type: self.activity_type,
            });
        }

        match path {
            FieldPath::Activity(field) => self.edit_activity_field(field, value),
            FieldPath::Item { index, field } => {
                let len = self.items.len();
                let item = self
                    .items
                    .get_mut(index)
                    .ok_or(FormError::ItemOutOfRange { index, len })?;
                edit_item_field(item, field, value)
            }
        }
    }

    fn edit_activity_field(&mut self, field: Field, value: FieldValue<F>) -> Result<(), FormError> {
        match (field, value) {
            (Field::Type, FieldValue::Text(raw)) => {
                let activity_type = if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse::<ActivityType>().map_err(|e| FormError::InvalidValue {
                        field,
                        reason: e.to_string(),
                    })?)
                };
                self.change_type(activity_type);
            }
            (Field::Description, FieldValue::Text(raw)) => self.description = raw,
            (Field::Phonemes, FieldValue::Text(raw)) => self.phonemes = raw,
            (Field::GivesExperience, FieldValue::Flag(flag)) => self.gives_experience = flag,
            (Field::GivesExperience, FieldValue::Text(raw)) => {
                self.gives_experience =
                    raw.parse::<bool>().map_err(|e| FormError::InvalidValue {
                        field,
                        reason: e.to_string(),
                    })?;
            }
            (Field::Challenge, FieldValue::Text(raw)) => {
                let raw = raw.trim();
                self.challenge = if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse::<u32>().map_err(|_| FormError::InvalidValue {
                        field,
                        reason: format!("expected a non-negative integer, got {:?}", raw),
                    })?)
                };
            }
            (field, value) => return Err(mismatch(field, &value)),
        }
        Ok(())
    }

    /// A frozen copy for submission with fields hidden by the current type cleared.
    pub fn submission_snapshot(&self) -> Self {
        let mut snapshot = self.clone();
        if !is_visible(self.activity_type, Field::Phonemes) {
            snapshot.phonemes.clear();
        }
        if !is_visible(self.activity_type, Field::ItemImage) {
            for item in snapshot.items.iter_mut() {
                item.image = None;
            }
        }
        snapshot
    }
}

fn edit_item_field<F>(
    item: &mut ItemDraft<F>,
    field: Field,
    value: FieldValue<F>,
) -> Result<(), FormError> {
    match (field, value) {
        (Field::ItemText, FieldValue::Text(raw)) => item.text = raw,
        (Field::ItemTextTranslation, FieldValue::Text(raw)) => item.text_translation = raw,
        (Field::ItemAudio, FieldValue::File(file)) => item.audio = file,
        (Field::ItemImage, FieldValue::File(file)) => item.image = file,
        (field, value) => return Err(mismatch(field, &value)),
    }
    Ok(())
}

fn mismatch<F>(field: Field, value: &FieldValue<F>) -> FormError {
    FormError::InvalidValue {
        field,
        reason: format!("{} values are not accepted", value.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestFile(&'static str);

    impl FileHandle for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn draft_with_items(activity_type: ActivityType, count: usize) -> ActivityDraft<TestFile> {
        let mut draft = ActivityDraft::new();
        draft.change_type(Some(activity_type));
        draft.items = (0..count)
            .map(|i| ItemDraft::new(format!("text {}", i), format!("translation {}", i)))
            .collect();
        draft
    }

    #[test]
    fn default_draft() {
        let draft = ActivityDraft::<TestFile>::new();
        assert_eq!(draft.activity_type, None);
        assert!(draft.gives_experience);
        assert_eq!(draft.challenge, None);
        assert!(draft.items.is_empty());
    }

    #[test]
    fn single_item_type_resets_items() {
        for activity_type in [
            ActivityType::PronunciationRecognitionActivity,
            ActivityType::WritingRecognitionActivity,
        ] {
            for prior in [0, 1, 3] {
                let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, prior);
                draft.change_type(Some(activity_type));
                assert_eq!(draft.items.len(), 1);
                assert!(draft.items[0].is_blank());
            }
        }
    }

    #[test]
    fn multi_item_type_keeps_items() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 2);
        draft.change_type(Some(ActivityType::ImageMatchingActivity));
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[1].text, "text 1");
    }

    #[test]
    fn add_item_appends_blank() {
        let mut draft = draft_with_items(ActivityType::ImageMatchingActivity, 2);
        draft.add_item();
        assert_eq!(draft.items.len(), 3);
        assert!(draft.items[2].is_blank());
        assert_eq!(draft.items[0].text, "text 0");
    }

    #[test]
    fn remove_item_preserves_order() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 3);
        let removed = draft.remove_item(1).unwrap();
        assert_eq!(removed.text, "text 1");
        let texts: Vec<_> = draft.items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["text 0", "text 2"]);
    }

    #[test]
    fn remove_item_out_of_range_is_noop() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 2);
        let before = draft.clone();
        assert!(draft.remove_item(2).is_none());
        assert!(draft.remove_item(usize::MAX).is_none());
        assert_eq!(draft, before);
    }

    #[test]
    fn item_ids_follow_items() {
        let mut draft = draft_with_items(ActivityType::ImageMatchingActivity, 3);
        draft.add_item();
        let ids: Vec<ItemId> = draft.items.iter().map(|item| item.id).collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 4);

        draft.remove_item(1);
        let remaining: Vec<ItemId> = draft.items.iter().map(|item| item.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);

        draft.change_type(Some(ActivityType::PronunciationRecognitionActivity));
        assert!(!ids.contains(&draft.items[0].id));
    }

    #[test]
    fn edit_type_by_name_resets_items() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 2);
        draft
            .apply_field_edit(
                FieldPath::Activity(Field::Type),
                FieldValue::text("WritingRecognitionActivity"),
            )
            .unwrap();
        assert_eq!(
            draft.activity_type,
            Some(ActivityType::WritingRecognitionActivity)
        );
        assert_eq!(draft.items.len(), 1);

        draft
            .apply_field_edit(FieldPath::Activity(Field::Type), FieldValue::text(""))
            .unwrap();
        assert_eq!(draft.activity_type, None);
    }

    #[test]
    fn edit_challenge_parses_integer() {
        let mut draft = ActivityDraft::<TestFile>::new();
        let path = FieldPath::Activity(Field::Challenge);
        draft.apply_field_edit(path, FieldValue::text("42")).unwrap();
        assert_eq!(draft.challenge, Some(42));

        draft.apply_field_edit(path, FieldValue::text("")).unwrap();
        assert_eq!(draft.challenge, None);

        let err = draft
            .apply_field_edit(path, FieldValue::text("forty"))
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidValue {
                field: Field::Challenge,
                ..
            }
        ));
    }

    #[test]
    fn edit_gives_experience() {
        let mut draft = ActivityDraft::<TestFile>::new();
        let path = FieldPath::Activity(Field::GivesExperience);
        draft.apply_field_edit(path, FieldValue::Flag(false)).unwrap();
        assert!(!draft.gives_experience);
        draft.apply_field_edit(path, FieldValue::text("true")).unwrap();
        assert!(draft.gives_experience);
    }

    #[test]
    fn edit_item_fields() {
        let mut draft = draft_with_items(ActivityType::ImageMatchingActivity, 2);
        draft
            .apply_field_edit(
                FieldPath::item(1, Field::ItemText),
                FieldValue::text("Hund"),
            )
            .unwrap();
        draft
            .apply_field_edit(
                FieldPath::item(1, Field::ItemImage),
                FieldValue::File(Some(TestFile("dog.png"))),
            )
            .unwrap();
        assert_eq!(draft.items[1].text, "Hund");
        assert_eq!(draft.items[1].image, Some(TestFile("dog.png")));
        assert_eq!(draft.items[0].text, "text 0");
    }

    #[test]
    fn edit_out_of_range_item_fails() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 1);
        let err = draft
            .apply_field_edit(FieldPath::item(4, Field::ItemText), FieldValue::text("x"))
            .unwrap_err();
        assert_eq!(err, FormError::ItemOutOfRange { index: 4, len: 1 });
    }

    #[test]
    fn edit_hidden_field_fails() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 1);
        let err = draft
            .apply_field_edit(FieldPath::Activity(Field::Phonemes), FieldValue::text("a"))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::HiddenField {
                field: Field::Phonemes,
                activity_type: Some(ActivityType::SentenceMatchingActivity),
            }
        );

        let err = draft
            .apply_field_edit(
                FieldPath::item(0, Field::ItemImage),
                FieldValue::File(Some(TestFile("a.png"))),
            )
            .unwrap_err();
        assert!(matches!(err, FormError::HiddenField { .. }));
    }

    #[test]
    fn edit_with_wrong_value_kind_fails() {
        let mut draft = draft_with_items(ActivityType::SentenceMatchingActivity, 1);
        let err = draft
            .apply_field_edit(FieldPath::item(0, Field::ItemAudio), FieldValue::text("a"))
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidValue {
                field: Field::ItemAudio,
                ..
            }
        ));
    }

    #[test]
    fn snapshot_clears_hidden_fields() {
        let mut draft = draft_with_items(ActivityType::ImageMatchingActivity, 1);
        draft.items[0].image = Some(TestFile("cat.png"));
        draft.phonemes = "kat".to_string();

        let snapshot = draft.submission_snapshot();
        assert_eq!(snapshot.items[0].image, Some(TestFile("cat.png")));
        assert_eq!(snapshot.phonemes, "");

        draft.activity_type = Some(ActivityType::SentenceMatchingActivity);
        let snapshot = draft.submission_snapshot();
        assert_eq!(snapshot.items[0].image, None);
    }
}

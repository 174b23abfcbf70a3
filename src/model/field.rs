use super::{ActivityType, FormError};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Every input the form can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Type,
    Description,
    GivesExperience,
    Challenge,
    Phonemes,
    ItemText,
    ItemTextTranslation,
    ItemAudio,
    ItemImage,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Description => "description",
            Field::GivesExperience => "gives_experience",
            Field::Challenge => "challenge",
            Field::Phonemes => "phonemes",
            Field::ItemText => "text",
            Field::ItemTextTranslation => "text_translation",
            Field::ItemAudio => "audio",
            Field::ItemImage => "image",
        }
    }

    pub fn is_item_field(&self) -> bool {
        matches!(
            self,
            Field::ItemText | Field::ItemTextTranslation | Field::ItemAudio | Field::ItemImage
        )
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Field::ItemAudio | Field::ItemImage)
    }

    fn activity_field(name: &str) -> Option<Field> {
        match name {
            "type" => Some(Field::Type),
            "description" => Some(Field::Description),
            "gives_experience" => Some(Field::GivesExperience),
            "challenge" => Some(Field::Challenge),
            "phonemes" => Some(Field::Phonemes),
            _ => None,
        }
    }

    fn item_field(name: &str) -> Option<Field> {
        match name {
            "text" => Some(Field::ItemText),
            "text_translation" => Some(Field::ItemTextTranslation),
            "audio" => Some(Field::ItemAudio),
            "image" => Some(Field::ItemImage),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of an editable value inside a draft.
///
/// Parsed from the input names the form renders: `description` for activity
/// scalars, `item.text` for the first item and `items.2.text` for any item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Activity(Field),
    Item { index: usize, field: Field },
}

impl FieldPath {
    pub fn item(index: usize, field: Field) -> Self {
        FieldPath::Item { index, field }
    }

    pub fn field(&self) -> Field {
        match self {
            FieldPath::Activity(field) => *field,
            FieldPath::Item { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Activity(field) => write!(f, "{}", field),
            FieldPath::Item { index, field } => write!(f, "items.{}.{}", index, field),
        }
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || FormError::UnknownField(path.to_string());
        let parts: Vec<&str> = path.split('.').collect();

        match parts.as_slice() {
            [name] => Field::activity_field(name)
                .map(FieldPath::Activity)
                .ok_or_else(unknown),
            ["item", name] => Field::item_field(name)
                .map(|field| FieldPath::item(0, field))
                .ok_or_else(unknown),
            ["items", index, name] => {
                let index = index.parse::<usize>().map_err(|_| unknown())?;
                Field::item_field(name)
                    .map(|field| FieldPath::item(index, field))
                    .ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }
}

/// The inputs rendered and collected for an activity type.
pub fn visible_fields(activity_type: Option<ActivityType>) -> BTreeSet<Field> {
    let mut fields: BTreeSet<Field> = [
        Field::Type,
        Field::Description,
        Field::GivesExperience,
        Field::Challenge,
        Field::ItemText,
        Field::ItemTextTranslation,
        Field::ItemAudio,
    ]
    .into_iter()
    .collect();

    match activity_type {
        Some(ActivityType::WritingRecognitionActivity) => {
            fields.insert(Field::Phonemes);
        }
        Some(ActivityType::ImageMatchingActivity) => {
            fields.insert(Field::ItemImage);
        }
        _ => {}
    }

    fields
}

pub fn is_visible(activity_type: Option<ActivityType>, field: Field) -> bool {
    visible_fields(activity_type).contains(&field)
}

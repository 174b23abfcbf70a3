use super::{ActivityType, FieldPath, FieldValue};

#[derive(Debug, Clone, PartialEq)]
pub enum DraftCommand<F> {
    EditField {
        path: FieldPath,
        value: FieldValue<F>,
    },
    ChangeType {
        activity_type: Option<ActivityType>,
    },
    AddItem,
    RemoveItem {
        index: usize,
    },
}

impl<F> DraftCommand<F> {
    pub fn edit(path: FieldPath, value: FieldValue<F>) -> Self {
        DraftCommand::EditField { path, value }
    }
}

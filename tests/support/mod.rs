pub mod mock_api;

use activity_form::model::{ActivityForm, ActivityType, FieldValue, SubmitGuard};
use mock_api::MockFile;

/// A form for a multi-item type with the required fields and a token filled in.
pub fn filled_form(activity_type: ActivityType, item_texts: &[&str]) -> ActivityForm<MockFile> {
    let mut form = ActivityForm::new(SubmitGuard::new(true));
    form.apply_field_edit("type", FieldValue::text(activity_type.as_str()))
        .unwrap();
    form.apply_field_edit("description", FieldValue::text("Match the words"))
        .unwrap();
    form.apply_field_edit("challenge", FieldValue::text("3"))
        .unwrap();
    form.set_token("secret-token").unwrap();

    if activity_type.is_single_item() {
        if let Some(text) = item_texts.first() {
            form.apply_field_edit("item.text", FieldValue::text(*text))
                .unwrap();
        }
        return form;
    }

    for (index, text) in item_texts.iter().enumerate() {
        form.handle_command(activity_form::model::DraftCommand::AddItem)
            .unwrap();
        form.apply_field_edit(&format!("items.{}.text", index), FieldValue::text(*text))
            .unwrap();
    }
    form
}

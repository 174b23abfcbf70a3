use crate::model::{
    is_visible, ActivityType, DraftCommand, Field, FieldPath, FieldValue, FileHandle, ItemDraft,
};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemFieldsProps {
    pub index: usize,
    pub item: ItemDraft<File>,
    pub activity_type: Option<ActivityType>,
    pub removable: bool,
    pub on_command: Callback<DraftCommand<File>>,
}

#[function_component(ItemFieldsComp)]
pub fn item_fields_comp(props: &ItemFieldsProps) -> Html {
    let index = props.index;
    let item = &props.item;

    let on_text = |field: Field| {
        let on_command = props.on_command.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_command.emit(DraftCommand::edit(
                FieldPath::item(index, field),
                FieldValue::Text(input.value()),
            ));
        })
    };

    let on_file = |field: Field| {
        let on_command = props.on_command.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_command.emit(DraftCommand::edit(
                FieldPath::item(index, field),
                FieldValue::File(file),
            ));
        })
    };

    let on_remove = {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| {
            on_command.emit(DraftCommand::RemoveItem { index });
        })
    };

    let file_name = |file: &Option<File>| match file {
        Some(file) => html! {
            <span class="activity-form-item__file-name">{file.file_name()}</span>
        },
        None => html! {},
    };

    html! {
        <div class="activity-form-item">
            <span class="activity-form-item__title">{format!("Item {}", index + 1)}</span>
            <input
                class="activity-form-item__text"
                type="text"
                name={FieldPath::item(index, Field::ItemText).to_string()}
                value={item.text.clone()}
                oninput={on_text(Field::ItemText)}
                placeholder="Text"
            />
            <input
                class="activity-form-item__translation"
                type="text"
                name={FieldPath::item(index, Field::ItemTextTranslation).to_string()}
                value={item.text_translation.clone()}
                oninput={on_text(Field::ItemTextTranslation)}
                placeholder="Text Translation"
            />
            <label class="activity-form-item__audio">
                {"Audio "}
                <input type="file" accept="audio/*" onchange={on_file(Field::ItemAudio)} />
                {file_name(&item.audio)}
            </label>
            if is_visible(props.activity_type, Field::ItemImage) {
                <label class="activity-form-item__image">
                    {"Image "}
                    <input type="file" accept="image/*" onchange={on_file(Field::ItemImage)} />
                    {file_name(&item.image)}
                </label>
            }
            if props.removable {
                <button
                    class="activity-form-item__remove-button"
                    type="button"
                    onclick={on_remove}
                >
                    {"Remove Item"}
                </button>
            }
        </div>
    }
}

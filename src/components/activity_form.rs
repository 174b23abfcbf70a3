use super::{FormAction, ItemFieldsComp, SubmissionResultComp, SubmitLatch};
use crate::config::Config;
use crate::model::network::HttpActivityApi;
use crate::model::{
    is_visible, submit_with_timeout, ActivityForm, ActivityType, DraftCommand, Field, FieldPath,
    FieldValue, ItemPolicy, SubmissionState,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityFormProps {
    pub config: Config,
}

#[function_component(ActivityFormComp)]
pub fn activity_form_comp(props: &ActivityFormProps) -> Html {
    let form = use_reducer(|| ActivityForm::<File>::from_config(&props.config));
    let api = use_memo(props.config.clone(), HttpActivityApi::new);
    let latch = use_memo((), |_| SubmitLatch::default());

    let on_command = {
        let form = form.clone();
        Callback::from(move |command: DraftCommand<File>| {
            form.dispatch(FormAction::Command(command));
        })
    };

    let on_text = |field: Field| {
        let on_command = on_command.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_command.emit(DraftCommand::edit(
                FieldPath::Activity(field),
                FieldValue::Text(input.value()),
            ));
        })
    };

    let on_type_change = {
        let on_command = on_command.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_command.emit(DraftCommand::edit(
                FieldPath::Activity(Field::Type),
                FieldValue::Text(select.value()),
            ));
        })
    };

    let on_experience_change = {
        let on_command = on_command.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_command.emit(DraftCommand::edit(
                FieldPath::Activity(Field::GivesExperience),
                FieldValue::Flag(input.checked()),
            ));
        })
    };

    let on_token_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetToken(input.value()));
        })
    };

    let on_add_item = {
        let on_command = on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(DraftCommand::AddItem))
    };

    let on_submit = {
        let form = form.clone();
        let api = api.clone();
        let latch = latch.clone();
        let timeout = props.config.request_timeout;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.submission_request() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Submission blocked: {}", err);
                    return;
                }
            };
            if !latch.try_acquire() {
                log::warn!("Submission already in flight");
                return;
            }
            form.dispatch(FormAction::BeginSubmit);

            let form = form.clone();
            let api = api.clone();
            spawn_local(async move {
                let result =
                    submit_with_timeout(&*api, &request.draft, request.token.as_ref(), timeout)
                        .await;
                form.dispatch(FormAction::Complete(result));
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        let latch = latch.clone();
        Callback::from(move |_: ()| {
            form.dispatch(FormAction::Reset);
            latch.release();
        })
    };

    if form.state().is_terminal() {
        return html! {
            <SubmissionResultComp state={form.state().clone()} {on_reset} />
        };
    }

    let draft = form.draft();
    let submitting = *form.state() == SubmissionState::Submitting;
    let multi_item = draft
        .activity_type
        .is_some_and(|activity_type| activity_type.item_policy() == ItemPolicy::Multi);
    let missing = form.missing();

    html! {
        <form class="activity-form" onsubmit={on_submit}>
            <fieldset class="activity-form__fields" disabled={submitting}>
                <select
                    class="activity-form__type"
                    name="type"
                    onchange={on_type_change}
                >
                    <option value="" selected={draft.activity_type.is_none()}>
                        {"Select Activity Type"}
                    </option>
                    {for ActivityType::ALL.iter().map(|activity_type| html! {
                        <option
                            value={activity_type.as_str()}
                            selected={draft.activity_type == Some(*activity_type)}
                        >
                            {activity_type.label()}
                        </option>
                    })}
                </select>
                <input
                    class="activity-form__description"
                    type="text"
                    name="description"
                    value={draft.description.clone()}
                    oninput={on_text(Field::Description)}
                    placeholder="Description"
                />
                <input
                    class="activity-form__token"
                    type="password"
                    name="token"
                    value={form.token_input().to_string()}
                    oninput={on_token_input}
                    placeholder="Bearer token"
                />
                if is_visible(draft.activity_type, Field::Phonemes) {
                    <input
                        class="activity-form__phonemes"
                        type="text"
                        name="phonemes"
                        value={draft.phonemes.clone()}
                        oninput={on_text(Field::Phonemes)}
                        placeholder="Phonemes"
                    />
                }
                <div class="activity-form__items">
                    {for draft.items.iter().enumerate().map(|(index, item)| html! {
                        <ItemFieldsComp
                            key={item.id.to_string()}
                            {index}
                            item={item.clone()}
                            activity_type={draft.activity_type}
                            removable={multi_item}
                            on_command={on_command.clone()}
                        />
                    })}
                    if multi_item {
                        <button
                            class="activity-form__add-item-button"
                            type="button"
                            onclick={on_add_item}
                        >
                            {"Add Item"}
                        </button>
                    }
                </div>
                <label class="activity-form__experience">
                    {"Gives Experience"}
                    <input
                        type="checkbox"
                        name="gives_experience"
                        checked={draft.gives_experience}
                        onchange={on_experience_change}
                    />
                </label>
                <label class="activity-form__challenge">
                    <span>{"ID Challenge"}</span>
                    <input
                        type="number"
                        min="0"
                        name="challenge"
                        value={draft.challenge.map(|challenge| challenge.to_string()).unwrap_or_default()}
                        oninput={on_text(Field::Challenge)}
                        placeholder="Challenge Level"
                    />
                </label>
            </fieldset>
            if let Some(rejection) = form.rejection() {
                <p class="activity-form__rejection">{rejection.to_string()}</p>
            }
            if !missing.is_empty() {
                <p class="activity-form__missing">
                    {format!("Missing: {}", missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))}
                </p>
            }
            <button
                class="activity-form__submit-button"
                type="submit"
                disabled={!form.can_submit()}
            >
                {if submitting { "Submitting..." } else { "Submit Activity" }}
            </button>
        </form>
    }
}

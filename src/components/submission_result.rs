use crate::model::SubmissionState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SubmissionResultProps {
    pub state: SubmissionState,
    pub on_reset: Callback<()>,
}

#[function_component(SubmissionResultComp)]
pub fn submission_result_comp(props: &SubmissionResultProps) -> Html {
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let body = match &props.state {
        SubmissionState::Success(report) => html! {
            <div class="activity-form-result__success">
                <p>{"Activity successfully created!"}</p>
                <pre>{report.to_pretty_json()}</pre>
            </div>
        },
        SubmissionState::Error(message) => html! {
            <div class="activity-form-result__error">{message}</div>
        },
        SubmissionState::Editing | SubmissionState::Submitting => html! {},
    };

    html! {
        <div class="activity-form-result">
            <h3>{"Submission Result:"}</h3>
            {body}
            <button
                class="activity-form-result__reset-button"
                onclick={on_reset}
            >
                {"Submit Another Activity"}
            </button>
        </div>
    }
}

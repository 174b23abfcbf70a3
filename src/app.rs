use activity_form::prelude::*;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::from_env());

    html! {
        <div class="activity-form-app">
            <h2>{"Create Activity"}</h2>
            <ActivityFormComp config={(*config).clone()} />
        </div>
    }
}

// src/components/signup_form.rs
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names, in display order.
    pub activities: Vec<String>,
    pub email: AttrValue,
    /// Empty selects the placeholder.
    pub selected: AttrValue,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // Option lists are rebuilt on every reload; put the select back on the
    // selected value (or the placeholder) afterwards.
    {
        let select_ref = select_ref.clone();
        let deps = (props.selected.clone(), props.activities.clone());
        use_effect_with(deps, move |(selected, _)| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(selected);
            }
            || ()
        });
    }

    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            on_select.emit(select.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={props.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true ref={select_ref} {onchange}>
                    <option value="">{ "-- Select an activity --" }</option>
                    { for props.activities.iter().map(|name| html! {
                        <option value={name.clone()}>{ name }</option>
                    })}
                </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}

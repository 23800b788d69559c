// src/components/activity_list.rs
use web_sys::Element;
use yew::prelude::*;

use crate::actions::ListState;
use crate::model::{initials, Activity};

const REMOVE_BUTTON: &str = "button.delete-participant";

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub state: ListState,
    /// (activity name, participant identifier)
    pub on_remove: Callback<(String, String)>,
}

/// One listener for every remove button in the list; the row identity comes
/// from the button's data attributes.
fn removal_target(e: &MouseEvent) -> Option<(String, String)> {
    let target = e.target_dyn_into::<Element>()?;
    let button = target.closest(REMOVE_BUTTON).ok()??;
    Some((
        button.get_attribute("data-activity")?,
        button.get_attribute("data-email")?,
    ))
}

fn participant_row(activity: &str, email: &str) -> Html {
    html! {
        <li>
            <span class="participant-avatar">{ initials(email) }</span>
            <span class="participant-name">{ email }</span>
            <button
                type="button"
                class="delete-participant"
                title="Remove participant"
                aria-label={format!("Remove {email}")}
                data-activity={activity.to_string()}
                data-email={email.to_string()}
            >
                { "✕" }
            </button>
        </li>
    }
}

fn activity_card(name: &str, details: &Activity) -> Html {
    html! {
        <div class="activity-card" key={name.to_string()} data-activity-id={name.to_string()}>
            <h4>{ name }</h4>
            <p>{ details.description.clone().unwrap_or_default() }</p>
            <p><strong>{ "Schedule:" }</strong>{ " " }{ details.schedule_label() }</p>
            <p><strong>{ "Availability:" }</strong>{ " " }{ details.availability_label() }</p>

            <div class="participants">
                <h5>{ "Participants" }</h5>
                if details.participants.is_empty() {
                    <p class="empty">{ "No participants yet" }</p>
                } else {
                    // Unkeyed: the roster may legitimately repeat an identifier.
                    <ul>
                        { for details.participants.iter().map(|p| participant_row(name, p)) }
                    </ul>
                }
            </div>
        </div>
    }
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let onclick = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = removal_target(&e) else { return; };
            e.stop_propagation();
            on_remove.emit(target);
        })
    };

    let body = match &props.state {
        ListState::Loading => html! { <p>{ "Loading activities..." }</p> },
        ListState::Failed => html! { <p>{ "Failed to load activities. Please try again later." }</p> },
        ListState::Loaded(map) => html! {
            <>{ for map.iter().map(|(name, details)| activity_card(name, details)) }</>
        },
    };

    html! {
        <div id="activities-list" {onclick}>
            { body }
        </div>
    }
}

// src/app.rs
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{self, Action, ListState};
use crate::api::HttpBackend;
use crate::components::{ActivityList, SignupForm, StatusBanner};
use crate::config::AppConfig;
use crate::status::{Banner, BannerAction};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let backend = use_memo(props.config.clone(), |cfg| HttpBackend::new(cfg.clone()));

    let list = use_state(|| ListState::Loading);
    let email = use_state(String::new);
    let selected = use_state(String::new);
    let banner = use_reducer(Banner::default);

    let reload = {
        let backend = backend.clone();
        let list = list.clone();
        Callback::from(move |_: ()| {
            let backend = backend.clone();
            let list = list.clone();
            spawn_local(async move {
                list.set(actions::load(&*backend).await);
            });
        })
    };

    // Initial load
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // One hide timer per shown message. A newer message tears down the old
    // timer before it can fire.
    {
        let banner = banner.clone();
        let hide_ms = props.config.message_hide_ms;
        use_effect_with(banner.generation(), move |&generation| {
            let timer = (!banner.is_hidden()).then(|| {
                Timeout::new(hide_ms, move || banner.dispatch(BannerAction::Hide(generation)))
            });
            move || drop(timer)
        });
    }

    let run = {
        let backend = backend.clone();
        let reload = reload.clone();
        let email = email.clone();
        let selected = selected.clone();
        let banner = banner.clone();
        Callback::from(move |(action, activity, who): (Action, String, String)| {
            let backend = backend.clone();
            let reload = reload.clone();
            let email = email.clone();
            let selected = selected.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let done = actions::perform(&*backend, action, &activity, &who).await;
                banner.dispatch(BannerAction::Show(done.notice));
                if done.reset_form {
                    email.set(String::new());
                    selected.set(String::new());
                }
                if done.reload {
                    reload.emit(());
                }
            });
        })
    };

    let on_submit = {
        let run = run.clone();
        let email = email.clone();
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            run.emit((Action::Signup, (*selected).clone(), (*email).clone()));
        })
    };

    let on_remove = {
        let run = run.clone();
        Callback::from(move |(activity, who): (String, String)| {
            run.emit((Action::Unregister, activity, who));
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |v: String| email.set(v))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |v: String| selected.set(v))
    };

    let names: Vec<String> = match &*list {
        ListState::Loaded(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };

    html! {
        <>
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>{ "Available Activities" }</h3>
                    <ActivityList state={(*list).clone()} {on_remove} />
                </section>

                <section id="signup-container">
                    <h3>{ "Sign Up for an Activity" }</h3>
                    <SignupForm
                        activities={names}
                        email={AttrValue::from((*email).clone())}
                        selected={AttrValue::from((*selected).clone())}
                        {on_email}
                        {on_select}
                        {on_submit}
                    />
                    <StatusBanner banner={(*banner).clone()} />
                </section>
            </main>

            <footer>
                <p>{ "© 2023 Mergington High School" }</p>
            </footer>
        </>
    }
}

use yew::prelude::*;

use crate::status::Banner;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub banner: Banner,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    html! {
        <div id="message" class={props.banner.class()} role="status">
            { props.banner.text() }
        </div>
    }
}

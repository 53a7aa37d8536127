use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

/// Informational banner, also used for empty tables.
#[function_component(InfoNotice)]
pub fn info_notice(props: &NoticeProps) -> Html {
    let icon = props.icon.clone().unwrap_or_else(|| AttrValue::from("fas fa-info-circle"));

    html! {
        <div class="alert alert-info">
            <i class={icon.to_string()}></i>
            <span>{&props.message}</span>
        </div>
    }
}

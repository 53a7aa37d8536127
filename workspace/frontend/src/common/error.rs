use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Fetch failure banner. The retry button re-runs the view's fetch.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Showing fetch error: {}", props.message);

    let retry = props.on_retry.as_ref().map(|on_retry| {
        let on_click = on_retry.reform(|_: MouseEvent| {
            log::debug!("Retrying failed request");
        });
        html! {
            <button class="btn btn-sm" onclick={on_click}>
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div role="alert" class="alert alert-error my-6">
            <i class="fas fa-plug-circle-exclamation text-xl"></i>
            <div>
                <h3 class="font-semibold">{"Could not reach the DebtDesk server"}</h3>
                <div class="text-sm">{&props.message}</div>
            </div>
            { retry.unwrap_or_default() }
        </div>
    }
}

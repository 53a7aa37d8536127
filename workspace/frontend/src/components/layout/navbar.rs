use yew::prelude::*;
use crate::api_client::report::end_session;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_session_ended: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let is_ending = use_state(|| false);

    let on_end_session = {
        let on_session_ended = props.on_session_ended.clone();
        let is_ending = is_ending.clone();

        Callback::from(move |_| {
            if *is_ending {
                return;
            }
            is_ending.set(true);

            let on_session_ended = on_session_ended.clone();
            let is_ending = is_ending.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match end_session().await {
                    Ok(response) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_info(format!(
                                "{}, {} record(s) discarded",
                                response.message, response.data.discarded_records
                            ));
                        }
                        on_session_ended.emit(());
                    }
                    Err(e) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(format!("Failed to end session: {}", e));
                        }
                    }
                }
                is_ending.set(false);
            });
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="my-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <button
                    class="btn btn-sm btn-outline btn-error"
                    onclick={on_end_session}
                    disabled={*is_ending}
                    title="Discard every record of this session"
                >
                    <i class="fas fa-sign-out-alt"></i>
                    {" End Session"}
                </button>
            </div>
        </div>
    }
}

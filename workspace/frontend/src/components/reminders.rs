use common::ReminderDto;
use yew::prelude::*;
use crate::api_client::report::get_reminders;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::notice::InfoNotice;

#[function_component(Reminders)]
pub fn reminders() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_reminders);

    let render = Callback::from(|reminder: ReminderDto| {
        html! { <InfoNotice message={reminder.message} icon="fas fa-bell" /> }
    });

    html! {
        <>
            <h2 class="text-2xl font-bold mb-4">{"Reminders"}</h2>
            <FetchRender<ReminderDto>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}

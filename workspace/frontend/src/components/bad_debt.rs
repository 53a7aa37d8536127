use common::InvoiceDto;
use yew::prelude::*;
use crate::api_client::invoice::get_bad_debt;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::invoice_table::InvoiceTable;

#[function_component(BadDebt)]
pub fn bad_debt() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_bad_debt);

    let render = Callback::from(|invoices: Vec<InvoiceDto>| {
        html! { <InvoiceTable invoices={invoices} empty_message="No bad debt records to display." /> }
    });

    html! {
        <>
            <h2 class="text-2xl font-bold mb-4">{"Bad Debt"}</h2>
            <FetchRender<Vec<InvoiceDto>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}

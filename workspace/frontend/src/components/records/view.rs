use common::{Collection, InvoiceDto};
use yew::prelude::*;
use crate::api_client::invoice::get_invoices;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::invoice_table::InvoiceTable;
use super::transfer_panel::TransferPanel;

#[function_component(AllRecords)]
pub fn all_records() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(|| get_invoices(Collection::Active));

    let render = {
        let refetch = refetch.clone();
        Callback::from(move |invoices: Vec<InvoiceDto>| {
            html! {
                <div class="space-y-6">
                    <InvoiceTable invoices={invoices.clone()} empty_message="No records to display." />
                    if !invoices.is_empty() {
                        <TransferPanel invoices={invoices} on_transferred={refetch.clone()} />
                    }
                </div>
            }
        })
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"All Records"}</h2>
                <button class="btn btn-ghost btn-sm" onclick={refetch.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-sync-alt"></i>
                </button>
            </div>
            <FetchRender<Vec<InvoiceDto>>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                loading_text="Loading records..."
            />
        </>
    }
}

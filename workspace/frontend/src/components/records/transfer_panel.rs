use common::InvoiceDto;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use crate::api_client::invoice::transfer_invoice;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct TransferPanelProps {
    pub invoices: Vec<InvoiceDto>,
    pub on_transferred: Callback<()>,
}

/// Distinct invoice numbers in table order.
fn invoice_numbers(invoices: &[InvoiceDto]) -> Vec<String> {
    let mut numbers: Vec<String> = Vec::with_capacity(invoices.len());
    for invoice in invoices {
        if !numbers.contains(&invoice.invoice_number) {
            numbers.push(invoice.invoice_number.clone());
        }
    }
    numbers
}

/// "Move Record to Bad Debt" selector. Every active record with the chosen
/// invoice number is moved.
#[function_component(TransferPanel)]
pub fn transfer_panel(props: &TransferPanelProps) -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let selected = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let numbers = invoice_numbers(&props.invoices);
    // a stale selection (already moved) falls back to the first entry
    let current = selected
        .as_ref()
        .filter(|number| numbers.contains(number))
        .cloned()
        .or_else(|| numbers.first().cloned());

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(Some(select.value()));
        })
    };

    let on_transfer = {
        let current = current.clone();
        let is_submitting = is_submitting.clone();
        let on_transferred = props.on_transferred.clone();

        Callback::from(move |_| {
            let Some(invoice_number) = current.clone() else {
                return;
            };
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let is_submitting = is_submitting.clone();
            let on_transferred = on_transferred.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match transfer_invoice(invoice_number).await {
                    Ok(response) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_success(response.message.clone());
                            toast_ctx.show_warnings(&response.warnings);
                        }
                        on_transferred.emit(());
                    }
                    Err(e) => {
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(e);
                        }
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Move Record to Bad Debt"}</h3>
                <div class="flex flex-wrap items-end gap-4">
                    <div class="form-control w-full max-w-xs">
                        <label class="label"><span class="label-text">{"Select Invoice Number"}</span></label>
                        <select class="select select-bordered select-sm" onchange={on_change} disabled={*is_submitting}>
                            { for numbers.iter().map(|number| html! {
                                <option value={number.clone()} selected={current.as_ref() == Some(number)}>
                                    {number}
                                </option>
                            })}
                        </select>
                    </div>
                    <button class="btn btn-warning btn-sm" onclick={on_transfer} disabled={*is_submitting || current.is_none()}>
                        <i class="fas fa-arrow-right"></i>
                        {" Transfer to Bad Debt"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use std::str::FromStr;
use common::CreateInvoiceRequest;
use rust_decimal::Decimal;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;
use crate::api_client::invoice::create_invoice;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct AddRecordFormProps {
    pub on_success: Callback<()>,
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn field(form_data: &FormData, name: &str) -> String {
    form_data.get(name).as_string().unwrap_or_default()
}

/// Reads the form into a request. Presence of the required fields is checked
/// by the server; only the amount needs parsing here.
fn read_request(form_data: &FormData) -> Result<CreateInvoiceRequest, String> {
    let amount_text = field(form_data, "amount");
    let amount = if amount_text.trim().is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from_str(amount_text.trim()).map_err(|_| format!("Amount '{}' is not a number.", amount_text))?
    };

    let date = field(form_data, "date");

    Ok(CreateInvoiceRequest {
        customer_name: field(form_data, "customer_name"),
        invoice_number: field(form_data, "invoice_number"),
        amount,
        date: if date.is_empty() { None } else { Some(date) },
        admin_notes: field(form_data, "admin_notes"),
        comments: field(form_data, "comments"),
    })
}

#[function_component(AddRecordForm)]
pub fn add_record_form(props: &AddRecordFormProps) -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let form_ref = use_node_ref();
    let date_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_submit = {
        let on_success = props.on_success.clone();
        let form_ref = form_ref.clone();
        let date_ref = date_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = match FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(_) => {
                    log::error!("Could not read the add-record form");
                    return;
                }
            };

            let request = match read_request(&form_data) {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e));
                    return;
                }
            };

            let on_success = on_success.clone();
            let date_ref = date_ref.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let toast_ctx = toast_ctx.clone();

            is_submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match create_invoice(request).await {
                    Ok(response) => {
                        form.reset();
                        if let Some(date_input) = date_ref.cast::<HtmlInputElement>() {
                            date_input.set_value(&today());
                        }
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_success(response.message.clone());
                            toast_ctx.show_warnings(&response.warnings);
                        }
                        is_submitting.set(false);
                        on_success.emit(());
                    }
                    Err(e) => {
                        // the form keeps what was typed
                        error_message.set(Some(e));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <li class="menu-title"><span>{"Add New Record"}</span>
            {if let Some(error) = (*error_message).as_ref() {
                html! {
                    <div class="alert alert-error mt-2 text-sm">
                        <i class="fas fa-exclamation-circle"></i>
                        <span>{error}</span>
                    </div>
                }
            } else {
                html! {}
            }}

            <form ref={form_ref} onsubmit={on_submit} class="py-2 space-y-2 font-normal">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Customer Name"}</span></label>
                    <input type="text" name="customer_name" class="input input-bordered input-sm w-full"
                        required={true} disabled={*is_submitting} />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Invoice Number"}</span></label>
                    <input type="text" name="invoice_number" class="input input-bordered input-sm w-full"
                        required={true} disabled={*is_submitting} />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Amount"}</span></label>
                    <input type="number" name="amount" class="input input-bordered input-sm w-full"
                        min="0" step="0.01" value="0.00" disabled={*is_submitting} />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Date"}</span></label>
                    <input ref={date_ref} type="date" name="date" class="input input-bordered input-sm w-full"
                        value={today()} disabled={*is_submitting} />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Admin Notes"}</span></label>
                    <textarea name="admin_notes" class="textarea textarea-bordered textarea-sm w-full"
                        disabled={*is_submitting} />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Comments"}</span></label>
                    <input type="text" name="comments" class="input input-bordered input-sm w-full"
                        disabled={*is_submitting} />
                </div>

                <button type="submit" class="btn btn-primary btn-sm w-full" disabled={*is_submitting}>
                    {if *is_submitting {
                        html! { <span class="loading loading-spinner loading-xs"></span> }
                    } else {
                        html! { <i class="fas fa-plus"></i> }
                    }}
                    {" Add Record"}
                </button>
            </form>
        </li>
    }
}

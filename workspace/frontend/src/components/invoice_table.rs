use common::InvoiceDto;
use yew::prelude::*;
use crate::common::notice::InfoNotice;

const OVERDUE_ROW_STYLE: &str = "background-color: #FFB3B3";

#[derive(Properties, PartialEq)]
pub struct InvoiceTableProps {
    pub invoices: Vec<InvoiceDto>,
    pub empty_message: AttrValue,
}

/// Records table shared by the active and bad-debt views.
#[function_component(InvoiceTable)]
pub fn invoice_table(props: &InvoiceTableProps) -> Html {
    if props.invoices.is_empty() {
        return html! { <InfoNotice message={props.empty_message.clone()} /> };
    }

    html! {
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Customer Name"}</th>
                        <th>{"Invoice Number"}</th>
                        <th class="text-right">{"Amount"}</th>
                        <th>{"Date"}</th>
                        <th class="text-right">{"Days"}</th>
                        <th class="text-right">{"Total Amount"}</th>
                        <th>{"Admin Notes"}</th>
                        <th>{"Comments"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.invoices.iter().map(invoice_row) }
                </tbody>
            </table>
        </div>
    }
}

fn invoice_row(invoice: &InvoiceDto) -> Html {
    let style = invoice.overdue.then_some(OVERDUE_ROW_STYLE);

    html! {
        <tr style={style}>
            <td>{&invoice.customer_name}</td>
            <td class="font-mono">{&invoice.invoice_number}</td>
            <td class="text-right">{&invoice.amount_display}</td>
            <td>{invoice.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}</td>
            <td class="text-right">{invoice.days.map(|d| d.to_string()).unwrap_or_default()}</td>
            <td class="text-right">{&invoice.total_amount_display}</td>
            <td class="whitespace-pre-wrap">{&invoice.admin_notes}</td>
            <td>{&invoice.comments}</td>
        </tr>
    }
}

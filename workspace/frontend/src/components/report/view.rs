use common::CustomerReportDto;
use yew::prelude::*;
use crate::api_client::report::get_report;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::notice::InfoNotice;
use super::chart::CustomerTotalsChart;

fn summary_table(report: &CustomerReportDto) -> Html {
    html! {
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Customer Name"}</th>
                        <th class="text-right">{"Invoices"}</th>
                        <th class="text-right">{"Total Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for report.customers.iter().map(|customer| html! {
                        <tr key={customer.customer_name.clone()}>
                            <td>{&customer.customer_name}</td>
                            <td class="text-right">{customer.invoice_count}</td>
                            <td class="text-right">{&customer.total_amount_display}</td>
                        </tr>
                    })}
                </tbody>
                <tfoot>
                    <tr>
                        <th>{"Total"}</th>
                        <th class="text-right">{report.invoice_count}</th>
                        <th class="text-right">{&report.grand_total_display}</th>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[function_component(Report)]
pub fn report() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_report);

    let render = Callback::from(|report: CustomerReportDto| {
        if report.customers.is_empty() {
            return html! { <InfoNotice message="No records to display in the report." /> };
        }

        html! {
            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-lg font-semibold mb-2">{"Report Summary"}</h3>
                    { summary_table(&report) }
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Total Amount by Customer"}</h3>
                        <CustomerTotalsChart customers={report.customers.clone()} />
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <>
            <h2 class="text-2xl font-bold mb-4">{"Report"}</h2>
            <FetchRender<CustomerReportDto>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                loading_text="Building report..."
            />
        </>
    }
}

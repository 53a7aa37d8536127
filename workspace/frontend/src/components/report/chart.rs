use common::CustomerSummaryDto;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct CustomerTotalsChartProps {
    pub customers: Vec<CustomerSummaryDto>,
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Bar chart of Total Amount per customer, labelled with the amount above each bar.
#[function_component(CustomerTotalsChart)]
pub fn customer_totals_chart(props: &CustomerTotalsChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.customers.clone()), move |(chart_ref, customers)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let names: Vec<&str> = customers.iter().map(|c| c.customer_name.as_str()).collect();
            let totals: Vec<f64> = customers
                .iter()
                .map(|c| c.total_amount.to_f64().unwrap_or_default())
                .collect();
            let labels: Vec<String> = customers
                .iter()
                .map(|c| format!("${:.2}", c.total_amount))
                .collect();

            let trace = serde_json::json!([{
                "x": names,
                "y": totals,
                "text": labels,
                "type": "bar",
                "textposition": "outside",
                "marker": {"color": "#3b82f6"},
                "name": "Total Amount"
            }]);

            let layout = serde_json::json!({
                "margin": {"t": 30, "r": 10, "l": 60, "b": 60},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"title": {"text": "Customer Name"}, "showgrid": false},
                "yaxis": {"title": {"text": "Total Amount"}, "showgrid": true, "gridcolor": "#eee"}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            match (to_js(&trace), to_js(&layout), to_js(&config)) {
                (Ok(trace), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                    log::trace!("Plotting {} customer total(s)", customers.len());
                    newPlot(&div_id, trace, layout, config);
                }
                (Ok(_), Ok(_), Ok(_)) => log::warn!("Chart container has no id, skipping plot"),
                _ => log::error!("Failed to convert chart data for Plotly"),
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-customer-totals" class="chart-container" style="height: 400px;"></div>
    }
}

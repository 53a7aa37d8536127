use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;
use super::add_record_form::AddRecordForm;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_record_added: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="my-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-file-invoice-dollar"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"DebtDesk"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Records} classes="nav-link"><i class="fas fa-table w-5"></i> {"All Records"}</Link<Route>></li>
                <li><Link<Route> to={Route::Report} classes="nav-link"><i class="fas fa-chart-bar w-5"></i> {"Report"}</Link<Route>></li>
                <li><Link<Route> to={Route::Reminders} classes="nav-link"><i class="fas fa-bell w-5"></i> {"Reminders"}</Link<Route>></li>
                <li><Link<Route> to={Route::BadDebt} classes="nav-link"><i class="fas fa-skull-crossbones w-5"></i> {"Bad Debt"}</Link<Route>></li>

                <div class="divider"></div>

                <AddRecordForm on_success={props.on_record_added.clone()} />
            </ul>
        </div>
    }
}

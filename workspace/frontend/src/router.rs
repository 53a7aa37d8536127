use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bad_debt::BadDebt;
use crate::components::layout::layout::Layout;
use crate::components::records::AllRecords;
use crate::components::reminders::Reminders;
use crate::components::report::Report;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Records,
    #[at("/report")]
    Report,
    #[at("/reminders")]
    Reminders,
    #[at("/bad-debt")]
    BadDebt,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Records => {
            log::trace!("Rendering All Records page");
            html! { <Layout title="All Records"><AllRecords /></Layout> }
        }
        Route::Report => {
            log::trace!("Rendering Report page");
            html! { <Layout title="Report"><Report /></Layout> }
        }
        Route::Reminders => {
            log::trace!("Rendering Reminders page");
            html! { <Layout title="Reminders"><Reminders /></Layout> }
        }
        Route::BadDebt => {
            log::trace!("Rendering Bad Debt page");
            html! { <Layout title="Bad Debt"><BadDebt /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

use yew::prelude::*;
use super::navbar::Navbar;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

/// Page shell: navbar, the side panel with the add-record form and the routed view.
///
/// Any change to the session data (a record added, the session ended) bumps
/// `version`, which remounts the view so it fetches again.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let version = use_state(|| 0u32);

    let on_changed = {
        let version = version.clone();
        Callback::from(move |_| {
            log::debug!("Session data changed, reloading view");
            version.set(*version + 1);
        })
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id="my-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar title={props.title.clone()} on_session_ended={on_changed.clone()} />
                <main key={*version} class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar on_record_added={on_changed} />
        </div>
    }
}

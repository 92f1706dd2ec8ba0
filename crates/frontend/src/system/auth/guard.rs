use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders the children only for a logged-in admin; everyone else is sent
/// to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/admin/login" /> }
        >
            {children()}
        </Show>
    }
}

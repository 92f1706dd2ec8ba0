use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use mep_contracts::enums::ResourceKind;

/// Side navigation around every admin screen
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        do_logout(set_auth_state);
        navigate("/admin/login", Default::default());
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-sidebar__user">
                    {move || auth_state.get().username.unwrap_or_default()}
                </div>
                <nav class="admin-sidebar__nav">
                    <A href="/admin" exact=true>
                        {icon("dashboard")}
                        <span>"Dashboard"</span>
                    </A>
                    {ResourceKind::directories()
                        .into_iter()
                        .map(|kind| view! {
                            <A href=format!("/admin/{}", kind.path())>
                                {icon(kind.path())}
                                <span>{kind.list_name()}</span>
                            </A>
                        })
                        .collect_view()}
                </nav>
                <button class="button button--ghost admin-sidebar__logout" on:click=on_logout>
                    {icon("logout")}
                    <span>"Log out"</span>
                </button>
            </aside>
            <section class="admin-content">
                {children()}
            </section>
        </div>
    }
}

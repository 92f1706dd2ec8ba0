use crate::layout::global_context::use_global_context;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use mep_contracts::enums::ResourceKind;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"MEP Hub"</A>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.toggle_nav()
                >
                    "☰"
                </button>
            </div>
            <nav class="header__nav" class:header__nav--open=move || ctx.nav_open.get()>
                {ResourceKind::directories()
                    .into_iter()
                    .map(|kind| view! {
                        <A href=format!("/{}", kind.path()) on:click=move |_| ctx.close_nav()>
                            {kind.list_name()}
                        </A>
                    })
                    .collect_view()}
                <A href="/about" on:click=move |_| ctx.close_nav()>"About"</A>
                <A href="/contact" on:click=move |_| ctx.close_nav()>"Contact"</A>
                <A href="/admin" attr:class="header__admin-link" on:click=move |_| ctx.close_nav()>
                    {move || if auth_state.get().is_authenticated() { "Admin panel" } else { "Admin" }}
                </A>
            </nav>
        </header>
    }
}

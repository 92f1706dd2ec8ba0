pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Public site shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
            <ToastHost />
        </div>
    }
}

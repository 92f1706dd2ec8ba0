use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not-found--page" category=PageCategory::Content>
            <div class="not-found">
                <h1>"Page not found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <A href="/">"Back to the home page"</A>
            </div>
        </PageFrame>
    }
}

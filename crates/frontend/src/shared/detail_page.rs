//! Generic single-record page for `/{resource}/:id`.
//!
//! The id comes from the route; every navigation fetches the record again.

use super::http;
use super::icons::icon;
use super::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use mep_contracts::domain::common::{RecordId, Resource};
use mep_contracts::shared::api::ApiError;
use mep_contracts::shared::detail::DetailState;
use thaw::*;

/// Fetch the record named by the `:id` route param and hand it to `render`
pub fn detail_page<T, F>(page_id: &'static str, render: F) -> impl IntoView
where
    T: Resource + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let params = use_params_map();
    let state = RwSignal::new(DetailState::<T>::Loading);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        state.set(DetailState::Loading);
        spawn_local(async move {
            let result = if id.trim().is_empty() {
                Err(ApiError::NotFound)
            } else {
                http::fetch_detail::<T>(&RecordId::new(id)).await
            };
            state.set(DetailState::public(result));
        });
    });

    let kind = T::KIND;

    view! {
        <PageFrame page_id=page_id category=PageCategory::Detail>
            <A href=format!("/{}", kind.path()) attr:class="back-link">
                {icon("arrow-left")}
                {format!("Back to {}", kind.list_name())}
            </A>
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="collection-status"><Spinner label="Loading..." /></div>
                }
                .into_any(),
                DetailState::NotFound => view! {
                    <div class="not-found">
                        <h2>{format!("{} not found", kind.element_name())}</h2>
                        <p>"It may have been removed or is no longer listed."</p>
                    </div>
                }
                .into_any(),
                DetailState::Failed(message) => view! {
                    <div class="alert alert--error">{message}</div>
                }
                .into_any(),
                DetailState::Loaded(record) => render(record),
            }}
        </PageFrame>
    }
}

/// Labelled value on a detail page; hidden when the value is blank
#[component]
pub fn DetailField(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    (!value.trim().is_empty()).then(|| {
        view! {
            <div class="detail-field">
                <div class="detail-field__label">{label}</div>
                <div class="detail-field__value">{value}</div>
            </div>
        }
    })
}

/// Labelled tag list on a detail page; hidden when empty
#[component]
pub fn DetailTags(#[prop(into)] label: String, values: Vec<String>) -> impl IntoView {
    let values: Vec<String> = values.into_iter().filter(|v| !v.trim().is_empty()).collect();
    (!values.is_empty()).then(|| {
        view! {
            <div class="detail-field">
                <div class="detail-field__label">{label}</div>
                <div class="resource-card__tags">
                    {values.into_iter().map(|v| view! { <span class="tag">{v}</span> }).collect_view()}
                </div>
            </div>
        }
    })
}

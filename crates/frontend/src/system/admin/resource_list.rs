//! Admin list for the directories without an edit form: search, open the
//! public page, delete after confirmation.

use crate::domain::a008_job_seeker::ui::admin::JobSeekerAdmin;
use crate::layout::global_context::use_global_context;
use crate::pages::not_found::NotFoundPage;
use crate::shared::components::PageHeader;
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CollectionStatus, SearchInput};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use mep_contracts::domain::a001_project::Project;
use mep_contracts::domain::a002_consultant::Consultant;
use mep_contracts::domain::a003_contractor::Contractor;
use mep_contracts::domain::a004_agent::Agent;
use mep_contracts::domain::a005_lecturer::Lecturer;
use mep_contracts::domain::a006_institution::Institution;
use mep_contracts::domain::a007_director::Director;
use mep_contracts::domain::a009_job_vacancy::JobVacancy;
use mep_contracts::domain::common::{RecordId, Resource};
use mep_contracts::enums::ResourceKind;
use mep_contracts::shared::api::Endpoint;
use mep_contracts::shared::listing::{search, Listable};
use thaw::*;

/// `/admin/:resource`
#[component]
pub fn AdminResourcePage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let path = params.with(|p| p.get("resource")).unwrap_or_default();
        match ResourceKind::from_path(&path) {
            Some(ResourceKind::Projects) => resource_table::<Project>().into_any(),
            Some(ResourceKind::Consultants) => resource_table::<Consultant>().into_any(),
            Some(ResourceKind::Contractors) => resource_table::<Contractor>().into_any(),
            Some(ResourceKind::Agents) => resource_table::<Agent>().into_any(),
            Some(ResourceKind::Lecturers) => resource_table::<Lecturer>().into_any(),
            Some(ResourceKind::Institutions) => resource_table::<Institution>().into_any(),
            Some(ResourceKind::Directors) => resource_table::<Director>().into_any(),
            Some(ResourceKind::JobSeekers) => view! { <JobSeekerAdmin /> }.into_any(),
            Some(ResourceKind::JobVacancies) => resource_table::<JobVacancy>().into_any(),
            Some(ResourceKind::Contact) | None => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

fn resource_table<T>() -> impl IntoView
where
    T: Resource + Listable + PartialEq + Send + Sync + 'static,
{
    let kind = T::KIND;
    let toast = use_toast();
    let global = use_global_context();
    let collection = RemoteCollection::<T>::new();
    let term = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(Option::<RecordId>::None);
    let deleting = RwSignal::new(false);

    Effect::new(move |_| {
        global.refresh_tick.track();
        collection.load();
    });

    let rows = Memo::new(move |_| collection.items.with(|items| search(items, &term.get())));

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        let call = Endpoint::delete(kind, &id);
        deleting.set(true);
        spawn_local(async move {
            match http::execute(&call).await {
                Ok(()) => {
                    collection.remove(&id);
                    toast.success(format!("{} deleted", kind.element_name()));
                }
                Err(e) => toast.error(e.user_message()),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    view! {
        <PageFrame page_id="admin_resource--admin" category=PageCategory::Admin>
            <PageHeader title=kind.list_name() subtitle="Search and remove records">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| global.bump_refresh()
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=term placeholder="Search..." />
            </div>

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || rows.with(Vec::len))
            />

            <div class="table-wrapper">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th class="admin-table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|record| {
                                    let id = record.id().clone();
                                    let visible = record.is_visible();
                                    view! {
                                        <tr class:admin-table__row--hidden=!visible>
                                            <td>{record.display_name()}</td>
                                            <td>
                                                <Badge appearance=BadgeAppearance::Tint>
                                                    {if visible { "Public" } else { "Hidden" }}
                                                </Badge>
                                            </td>
                                            <td class="admin-table__actions">
                                                <A href=record.detail_route() attr:class="button button--icon" attr:title="Open public page">
                                                    {icon("eye")}
                                                </A>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    disabled=move || deleting.get()
                                                    on:click=move |_| pending_delete.set(Some(id.clone()))
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title=format!("Delete {}", kind.element_name().to_lowercase())
                    message="This cannot be undone."
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| {
                        if !deleting.get_untracked() {
                            pending_delete.set(None);
                        }
                    })
                />
            </Show>
        </PageFrame>
    }
}

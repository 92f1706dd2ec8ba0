use crate::shared::components::{PageHeader, StatCard};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a001_project::Project;
use mep_contracts::domain::a002_consultant::Consultant;
use mep_contracts::domain::a003_contractor::Contractor;
use mep_contracts::domain::a004_agent::Agent;
use mep_contracts::domain::a005_lecturer::Lecturer;
use mep_contracts::domain::a006_institution::Institution;
use mep_contracts::domain::a007_director::Director;
use mep_contracts::domain::a008_job_seeker::JobSeeker;
use mep_contracts::domain::a009_job_vacancy::JobVacancy;
use mep_contracts::domain::common::Resource;

/// Tile with the total and public record count of one collection
fn count_card<T: Resource + Send + Sync + 'static>() -> impl IntoView {
    let collection = RemoteCollection::<T>::fetched();
    let ready = move || !collection.loading.get() && collection.error.get().is_none();
    let total = Signal::derive(move || ready().then(|| collection.items.with(Vec::len)));
    let public = Signal::derive(move || {
        ready().then(|| collection.items.with(|items| items.iter().filter(|r| r.is_visible()).count()))
    });
    let kind = T::KIND;

    view! {
        <StatCard
            label=kind.list_name()
            icon_name=kind.path()
            value=total
            visible=public
            href=format!("/admin/{}", kind.path())
        />
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="admin_dashboard--admin" category=PageCategory::Admin>
            <PageHeader title="Dashboard" subtitle="Records per directory">""</PageHeader>
            <div class="stat-grid">
                {count_card::<Project>()}
                {count_card::<Consultant>()}
                {count_card::<Contractor>()}
                {count_card::<Agent>()}
                {count_card::<Lecturer>()}
                {count_card::<Institution>()}
                {count_card::<Director>()}
                {count_card::<JobSeeker>()}
                {count_card::<JobVacancy>()}
            </div>
        </PageFrame>
    }
}

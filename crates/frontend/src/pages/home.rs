//! Landing page: a short intro and the first few records of the main directories

use crate::domain::a001_project::ui::list::ProjectCard;
use crate::domain::a002_consultant::ui::list::ConsultantCard;
use crate::domain::a003_contractor::ui::list::ContractorCard;
use crate::domain::a009_job_vacancy::ui::list::JobVacancyCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use leptos_router::components::A;
use mep_contracts::domain::a001_project::Project;
use mep_contracts::domain::a002_consultant::Consultant;
use mep_contracts::domain::a003_contractor::Contractor;
use mep_contracts::domain::a009_job_vacancy::JobVacancy;
use mep_contracts::domain::common::Resource;
use mep_contracts::enums::ResourceKind;
use mep_contracts::shared::listing::featured;
use thaw::*;

fn featured_section<T, F, V>(title: &'static str, card: F) -> impl IntoView
where
    T: Resource + Send + Sync + 'static,
    F: Fn(T) -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let collection = RemoteCollection::<T>::fetched();
    let items = Signal::derive(move || collection.items.with(|items| featured(items)));
    let kind = T::KIND;

    view! {
        <section class="home-section">
            <div class="home-section__header">
                <h2>{title}</h2>
                <A href=format!("/{}", kind.path()) attr:class="home-section__more">
                    {format!("All {}", kind.list_name().to_lowercase())}
                </A>
            </div>
            <Show when=move || collection.loading.get()>
                <Spinner label="Loading..." />
            </Show>
            {move || collection.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="card-grid">
                {move || items.get().into_iter().map(card).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--page" category=PageCategory::Content>
            <section class="hero">
                <h1>"MEP Hub"</h1>
                <p class="hero__lead">
                    "The directory of mechanical, electrical and plumbing professionals: \
                     projects, consultants, contractors, suppliers, educators and jobs in one place."
                </p>
                <div class="hero__links">
                    {ResourceKind::directories()
                        .into_iter()
                        .map(|kind| view! {
                            <A href=format!("/{}", kind.path()) attr:class="hero__link">
                                {icon(kind.path())}
                                <span>{kind.list_name()}</span>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>

            {featured_section("Featured projects", |project: Project| view! { <ProjectCard project=project /> })}
            {featured_section("Consultants", |consultant: Consultant| view! { <ConsultantCard consultant=consultant /> })}
            {featured_section("Contractors", |contractor: Contractor| view! { <ContractorCard contractor=contractor /> })}
            {featured_section("Latest vacancies", |vacancy: JobVacancy| view! { <JobVacancyCard vacancy=vacancy /> })}

            <section class="home-cta">
                <Card>
                    <h2>"List your firm"</h2>
                    <p>"Get in touch and we will add your company to the directory."</p>
                    <A href="/contact" attr:class="button button--primary">"Contact us"</A>
                </Card>
            </section>
        </PageFrame>
    }
}

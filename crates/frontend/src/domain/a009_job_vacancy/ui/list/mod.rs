use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a009_job_vacancy::{JobVacancy, JobVacancyField, JobVacancySort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use thaw::*;

#[component]
pub fn JobVacancyCard(vacancy: JobVacancy) -> impl IntoView {
    let posted = format_date(&vacancy.created_at);
    let deadline = format_date(&vacancy.application_deadline);

    view! {
        <ResourceCard
            title=vacancy.position_title.clone()
            href=vacancy.detail_route()
            subtitle=vacancy.company.name.clone()
            badges=vec![vacancy.job_type.clone(), vacancy.employment_type.clone()]
            tags=vacancy.qualifications.clone()
        >
            <InfoLine icon_name="map-pin" text=vacancy.location() />
            <InfoLine icon_name="job-vacancies" text=vacancy.experience_level.clone() />
            {(!posted.is_empty()).then(|| view! {
                <div class="resource-card__meta">{format!("Posted {}", posted)}</div>
            })}
            {(!deadline.is_empty()).then(|| view! {
                <div class="resource-card__meta">{format!("Apply by {}", deadline)}</div>
            })}
        </ResourceCard>
    }
}

#[component]
pub fn JobVacancyList() -> impl IntoView {
    let collection = RemoteCollection::<JobVacancy>::fetched();

    let search = RwSignal::new(String::new());
    let job_type = RwSignal::new(String::new());
    let employment_type = RwSignal::new(String::new());
    let experience_level = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let sort = RwSignal::new(Some(SortSpec::desc(JobVacancySort::Posted)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let options_for = move |field: JobVacancyField| {
        Signal::derive(move || plain_options(distinct_values(&public.get(), field)))
    };
    let job_type_options = options_for(JobVacancyField::JobType);
    let employment_options = options_for(JobVacancyField::EmploymentType);
    let level_options = options_for(JobVacancyField::ExperienceLevel);
    let city_options = options_for(JobVacancyField::City);

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(JobVacancyField::JobType, job_type.get()))
            .filter(Filter::Equals(JobVacancyField::EmploymentType, employment_type.get()))
            .filter(Filter::Equals(JobVacancyField::ExperienceLevel, experience_level.get()))
            .filter(Filter::Equals(JobVacancyField::City, city.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a009_job_vacancy--list" category=PageCategory::List>
            <PageHeader title="Job Vacancies" subtitle="Open MEP positions across the industry">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search title, company, city..." />
                <SelectFilter label="Job type" options=job_type_options value=job_type />
                <SelectFilter label="Employment" options=employment_options value=employment_type />
                <SelectFilter label="Experience" options=level_options value=experience_level />
                <SelectFilter label="City" options=city_options value=city />
                <SortSelect
                    options=vec![
                        (JobVacancySort::Posted, "Date posted"),
                        (JobVacancySort::Title, "Title"),
                        (JobVacancySort::Experience, "Experience"),
                    ]
                    sort=sort
                />
            </div>

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
                empty_message="No open vacancies match your filters."
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|v| v.id.clone()
                    children=|vacancy| view! { <JobVacancyCard vacancy=vacancy /> }
                />
            </div>
        </PageFrame>
    }
}

use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::format::format_years;
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a008_job_seeker::aggregate::PROFESSIONAL_TYPES;
use mep_contracts::domain::a008_job_seeker::{JobSeeker, JobSeekerField, JobSeekerSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, Filter, ListQuery, SortSpec};
use thaw::*;

pub fn professional_type_options() -> Vec<(String, String)> {
    plain_options(PROFESSIONAL_TYPES.iter().map(|t| t.to_string()).collect())
}

#[component]
pub fn JobSeekerCard(seeker: JobSeeker) -> impl IntoView {
    let employment = if seeker.currently_employed && !seeker.current_company.trim().is_empty() {
        format!("At {}", seeker.current_company.trim())
    } else if seeker.currently_employed {
        "Employed".to_string()
    } else {
        "Available".to_string()
    };

    view! {
        <ResourceCard
            title=seeker.full_name()
            href=seeker.detail_route()
            subtitle=seeker.highest_qualification.clone()
            badges=vec![seeker.professional_type.clone()]
        >
            <InfoLine icon_name="jobseekers" text=format_years(seeker.years_of_experience) />
            <InfoLine icon_name="projects" text=employment />
        </ResourceCard>
    }
}

#[component]
pub fn JobSeekerList() -> impl IntoView {
    let collection = RemoteCollection::<JobSeeker>::fetched();

    let search = RwSignal::new(String::new());
    let professional_type = RwSignal::new(String::new());
    let sort = RwSignal::new(Some(SortSpec::asc(JobSeekerSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(JobSeekerField::ProfessionalType, professional_type.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a008_job_seeker--list" category=PageCategory::List>
            <PageHeader title="Job Seekers" subtitle="MEP professionals open to new roles">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, profession, qualification..." />
                <SelectFilter
                    label="Professional type"
                    options=professional_type_options()
                    value=professional_type
                />
                <SortSelect
                    options=vec![(JobSeekerSort::Name, "Name"), (JobSeekerSort::Experience, "Experience")]
                    sort=sort
                />
            </div>

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|s| s.id.clone()
                    children=|seeker| view! { <JobSeekerCard seeker=seeker /> }
                />
            </div>
        </PageFrame>
    }
}

use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::format::format_years;
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a007_director::{Director, DirectorField, DirectorSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn DirectorCard(director: Director) -> impl IntoView {
    let subtitle = [director.position.trim(), director.company.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <ResourceCard
            title=director.name.clone()
            href=director.detail_route()
            subtitle=subtitle
            tags=director.areas_of_expertise.clone()
        >
            <InfoLine icon_name="directors" text=format_years(director.years_of_experience) />
            <InfoLine icon_name="mail" text=director.email.clone() />
        </ResourceCard>
    }
}

#[component]
pub fn DirectorList() -> impl IntoView {
    let collection = RemoteCollection::<Director>::fetched();

    let search = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let expertise = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(DirectorSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let company_options =
        Signal::derive(move || plain_options(distinct_values(&public.get(), DirectorField::Company)));
    let expertise_options =
        Signal::derive(move || distinct_values(&public.get(), DirectorField::Expertise));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(DirectorField::Company, company.get()))
            .filter(Filter::HasAllTags(DirectorField::Expertise, expertise.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a007_director--list" category=PageCategory::List>
            <PageHeader title="Directors" subtitle="Company directors and senior MEP professionals">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, position, company..." />
                <SelectFilter label="Company" options=company_options value=company />
                <SortSelect
                    options=vec![(DirectorSort::Name, "Name"), (DirectorSort::Experience, "Experience")]
                    sort=sort
                />
            </div>
            <TagFilter label="Expertise" options=expertise_options selected=expertise />

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|d| d.id.clone()
                    children=|director| view! { <DirectorCard director=director /> }
                />
            </div>
        </PageFrame>
    }
}

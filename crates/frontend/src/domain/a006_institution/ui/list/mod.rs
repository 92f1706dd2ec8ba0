use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::list_utils::{CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a006_institution::{
    Institution, InstitutionField, InstitutionSort, InstitutionType,
};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

fn type_options() -> Vec<(String, String)> {
    [InstitutionType::Learning, InstitutionType::Training]
        .iter()
        .map(|t| (t.as_str().to_string(), t.display_name().to_string()))
        .collect()
}

#[component]
pub fn InstitutionCard(institution: Institution) -> impl IntoView {
    view! {
        <ResourceCard
            title=institution.name.clone()
            href=institution.detail_route()
            badges=vec![institution.institution_type.display_name().to_string()]
            tags=institution.courses.clone()
        >
            <InfoLine icon_name="map-pin" text=institution.address.clone() />
            <InfoLine icon_name="mail" text=institution.email.clone() />
            <InfoLine icon_name="phone" text=institution.contact_number.clone() />
        </ResourceCard>
    }
}

#[component]
pub fn InstitutionList() -> impl IntoView {
    let collection = RemoteCollection::<Institution>::fetched();

    let search = RwSignal::new(String::new());
    let institution_type = RwSignal::new(String::new());
    let courses = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(InstitutionSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let course_options =
        Signal::derive(move || distinct_values(&public.get(), InstitutionField::Courses));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(InstitutionField::InstitutionType, institution_type.get()))
            .filter(Filter::HasAllTags(InstitutionField::Courses, courses.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a006_institution--list" category=PageCategory::List>
            <PageHeader title="Institutions" subtitle="Universities, colleges and training centres">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, address, course..." />
                <SelectFilter label="Type" options=type_options() value=institution_type />
                <SortSelect options=vec![(InstitutionSort::Name, "Name")] sort=sort />
            </div>
            <TagFilter label="Courses" options=course_options selected=courses />

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|i| i.id.clone()
                    children=|institution| view! { <InstitutionCard institution=institution /> }
                />
            </div>
        </PageFrame>
    }
}

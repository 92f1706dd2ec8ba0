use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::format::format_years;
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a005_lecturer::{Lecturer, LecturerField, LecturerSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn LecturerCard(lecturer: Lecturer) -> impl IntoView {
    view! {
        <ResourceCard
            title=lecturer.full_name()
            href=lecturer.detail_route()
            subtitle=lecturer.institution.clone()
            badges=vec![lecturer.lecturer_type.clone()]
            tags=lecturer.specialties.clone()
        >
            <InfoLine icon_name="lecturers" text=format_years(lecturer.years_of_experience) />
            <InfoLine icon_name="mail" text=lecturer.email.clone() />
        </ResourceCard>
    }
}

#[component]
pub fn LecturerList() -> impl IntoView {
    let collection = RemoteCollection::<Lecturer>::fetched();

    let search = RwSignal::new(String::new());
    let institution = RwSignal::new(String::new());
    let lecturer_type = RwSignal::new(String::new());
    let specialties = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(LecturerSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let institution_options = Signal::derive(move || {
        plain_options(distinct_values(&public.get(), LecturerField::Institution))
    });
    let type_options = Signal::derive(move || {
        plain_options(distinct_values(&public.get(), LecturerField::LecturerType))
    });
    let specialty_options =
        Signal::derive(move || distinct_values(&public.get(), LecturerField::Specialties));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(LecturerField::Institution, institution.get()))
            .filter(Filter::Equals(LecturerField::LecturerType, lecturer_type.get()))
            .filter(Filter::HasAllTags(LecturerField::Specialties, specialties.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a005_lecturer--list" category=PageCategory::List>
            <PageHeader title="Lecturers" subtitle="Academics and trainers teaching MEP disciplines">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, institution, specialty..." />
                <SelectFilter label="Institution" options=institution_options value=institution />
                <SelectFilter label="Type" options=type_options value=lecturer_type />
                <SortSelect
                    options=vec![(LecturerSort::Name, "Name"), (LecturerSort::Experience, "Experience")]
                    sort=sort
                />
            </div>
            <TagFilter label="Specialties" options=specialty_options selected=specialties />

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|l| l.id.clone()
                    children=|lecturer| view! { <LecturerCard lecturer=lecturer /> }
                />
            </div>
        </PageFrame>
    }
}

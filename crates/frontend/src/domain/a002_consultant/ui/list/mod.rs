use crate::shared::components::{FirmCard, PageHeader};
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a002_consultant::{Consultant, ConsultantField, ConsultantSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn ConsultantCard(consultant: Consultant) -> impl IntoView {
    let href = consultant.detail_route();
    view! { <FirmCard firm=consultant.firm firm_type=consultant.consultant_type href=href /> }
}

#[component]
pub fn ConsultantList() -> impl IntoView {
    let collection = RemoteCollection::<Consultant>::fetched();

    let search = RwSignal::new(String::new());
    let consultant_type = RwSignal::new(String::new());
    let specialties = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(ConsultantSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let type_options = Signal::derive(move || {
        plain_options(distinct_values(&public.get(), ConsultantField::ConsultantType))
    });
    let specialty_options =
        Signal::derive(move || distinct_values(&public.get(), ConsultantField::Specialties));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(ConsultantField::ConsultantType, consultant_type.get()))
            .filter(Filter::HasAllTags(ConsultantField::Specialties, specialties.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a002_consultant--list" category=PageCategory::List>
            <PageHeader title="Consultants" subtitle="MEP design and consulting firms">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, email, address, specialties..." />
                <SelectFilter label="Consultant type" options=type_options value=consultant_type />
                <SortSelect options=vec![(ConsultantSort::Name, "Name")] sort=sort />
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
                    key=|c| c.firm.id.clone()
                    children=|consultant| view! { <ConsultantCard consultant=consultant /> }
                />
            </div>
        </PageFrame>
    }
}

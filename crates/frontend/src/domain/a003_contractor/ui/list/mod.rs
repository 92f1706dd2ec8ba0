use crate::shared::components::{FirmCard, PageHeader};
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a003_contractor::{Contractor, ContractorField, ContractorSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn ContractorCard(contractor: Contractor) -> impl IntoView {
    let href = contractor.detail_route();
    view! { <FirmCard firm=contractor.firm firm_type=contractor.contractor_type href=href /> }
}

#[component]
pub fn ContractorList() -> impl IntoView {
    let collection = RemoteCollection::<Contractor>::fetched();

    let search = RwSignal::new(String::new());
    let contractor_type = RwSignal::new(String::new());
    let specialties = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(ContractorSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let type_options = Signal::derive(move || {
        plain_options(distinct_values(&public.get(), ContractorField::ContractorType))
    });
    let specialty_options =
        Signal::derive(move || distinct_values(&public.get(), ContractorField::Specialties));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(ContractorField::ContractorType, contractor_type.get()))
            .filter(Filter::HasAllTags(ContractorField::Specialties, specialties.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a003_contractor--list" category=PageCategory::List>
            <PageHeader title="Contractors" subtitle="Licensed MEP contracting companies">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, email, address, specialties..." />
                <SelectFilter label="Contractor type" options=type_options value=contractor_type />
                <SortSelect options=vec![(ContractorSort::Name, "Name")] sort=sort />
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
                    children=|contractor| view! { <ContractorCard contractor=contractor /> }
                />
            </div>
        </PageFrame>
    }
}

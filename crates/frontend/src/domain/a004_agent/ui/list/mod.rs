use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a004_agent::{Agent, AgentField, AgentRole, AgentSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

fn role_options() -> Vec<(String, String)> {
    AgentRole::all()
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect()
}

#[component]
pub fn AgentCard(agent: Agent) -> impl IntoView {
    view! {
        <ResourceCard
            title=agent.name.clone()
            href=agent.detail_route()
            badges=vec![agent.role.display_name().to_string()]
            tags=agent.equipment_type.clone()
        >
            <InfoLine icon_name="map-pin" text=agent.location.clone() />
            <InfoLine icon_name="mail" text=agent.company_email.clone() />
            <InfoLine icon_name="phone" text=agent.contact_number.clone() />
        </ResourceCard>
    }
}

#[component]
pub fn AgentList() -> impl IntoView {
    let collection = RemoteCollection::<Agent>::fetched();

    let search = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let equipment = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::asc(AgentSort::Name)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let location_options =
        Signal::derive(move || plain_options(distinct_values(&public.get(), AgentField::Location)));
    let equipment_options =
        Signal::derive(move || distinct_values(&public.get(), AgentField::EquipmentType));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(AgentField::Role, role.get()))
            .filter(Filter::Equals(AgentField::Location, location.get()))
            .filter(Filter::HasAllTags(AgentField::EquipmentType, equipment.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a004_agent--list" category=PageCategory::List>
            <PageHeader title="Agents & Suppliers" subtitle="Local agents, suppliers and dealers of MEP equipment">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search name, location, equipment..." />
                <SelectFilter label="Role" options=role_options() value=role />
                <SelectFilter label="Location" options=location_options value=location />
                <SortSelect
                    options=vec![(AgentSort::Name, "Name"), (AgentSort::Location, "Location")]
                    sort=sort
                />
            </div>
            <TagFilter label="Equipment" options=equipment_options selected=equipment />

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|a| a.id.clone()
                    children=|agent| view! { <AgentCard agent=agent /> }
                />
            </div>
        </PageFrame>
    }
}

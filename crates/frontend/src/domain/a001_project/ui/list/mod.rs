use crate::shared::components::{InfoLine, PageHeader, ResourceCard};
use crate::shared::date_utils::format_date_range;
use crate::shared::format::format_amount;
use crate::shared::list_utils::{
    plain_options, CollectionStatus, SearchInput, SelectFilter, SortSelect, TagFilter,
};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::remote_collection::RemoteCollection;
use leptos::prelude::*;
use mep_contracts::domain::a001_project::{Project, ProjectField, ProjectSort};
use mep_contracts::domain::common::{visible_only, Resource};
use mep_contracts::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let dates = format_date_range(&project.start_date, &project.end_date);
    let amount = format_amount(project.amount);

    view! {
        <ResourceCard
            title=project.title.clone()
            href=project.detail_route()
            subtitle=project.contractor.clone()
            badges=vec![project.status.clone()]
            tags=project.tags.clone()
        >
            <InfoLine icon_name="projects" text=dates />
            {(!amount.is_empty()).then(|| view! { <div class="resource-card__amount">{amount}</div> })}
        </ResourceCard>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let collection = RemoteCollection::<Project>::fetched();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let tags = RwSignal::new(BTreeSet::<String>::new());
    let sort = RwSignal::new(Some(SortSpec::desc(ProjectSort::StartDate)));

    let public = Signal::derive(move || collection.items.with(|items| visible_only(items)));
    let status_options =
        Signal::derive(move || plain_options(distinct_values(&public.get(), ProjectField::Status)));
    let tag_options = Signal::derive(move || distinct_values(&public.get(), ProjectField::Tags));

    let shown = Signal::derive(move || {
        let mut query = ListQuery::new()
            .search(search.get())
            .filter(Filter::Equals(ProjectField::Status, status.get()))
            .filter(Filter::HasAllTags(ProjectField::Tags, tags.get()));
        query.sort = sort.get();
        apply(&public.get(), &query)
    });

    view! {
        <PageFrame page_id="a001_project--list" category=PageCategory::List>
            <PageHeader
                title="Projects"
                subtitle="MEP projects delivered across Sri Lanka"
            >
                <Badge appearance=BadgeAppearance::Tint>
                    {move || shown.with(Vec::len).to_string()}
                </Badge>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search title, contractor, tags..." />
                <SelectFilter label="Status" options=status_options value=status />
                <SortSelect
                    options=vec![
                        (ProjectSort::StartDate, "Start date"),
                        (ProjectSort::Title, "Title"),
                        (ProjectSort::Amount, "Amount"),
                    ]
                    sort=sort
                />
            </div>
            <TagFilter label="Tags" options=tag_options selected=tags />

            <CollectionStatus
                loading=collection.loading
                error=collection.error
                count=Signal::derive(move || shown.with(Vec::len))
            />

            <div class="card-grid">
                <For
                    each=move || shown.get()
                    key=|p| p.id.clone()
                    children=|project| view! { <ProjectCard project=project /> }
                />
            </div>
        </PageFrame>
    }
}

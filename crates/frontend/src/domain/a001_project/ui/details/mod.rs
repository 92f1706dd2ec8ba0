use crate::shared::date_utils::format_date;
use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use crate::shared::format::format_amount;
use leptos::prelude::*;
use mep_contracts::domain::a001_project::Project;

#[component]
pub fn ProjectDetails() -> impl IntoView {
    detail_page("a001_project--detail", |project: Project| {
        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{project.title.clone()}</h1>
                    <span class="badge badge--primary">{project.status.clone()}</span>
                </div>
                <p class="details-description">{project.description.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Contractor" value=project.contractor.clone() />
                    <DetailField label="Start date" value=format_date(&project.start_date) />
                    <DetailField label="End date" value=format_date(&project.end_date) />
                    <DetailField label="Contract value" value=format_amount(project.amount) />
                </div>
                <DetailTags label="Team" values=project.team_members.clone() />
                <DetailTags label="Tags" values=project.tags.clone() />
            </div>
        }
        .into_any()
    })
}

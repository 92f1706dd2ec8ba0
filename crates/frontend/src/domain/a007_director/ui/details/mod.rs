use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use crate::shared::format::format_years;
use leptos::prelude::*;
use mep_contracts::domain::a007_director::Director;

#[component]
pub fn DirectorDetails() -> impl IntoView {
    detail_page("a007_director--detail", |director: Director| {
        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{director.name.clone()}</h1>
                </div>
                <p class="details-description">{director.bio.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Position" value=director.position.clone() />
                    <DetailField label="Company" value=director.company.clone() />
                    <DetailField label="Experience" value=format_years(director.years_of_experience) />
                    <DetailField label="Email" value=director.email.clone() />
                </div>
                <DetailTags label="Areas of expertise" values=director.areas_of_expertise.clone() />
                <DetailTags label="Qualifications" values=director.qualifications.clone() />
                <DetailTags label="Projects managed" values=director.projects_managed.clone() />
            </div>
        }
        .into_any()
    })
}

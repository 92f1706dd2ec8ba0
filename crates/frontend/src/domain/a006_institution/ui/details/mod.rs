use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use leptos::prelude::*;
use mep_contracts::domain::a006_institution::Institution;

#[component]
pub fn InstitutionDetails() -> impl IntoView {
    detail_page("a006_institution--detail", |institution: Institution| {
        let website = institution.website.clone();
        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{institution.name.clone()}</h1>
                    <span class="badge badge--primary">
                        {institution.institution_type.display_name()}
                    </span>
                </div>
                <p class="details-description">{institution.description.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Address" value=institution.address.clone() />
                    <DetailField label="Email" value=institution.email.clone() />
                    <DetailField label="Phone" value=institution.contact_number.clone() />
                </div>
                {(!website.trim().is_empty()).then(|| view! {
                    <a class="details-link" href=website.clone() target="_blank" rel="noopener">
                        {website.clone()}
                    </a>
                })}
                <DetailTags label="Courses" values=institution.courses.clone() />
            </div>
        }
        .into_any()
    })
}

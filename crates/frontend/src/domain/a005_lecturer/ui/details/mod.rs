use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use crate::shared::format::format_years;
use leptos::prelude::*;
use mep_contracts::domain::a005_lecturer::Lecturer;

#[component]
pub fn LecturerDetails() -> impl IntoView {
    detail_page("a005_lecturer--detail", |lecturer: Lecturer| {
        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{lecturer.full_name()}</h1>
                    {(!lecturer.lecturer_type.trim().is_empty()).then(|| view! {
                        <span class="badge badge--primary">{lecturer.lecturer_type.clone()}</span>
                    })}
                </div>
                <p class="details-description">{lecturer.bio.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Institution" value=lecturer.institution.clone() />
                    <DetailField label="Experience" value=format_years(lecturer.years_of_experience) />
                    <DetailField label="Email" value=lecturer.email.clone() />
                    <DetailField label="Phone" value=lecturer.contact_number.clone() />
                </div>
                <DetailTags label="Qualifications" values=lecturer.qualifications.clone() />
                <DetailTags label="Specialties" values=lecturer.specialties.clone() />
            </div>
        }
        .into_any()
    })
}

use crate::shared::date_utils::format_date;
use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use crate::shared::format::format_years;
use leptos::prelude::*;
use mep_contracts::domain::a009_job_vacancy::JobVacancy;

#[component]
pub fn JobVacancyDetails() -> impl IntoView {
    detail_page("a009_job_vacancy--detail", |vacancy: JobVacancy| {
        let logo = vacancy.company.logo.clone();
        let website = vacancy.company_website.clone();
        let apply_href = format!("mailto:{}", vacancy.contact_email.trim());

        view! {
            <div class="details-container">
                <div class="details-header">
                    {(!logo.trim().is_empty()).then(|| view! {
                        <img class="details-logo" src=logo.clone() alt=vacancy.company.name.clone() />
                    })}
                    <div>
                        <h1>{vacancy.position_title.clone()}</h1>
                        <div class="details-subtitle">{vacancy.company.name.clone()}</div>
                    </div>
                </div>
                <p class="details-description">{vacancy.description.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Location" value=vacancy.location() />
                    <DetailField label="Job type" value=vacancy.job_type.clone() />
                    <DetailField label="Employment" value=vacancy.employment_type.clone() />
                    <DetailField label="Experience level" value=vacancy.experience_level.clone() />
                    <DetailField label="Experience" value=format_years(vacancy.years_of_experience) />
                    <DetailField label="Posted" value=format_date(&vacancy.created_at) />
                    <DetailField label="Apply by" value=format_date(&vacancy.application_deadline) />
                </div>
                <DetailTags label="Qualifications" values=vacancy.qualifications.clone() />
                {(!website.trim().is_empty()).then(|| view! {
                    <a class="details-link" href=website.clone() target="_blank" rel="noopener">
                        {website.clone()}
                    </a>
                })}
                {(!vacancy.contact_email.trim().is_empty()).then(|| view! {
                    <a class="button button--primary" href=apply_href.clone()>"Apply by email"</a>
                })}
            </div>
        }
        .into_any()
    })
}

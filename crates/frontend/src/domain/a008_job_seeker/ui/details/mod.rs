use crate::shared::detail_page::{detail_page, DetailField};
use crate::shared::format::format_years;
use leptos::prelude::*;
use mep_contracts::domain::a008_job_seeker::JobSeeker;

#[component]
pub fn JobSeekerDetails() -> impl IntoView {
    detail_page("a008_job_seeker--detail", |seeker: JobSeeker| {
        let history: Vec<_> = seeker
            .work_history
            .iter()
            .filter(|w| !w.is_blank())
            .cloned()
            .collect();
        let current_company = if seeker.currently_employed {
            seeker.current_company.clone()
        } else {
            String::new()
        };

        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{seeker.full_name()}</h1>
                    <span class="badge badge--primary">{seeker.professional_type.clone()}</span>
                </div>
                <div class="details-grid">
                    <DetailField label="Experience" value=format_years(seeker.years_of_experience) />
                    <DetailField label="Highest qualification" value=seeker.highest_qualification.clone() />
                    <DetailField label="Current company" value=current_company />
                    <DetailField label="Email" value=seeker.email.clone() />
                    <DetailField label="Phone" value=seeker.contact_number.clone() />
                </div>
                {(!history.is_empty()).then(|| view! {
                    <section class="work-history">
                        <h2>"Work history"</h2>
                        <ul>
                            {history
                                .into_iter()
                                .map(|entry| view! {
                                    <li class="work-history__item">
                                        <strong>{entry.job_title}</strong>
                                        <span>{entry.company}</span>
                                        <span class="work-history__duration">{entry.duration}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </section>
                })}
            </div>
        }
        .into_any()
    })
}

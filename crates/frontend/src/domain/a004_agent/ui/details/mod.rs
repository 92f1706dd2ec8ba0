use crate::shared::detail_page::{detail_page, DetailField, DetailTags};
use leptos::prelude::*;
use mep_contracts::domain::a004_agent::Agent;

#[component]
pub fn AgentDetails() -> impl IntoView {
    detail_page("a004_agent--detail", |agent: Agent| {
        let website = agent.company_website.clone();
        view! {
            <div class="details-container">
                <div class="details-header">
                    <h1>{agent.name.clone()}</h1>
                    <span class="badge badge--primary">{agent.role.display_name()}</span>
                </div>
                <p class="details-description">{agent.description.clone()}</p>
                <div class="details-grid">
                    <DetailField label="Location" value=agent.location.clone() />
                    <DetailField label="Email" value=agent.company_email.clone() />
                    <DetailField label="Phone" value=agent.contact_number.clone() />
                </div>
                {(!website.trim().is_empty()).then(|| view! {
                    <a class="details-link" href=website.clone() target="_blank" rel="noopener">
                        {website.clone()}
                    </a>
                })}
                <DetailTags label="Equipment" values=agent.equipment_type.clone() />
                <DetailTags label="Brands" values=agent.brands.clone() />
            </div>
        }
        .into_any()
    })
}

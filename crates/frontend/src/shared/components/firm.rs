//! Card and detail body shared by consultants and contractors

use super::resource_card::{InfoLine, ResourceCard};
use crate::shared::detail_page::{DetailField, DetailTags};
use leptos::prelude::*;
use mep_contracts::domain::common::FirmProfile;

#[component]
pub fn FirmCard(
    firm: FirmProfile,
    /// Consultant or contractor type
    #[prop(into)]
    firm_type: String,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <ResourceCard
            title=firm.name.clone()
            href=href
            badges=vec![firm_type]
            tags=firm.specialties.clone()
        >
            <InfoLine icon_name="map-pin" text=firm.company_address.clone() />
            <InfoLine icon_name="mail" text=firm.company_email.clone() />
            <InfoLine icon_name="phone" text=firm.contact_number.clone() />
        </ResourceCard>
    }
}

pub fn firm_details(firm: FirmProfile, type_label: &'static str, firm_type: String) -> AnyView {
    let website = firm.company_website.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h1>{firm.name.clone()}</h1>
            </div>
            <p class="details-description">{firm.description.clone()}</p>
            <div class="details-grid">
                <DetailField label=type_label value=firm_type />
                <DetailField label="Email" value=firm.company_email.clone() />
                <DetailField label="Phone" value=firm.contact_number.clone() />
                <DetailField label="Address" value=firm.company_address.clone() />
            </div>
            {(!website.trim().is_empty()).then(|| view! {
                <a class="details-link" href=website.clone() target="_blank" rel="noopener">
                    {website.clone()}
                </a>
            })}
            <DetailTags label="Specialties" values=firm.specialties.clone() />
        </div>
    }
    .into_any()
}

use crate::shared::components::firm_details;
use crate::shared::detail_page::detail_page;
use leptos::prelude::*;
use mep_contracts::domain::a003_contractor::Contractor;

#[component]
pub fn ContractorDetails() -> impl IntoView {
    detail_page("a003_contractor--detail", |contractor: Contractor| {
        firm_details(contractor.firm, "Contractor type", contractor.contractor_type)
    })
}

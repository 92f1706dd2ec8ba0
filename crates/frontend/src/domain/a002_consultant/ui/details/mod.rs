use crate::shared::components::firm_details;
use crate::shared::detail_page::detail_page;
use leptos::prelude::*;
use mep_contracts::domain::a002_consultant::Consultant;

#[component]
pub fn ConsultantDetails() -> impl IntoView {
    detail_page("a002_consultant--detail", |consultant: Consultant| {
        firm_details(consultant.firm, "Consultant type", consultant.consultant_type)
    })
}

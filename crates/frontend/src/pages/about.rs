use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use leptos_router::components::A;
use mep_contracts::enums::ResourceKind;
use thaw::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageFrame page_id="about--page" category=PageCategory::Content>
            <PageHeader
                title="About MEP Hub"
                subtitle="A shared directory for the mechanical, electrical and plumbing industry"
            >
                ""
            </PageHeader>
            <div class="content-page">
                <p>
                    "MEP Hub brings together the people and firms behind building services: \
                     the projects they deliver, the consultants who design them, the contractors \
                     who install them and the suppliers who equip them."
                </p>
                <p>
                    "Educators and institutions list their courses here, and job seekers and \
                     employers use the jobs board to find each other."
                </p>

                <h2>"What you can find"</h2>
                <div class="card-grid card-grid--compact">
                    {ResourceKind::directories()
                        .into_iter()
                        .map(|kind| view! {
                            <Card class="about-card">
                                <A href=format!("/{}", kind.path()) attr:class="about-card__link">
                                    {icon(kind.path())}
                                    <span>{kind.list_name()}</span>
                                </A>
                            </Card>
                        })
                        .collect_view()}
                </div>

                <h2>"Getting listed"</h2>
                <p>
                    "Listings are reviewed by the MEP Hub team before they appear. "
                    <A href="/contact">"Send us a message"</A>
                    " with your company details and we will get back to you."
                </p>
            </div>
        </PageFrame>
    }
}

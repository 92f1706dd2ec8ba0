use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Summary card used by every directory list and the homepage
#[component]
pub fn ResourceCard(
    #[prop(into)] title: String,
    /// Route of the detail page
    #[prop(into)]
    href: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Short labels shown as badges (type, status, ...)
    #[prop(optional)]
    badges: Vec<String>,
    /// Tag list (specialties, courses, ...)
    #[prop(optional)]
    tags: Vec<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let subtitle = subtitle.filter(|s| !s.trim().is_empty());
    let tags: Vec<String> = tags.into_iter().filter(|t| !t.trim().is_empty()).collect();

    view! {
        <Card class="resource-card">
            <div class="resource-card__header">
                <A href=href attr:class="resource-card__title">{title}</A>
                <div class="resource-card__badges">
                    {badges
                        .into_iter()
                        .filter(|b| !b.trim().is_empty())
                        .map(|b| view! { <Badge appearance=BadgeAppearance::Tint>{b}</Badge> })
                        .collect_view()}
                </div>
            </div>
            {subtitle.map(|s| view! { <div class="resource-card__subtitle">{s}</div> })}
            {children.map(|c| view! { <div class="resource-card__body">{c()}</div> })}
            {(!tags.is_empty()).then(|| view! {
                <div class="resource-card__tags">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </div>
            })}
        </Card>
    }
}

/// Icon + text line inside a card or detail page; renders nothing when empty
#[component]
pub fn InfoLine(icon_name: &'static str, #[prop(into)] text: String) -> impl IntoView {
    (!text.trim().is_empty()).then(|| {
        view! {
            <div class="info-line">
                {crate::shared::icons::icon(icon_name)}
                <span>{text}</span>
            </div>
        }
    })
}

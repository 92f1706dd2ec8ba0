use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Dashboard tile: record count of one resource, linking to its admin page
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count (None = loading/error)
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// How many of them the public site shows
    #[prop(into)]
    visible: Signal<Option<usize>>,
    #[prop(into)] href: String,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        visible
            .get()
            .map(|n| view! { <div class="stat-card__subtitle">{format!("{} public", n)}</div> })
    };

    view! {
        <A href=href attr:class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </A>
    }
}

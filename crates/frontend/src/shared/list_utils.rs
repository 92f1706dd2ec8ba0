//! Controls shared by the directory list pages: search box, filter
//! dropdowns, tag chips, sort selector and the loading/error/empty banner.

use crate::shared::icons::icon;
use leptos::prelude::*;
use mep_contracts::shared::listing::{SortDirection, SortSpec};
use std::collections::BTreeSet;
use thaw::*;

/// Arrow shown next to the sort selector
pub fn get_sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Free-text search. Filters on every keystroke, no debounce.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <Input value=value placeholder=placeholder />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="button button--icon search-input__clear"
                    title="Clear"
                    on:click=move |_| value.set(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// `(value, label)` pairs where the label is the value itself
pub fn plain_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Single-choice dropdown over `(value, label)` options; the empty value
/// stands for "All"
#[component]
pub fn SelectFilter(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small class="filter">
            <Label>{label}</Label>
            <Select value=value>
                <option value="">"All"</option>
                <For
                    each=move || options.get()
                    key=|(value, _)| value.clone()
                    children=move |(value, text)| {
                        view! { <option value=value>{text}</option> }
                    }
                />
            </Select>
        </Flex>
    }
}

/// Multi-select chips; a record must carry every selected tag
#[component]
pub fn TagFilter(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let toggle = move |tag: String| {
        selected.update(|set| {
            if !set.remove(&tag) {
                set.insert(tag);
            }
        });
    };

    view! {
        <div class="filter filter--tags">
            <Label>{label}</Label>
            <div class="tag-chips">
                <For
                    each=move || options.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let text = tag.clone();
                        let probe = tag.clone();
                        view! {
                            <button
                                class="tag-chip"
                                class:tag-chip--active=move || selected.with(|s| s.contains(&probe))
                                on:click=move |_| toggle(tag.clone())
                            >
                                {text}
                            </button>
                        }
                    }
                />
                <Show when=move || selected.with(|s| !s.is_empty())>
                    <button class="tag-chip tag-chip--clear" on:click=move |_| selected.set(BTreeSet::new())>
                        "Clear"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Sort key dropdown plus a direction toggle
#[component]
pub fn SortSelect<K>(
    options: Vec<(K, &'static str)>,
    sort: RwSignal<Option<SortSpec<K>>>,
) -> impl IntoView
where
    K: Copy + Eq + Send + Sync + 'static,
{
    let initial = sort
        .get_untracked()
        .and_then(|spec| options.iter().position(|(k, _)| *k == spec.key))
        .map(|i| i.to_string())
        .unwrap_or_default();
    let options = StoredValue::new(options);
    let selected = RwSignal::new(initial);

    Effect::new(move |_| {
        let choice = selected.get();
        let key = choice
            .parse::<usize>()
            .ok()
            .and_then(|i| options.with_value(|o| o.get(i).map(|(k, _)| *k)));
        sort.update(|current| {
            let direction = current.map(|s| s.direction).unwrap_or_default();
            *current = key.map(|key| SortSpec { key, direction });
        });
    });

    let flip = move |_| {
        sort.update(|current| {
            if let Some(spec) = current {
                spec.direction = spec.direction.toggled();
            }
        });
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small class="filter">
            <Label>"Sort by"</Label>
            <Flex gap=FlexGap::Small>
                <Select value=selected>
                    <option value="">"Default"</option>
                    {options.with_value(|o| {
                        o.iter()
                            .enumerate()
                            .map(|(i, (_, label))| view! { <option value=i.to_string()>{*label}</option> })
                            .collect_view()
                    })}
                </Select>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=flip
                    disabled=Signal::derive(move || sort.with(|s| s.is_none()))
                >
                    {move || sort.get().map(|s| get_sort_indicator(s.direction)).unwrap_or("⇅")}
                </Button>
            </Flex>
        </Flex>
    }
}

/// Spinner while loading, the error text after a failed fetch, or the empty
/// message when nothing matches
#[component]
pub fn CollectionStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] count: Signal<usize>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No records match your search.".to_string());

    move || {
        if loading.get() {
            view! { <div class="collection-status"><Spinner label="Loading..." /></div> }.into_any()
        } else if let Some(err) = error.get() {
            view! { <div class="alert alert--error">{err}</div> }.into_any()
        } else if count.get() == 0 {
            view! { <div class="collection-status collection-status--empty">{empty_message.clone()}</div> }
                .into_any()
        } else {
            ().into_any()
        }
    }
}

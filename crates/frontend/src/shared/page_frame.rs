//! PageFrame: root wrapper of every routed page.
//!
//! The root element gets `id="{entity}--{category}"` (e.g. `"a002_consultant--list"`)
//! so a page found in the DOM inspector can be traced back to its module.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Public directory list
    List,
    /// Single record
    Detail,
    /// Admin panel screen
    Admin,
    /// Static content: home, about, contact
    Content,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Admin => "admin",
            PageCategory::Content => "content",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Admin => "page page--admin",
            PageCategory::Content => "page page--content",
        }
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=category.css_class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}

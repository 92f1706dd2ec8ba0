use leptos::prelude::*;

/// App-wide UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile navigation drawer
    pub nav_open: RwSignal<bool>,
    /// Monotonic tick; admin list pages reload whenever it changes
    pub refresh_tick: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav_open: RwSignal::new(false),
            refresh_tick: RwSignal::new(0),
        }
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|open| *open = !*open);
    }

    pub fn close_nav(&self) {
        self.nav_open.set(false);
    }

    /// Ask every mounted admin list to refetch
    pub fn bump_refresh(&self) {
        self.refresh_tick.update(|tick| *tick += 1);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm_dialog;
pub mod date_utils;
pub mod detail_page;
pub mod format;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod remote_collection;
pub mod toast;

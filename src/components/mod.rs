//! UI Components
//!
//! Leptos components for the blog list page.

mod blog_form;
mod blog_list;
mod filter_bar;
mod notification_banner;

pub use blog_form::BlogForm;
pub use blog_list::BlogList;
pub use filter_bar::FilterBar;
pub use notification_banner::NotificationBanner;

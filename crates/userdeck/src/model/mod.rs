//! Display models and derived views.
//!
//! [`DisplayUser`] is what the presentation layer renders; [`filter_users`]
//! and [`list_title`] derive the visible list from the full list and the
//! current search query.

mod filter;
mod user;

pub use filter::{filter_users, list_title, matches_query, ALL_USERS_TITLE, SEARCH_RESULTS_TITLE};
pub use user::{DisplayAddress, DisplayUser};

//! The view-model layer.
//!
//! [`UsersViewModel`] owns the fetch flow and the state a list/detail consumer
//! renders from. Consumers either poll [`UsersViewModel::snapshot`] or connect
//! to [`UsersViewModel::state_changed`], and feed user actions back through
//! its operations (`select_user`, `set_search_query`, `retry`, ...).

mod error;
mod state;
mod users;

pub use error::{AlertAction, ErrorAlert, FetchError, ALERT_TITLE, TIMEOUT_MESSAGE};
pub use state::UsersSnapshot;
pub use users::UsersViewModel;

//! Client-side search over the user list.

use super::user::DisplayUser;

/// List heading when no query is active.
pub const ALL_USERS_TITLE: &str = "ALL USER";

/// List heading while a query is active.
pub const SEARCH_RESULTS_TITLE: &str = "SEARCH RESULTS";

/// Whether `user` matches `query`.
///
/// An empty query matches everything; otherwise the name or username must
/// contain the query, ignoring case.
pub fn matches_query(user: &DisplayUser, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.username.to_lowercase().contains(&needle)
}

/// The users matching `query`, in list order.
pub fn filter_users(users: &[DisplayUser], query: &str) -> Vec<DisplayUser> {
    users
        .iter()
        .filter(|user| matches_query(user, query))
        .cloned()
        .collect()
}

/// Heading for the list given the current query.
pub fn list_title(query: &str) -> &'static str {
    if query.is_empty() {
        ALL_USERS_TITLE
    } else {
        SEARCH_RESULTS_TITLE
    }
}

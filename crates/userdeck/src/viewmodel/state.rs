//! Published coordinator state.

use super::error::{ErrorAlert, FetchError};
use crate::model::{filter_users, list_title, DisplayUser};

/// A consistent copy of everything the coordinator publishes.
///
/// Every field is written together under one lock, so a snapshot never mixes
/// values from two different transitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UsersSnapshot {
    /// Users in server order. Empty until the first successful fetch.
    pub users: Vec<DisplayUser>,
    pub search_query: String,
    pub selected_user: Option<DisplayUser>,
    pub show_detail: bool,
    /// True strictly between the start and the settlement of a request.
    pub is_loading: bool,
    pub error: Option<FetchError>,
    /// Whether the pending error should currently be presented.
    pub show_error_alert: bool,
}

impl UsersSnapshot {
    /// The rendered error text, if an error is pending.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(FetchError::user_message)
    }

    /// The alert to present, while the alert gate is set.
    pub fn error_alert(&self) -> Option<ErrorAlert> {
        match (&self.error, self.show_error_alert) {
            (Some(error), true) => Some(ErrorAlert::for_error(error)),
            _ => None,
        }
    }

    /// Users matching the current search query.
    pub fn filtered_users(&self) -> Vec<DisplayUser> {
        filter_users(&self.users, &self.search_query)
    }

    /// Heading for the list under the current search query.
    pub fn list_title(&self) -> &'static str {
        list_title(&self.search_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let snapshot = UsersSnapshot::default();
        assert!(snapshot.users.is_empty());
        assert!(!snapshot.is_loading);
        assert!(snapshot.error_message().is_none());
        assert!(snapshot.error_alert().is_none());
        assert_eq!(snapshot.list_title(), "ALL USER");
    }

    #[test]
    fn test_alert_follows_gate() {
        let mut snapshot = UsersSnapshot {
            error: Some(FetchError::NoInternet),
            show_error_alert: true,
            ..Default::default()
        };
        assert!(snapshot.error_alert().is_some());

        snapshot.show_error_alert = false;
        assert!(snapshot.error_alert().is_none());
        assert_eq!(
            snapshot.error_message().as_deref(),
            Some("No internet connection. Please check your network settings.")
        );
    }
}

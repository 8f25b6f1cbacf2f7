//! Consumer-visible fetch failures and the alert that presents them.

/// Detail used when the request outlives the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again later.";

/// Title of the error alert.
pub const ALERT_TITLE: &str = "Error";

/// Why a fetch did not produce users.
///
/// Wire errors are not shown as-is: after a failure the coordinator probes
/// reachability again and reports [`NoInternet`](Self::NoInternet) when the
/// network is gone, or [`FetchFailed`](Self::FetchFailed) with the wire
/// error's description otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The network was unreachable.
    #[error("No internet connection. Please check your network settings.")]
    NoInternet,

    /// The network was reachable but the request failed.
    #[error("Failed to fetch data: {0}")]
    FetchFailed(String),
}

impl FetchError {
    /// A failure caused by the request timing out.
    pub fn timed_out() -> Self {
        Self::FetchFailed(TIMEOUT_MESSAGE.to_string())
    }

    /// The text shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A choice offered by the error alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertAction {
    /// Run the whole fetch flow again.
    Retry,
    /// Close the alert and keep the current list.
    Cancel,
}

impl AlertAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Retry => "Retry",
            Self::Cancel => "Cancel",
        }
    }
}

/// The alert a consumer should present while an error is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    pub title: &'static str,
    pub message: String,
    pub actions: [AlertAction; 2],
}

impl ErrorAlert {
    pub fn for_error(error: &FetchError) -> Self {
        Self {
            title: ALERT_TITLE,
            message: error.user_message(),
            actions: [AlertAction::Retry, AlertAction::Cancel],
        }
    }
}

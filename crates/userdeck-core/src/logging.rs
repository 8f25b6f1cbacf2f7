//! Logging facilities for Userdeck.
//!
//! Userdeck instruments itself with the `tracing` crate and never installs a
//! subscriber on its own. Applications choose one:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("userdeck=debug,userdeck_net=info")
//!     .init();
//! ```
//!
//! The constants in [`targets`] and [`span_names`] are the strings used by
//! every crate in the workspace, so filters can be written against them.

/// Span names used throughout Userdeck for tracing.
pub mod span_names {
    /// Performance span wrapping a measured operation.
    pub const PERF: &str = "userdeck::perf";
    /// One complete user fetch, from the first probe to settlement.
    pub const FETCH: &str = "userdeck::fetch";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "userdeck_core::signal";
    /// HTTP transport target.
    pub const HTTP: &str = "userdeck_net::http";
    /// Users endpoint target.
    pub const USERS: &str = "userdeck_net::users";
    /// Reachability probing target.
    pub const NETWORK_INFO: &str = "userdeck_net::network_info";
    /// Fetch coordinator target.
    pub const VIEWMODEL: &str = "userdeck::viewmodel";
    /// Configuration loading target.
    pub const CONFIG: &str = "userdeck::config";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// Useful for tracking the duration of synchronous sections. For async code
/// use [`PerfSpan::span`] with `tracing::Instrument` instead, since an entered
/// guard must not be held across an `.await`.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        Self {
            _span: Self::span(name).entered(),
        }
    }

    /// Create a performance span without entering it.
    pub fn span(name: &'static str) -> tracing::Span {
        tracing::info_span!(target: "userdeck::perf", "perf", operation = name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_are_crate_prefixed() {
        for target in [targets::HTTP, targets::USERS, targets::NETWORK_INFO] {
            assert!(target.starts_with("userdeck_net::"));
        }
        assert!(targets::VIEWMODEL.starts_with("userdeck::"));
    }
}

//! Userdeck: a user directory view-model.
//!
//! This crate ties the networking in `userdeck-net` to a presentation-neutral
//! view-model:
//!
//! - **Configuration**: [`UsersConfig`], loadable from TOML
//! - **Display models**: [`DisplayUser`] and the search filter
//! - **View-model**: [`UsersViewModel`], which probes reachability, fetches
//!   users under a timeout, classifies failures and publishes
//!   [`UsersSnapshot`]s
//!
//! # Example
//!
//! ```ignore
//! use userdeck::{UsersConfig, UsersViewModel};
//!
//! let view_model = UsersViewModel::from_config(UsersConfig::default())?;
//! match view_model.request_users().await {
//!     Ok(count) => println!("{count} users"),
//!     Err(err) => println!("{err}"),
//! }
//!
//! view_model.set_search_query("anto");
//! for user in view_model.filtered_users() {
//!     println!("{} (@{})", user.name, user.username);
//! }
//! ```
//!
//! Nothing here installs a `tracing` subscriber; see
//! [`userdeck_core::logging`] for the targets to filter on.

pub mod config;
pub mod model;
pub mod viewmodel;

pub use config::{ConfigError, ProbeConfig, ProbeMode, UsersConfig};
pub use model::{filter_users, list_title, DisplayAddress, DisplayUser};
pub use viewmodel::{AlertAction, ErrorAlert, FetchError, UsersSnapshot, UsersViewModel};

pub use userdeck_core::{ConnectionGuard, Signal};
pub use userdeck_net::{ConnectivityProbe, NetworkError, ReachabilityProbe, UsersApi, UsersService};

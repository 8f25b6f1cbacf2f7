//! Networking module for Userdeck.
//!
//! This crate provides the network-facing half of Userdeck:
//!
//! - **HTTP Client**: A small `reqwest` wrapper with a fixed error taxonomy
//! - **Users API**: The wire client for `GET <base>/users`
//! - **Network Info**: Interface enumeration and one-shot reachability probes
//!
//! # Users API
//!
//! ```ignore
//! use userdeck_net::users::{UsersApi, UsersService};
//!
//! let service = UsersService::with_defaults()?;
//! let users = service.fetch_users().await?;
//! ```
//!
//! # Reachability
//!
//! ```ignore
//! use userdeck_net::network_info::{ConnectivityProbe, ReachabilityProbe};
//!
//! let online = ReachabilityProbe::new().is_connected().await;
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`NetworkError`]. Transport failures,
//! unauthorized responses, other non-2xx responses and decode failures are
//! distinct variants; no operation in this crate retries.

mod error;
pub mod http;
pub mod network_info;
pub mod users;

pub use error::{NetworkError, Result};

pub use http::{HttpClient, HttpClientBuilder, HttpClientConfig, HttpResponse};
pub use network_info::{ConnectivityProbe, ProbeStrategy, ReachabilityProbe};
pub use users::{UserRecord, UsersApi, UsersService};

//! Network information and reachability for Userdeck.
//!
//! # Features
//!
//! - **Interface enumeration**: List network interfaces with their addresses
//! - **Reachability probing**: One-shot checks through [`ConnectivityProbe`]
//!
//! Probes hold no long-lived monitor. Each [`ConnectivityProbe::is_connected`]
//! call performs a fresh observation and releases everything it used before
//! resolving.
//!
//! # Example
//!
//! ```ignore
//! use userdeck_net::network_info::{
//!     ConnectivityProbe, NetworkInterface, ProbeStrategy, ReachabilityProbe,
//! };
//!
//! for iface in NetworkInterface::list() {
//!     println!("{} ({}) up={}", iface.name, iface.interface_type, iface.is_up);
//! }
//!
//! let probe = ReachabilityProbe::with_strategy(
//!     ProbeStrategy::default_endpoints(Duration::from_secs(2)),
//! );
//! println!("connected: {}", probe.is_connected().await);
//! ```

mod interface;
mod probe;

pub use interface::{InterfaceType, NetworkInterface};
pub use probe::{
    check_connectivity, check_online_state, ConnectivityProbe, ProbeStrategy, ReachabilityProbe,
    DEFAULT_PROBE_ENDPOINTS,
};

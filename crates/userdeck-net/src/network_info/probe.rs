//! One-shot reachability probing.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use userdeck_core::logging::targets;

use super::interface::NetworkInterface;

/// Well-known endpoints used by [`ProbeStrategy::Endpoints`].
pub const DEFAULT_PROBE_ENDPOINTS: [&str; 3] = [
    "1.1.1.1:80",        // Cloudflare
    "8.8.8.8:53",        // Google DNS
    "208.67.222.222:53", // OpenDNS
];

/// Something that can tell whether the network is currently reachable.
///
/// Every call is an independent observation: implementations must not keep
/// a background monitor alive between calls.
pub trait ConnectivityProbe: Send + Sync {
    /// Resolve with the current reachability.
    fn is_connected(&self) -> impl Future<Output = bool> + Send;
}

/// How [`ReachabilityProbe`] decides that the network is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStrategy {
    /// At least one non-loopback interface is up and has an address.
    Interfaces,
    /// The interface check passes and a TCP connection to one of `endpoints`
    /// succeeds within `timeout`.
    Endpoints {
        /// `host:port` pairs tried in order.
        endpoints: Vec<String>,
        /// Per-endpoint connect timeout.
        timeout: Duration,
    },
}

impl Default for ProbeStrategy {
    fn default() -> Self {
        Self::Interfaces
    }
}

impl ProbeStrategy {
    /// Endpoint probing against [`DEFAULT_PROBE_ENDPOINTS`].
    pub fn default_endpoints(timeout: Duration) -> Self {
        Self::Endpoints {
            endpoints: DEFAULT_PROBE_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            timeout,
        }
    }
}

/// The system reachability probe.
///
/// # Example
///
/// ```ignore
/// use userdeck_net::network_info::{ConnectivityProbe, ReachabilityProbe};
///
/// let probe = ReachabilityProbe::new();
/// if !probe.is_connected().await {
///     println!("offline");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReachabilityProbe {
    strategy: ProbeStrategy,
}

impl ReachabilityProbe {
    /// Create a probe using interface enumeration only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with an explicit strategy.
    pub fn with_strategy(strategy: ProbeStrategy) -> Self {
        Self { strategy }
    }

    /// The strategy this probe uses.
    pub fn strategy(&self) -> &ProbeStrategy {
        &self.strategy
    }
}

impl ConnectivityProbe for ReachabilityProbe {
    async fn is_connected(&self) -> bool {
        let interfaces_online = match tokio::task::spawn_blocking(check_online_state).await {
            Ok(online) => online,
            Err(err) => {
                tracing::warn!(target: targets::NETWORK_INFO, error = %err, "interface enumeration failed");
                false
            }
        };

        let connected = match (&self.strategy, interfaces_online) {
            (_, false) => false,
            (ProbeStrategy::Interfaces, true) => true,
            (ProbeStrategy::Endpoints { endpoints, timeout }, true) => {
                check_connectivity(endpoints, *timeout).await
            }
        };

        tracing::debug!(target: targets::NETWORK_INFO, connected, "reachability probed");
        connected
    }
}

/// Check if the system appears to be online.
///
/// Returns `true` if there's at least one non-loopback interface
/// that is up and has at least one IP address assigned.
pub fn check_online_state() -> bool {
    NetworkInterface::list()
        .iter()
        .any(NetworkInterface::can_reach_network)
}

/// Try to open a TCP connection to each endpoint in turn.
///
/// Returns `true` as soon as one connection succeeds within `connect_timeout`.
/// Connections are closed immediately.
pub async fn check_connectivity<S: AsRef<str>>(endpoints: &[S], connect_timeout: Duration) -> bool {
    for endpoint in endpoints {
        let endpoint = endpoint.as_ref();
        match timeout(connect_timeout, TcpStream::connect(endpoint)).await {
            Ok(Ok(_)) => return true,
            Ok(Err(err)) => {
                tracing::trace!(target: targets::NETWORK_INFO, endpoint, error = %err, "endpoint unreachable");
            }
            Err(_) => {
                tracing::trace!(target: targets::NETWORK_INFO, endpoint, "endpoint connect timed out");
            }
        }
    }
    false
}

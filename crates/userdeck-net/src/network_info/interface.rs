//! Network interface information.

use std::net::IpAddr;

/// A network interface on the system.
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    /// Interface name (e.g., "eth0", "en0", "Wi-Fi").
    pub name: String,
    /// Addresses assigned to this interface, IPv4 first.
    pub addresses: Vec<IpAddr>,
    /// Interface type.
    pub interface_type: InterfaceType,
    /// Whether the interface is currently up.
    pub is_up: bool,
    /// Interface index.
    pub index: u32,
}

/// Type of network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    /// Physical interface (Ethernet or WiFi; netdev does not tell them apart).
    Physical,
    /// Loopback interface (localhost).
    Loopback,
    /// Virtual or tunnel interface.
    Virtual,
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterfaceType::Physical => write!(f, "Physical"),
            InterfaceType::Loopback => write!(f, "Loopback"),
            InterfaceType::Virtual => write!(f, "Virtual"),
        }
    }
}

impl From<netdev::Interface> for NetworkInterface {
    fn from(iface: netdev::Interface) -> Self {
        let interface_type = if iface.is_loopback() {
            InterfaceType::Loopback
        } else if iface.is_tun() {
            InterfaceType::Virtual
        } else {
            InterfaceType::Physical
        };

        let addresses = iface
            .ipv4
            .iter()
            .map(|net| IpAddr::V4(net.addr()))
            .chain(iface.ipv6.iter().map(|net| IpAddr::V6(net.addr())))
            .collect();

        NetworkInterface {
            is_up: iface.is_up(),
            name: iface.name,
            addresses,
            interface_type,
            index: iface.index,
        }
    }
}

impl NetworkInterface {
    /// Get all network interfaces on the system.
    ///
    /// This queries the operating system synchronously; call it from a
    /// blocking context when running inside an async runtime.
    pub fn list() -> Vec<NetworkInterface> {
        netdev::get_interfaces()
            .into_iter()
            .map(NetworkInterface::from)
            .collect()
    }

    /// Get the default network interface (used for internet traffic).
    pub fn default_interface() -> Option<NetworkInterface> {
        netdev::get_default_interface()
            .ok()
            .map(NetworkInterface::from)
    }

    /// Check if this interface has any IP addresses assigned.
    pub fn has_addresses(&self) -> bool {
        !self.addresses.is_empty()
    }

    /// Check if this is the loopback interface.
    pub fn is_loopback(&self) -> bool {
        self.interface_type == InterfaceType::Loopback
    }

    /// Whether this interface could carry traffic off the machine.
    pub fn can_reach_network(&self) -> bool {
        self.is_up && !self.is_loopback() && self.has_addresses()
    }
}

//! Provides helpers for detecting network interfaces on the current host

use pnet::{datalink, util::MacAddr};
use std::net::{IpAddr, Ipv4Addr};

use crate::error::{LanProbeError, Result};

/// Data structure representing a network interface
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    /// System name of the interface i.e. eth0, en0 etc.
    pub name: String,
    /// IPv4 address assigned to the interface
    pub ipv4: Ipv4Addr,
    /// MAC address of the interface
    pub mac: MacAddr,
    /// CIDR block of the network the interface is attached to
    pub cidr: String,
}

fn to_interface(iface: &datalink::NetworkInterface) -> Result<NetworkInterface> {
    let ip_net = iface.ips.iter().find(|i| i.is_ipv4()).ok_or_else(|| {
        LanProbeError::Network(format!("no ipv4 address on interface {}", iface.name))
    })?;

    let ipv4 = match ip_net.ip() {
        IpAddr::V4(ip) => ip,
        IpAddr::V6(_) => {
            return Err(LanProbeError::Network(format!(
                "no ipv4 address on interface {}",
                iface.name
            )));
        }
    };

    let mac = iface.mac.ok_or_else(|| {
        LanProbeError::Network(format!("no mac address on interface {}", iface.name))
    })?;

    Ok(NetworkInterface {
        name: iface.name.clone(),
        ipv4,
        mac,
        cidr: format!("{}/{}", ip_net.ip(), ip_net.prefix()),
    })
}

/// Returns the default interface for the current host - the first interface
/// that is up, not a loopback, and has an assigned IPv4 address
pub fn get_default_interface() -> Result<NetworkInterface> {
    let ifaces = datalink::interfaces();

    let iface = ifaces
        .iter()
        .find(|i| i.is_up() && !i.is_loopback() && i.ips.iter().any(|ip| ip.is_ipv4()))
        .ok_or_else(|| {
            LanProbeError::Network("could not detect default network interface".into())
        })?;

    to_interface(iface)
}

#[cfg(test)]
#[path = "./network_tests.rs"]
mod tests;

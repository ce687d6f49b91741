//! Provides data structures and implementations for network scanning
//!
//! This includes ARP scanning of an address range and the message types
//! emitted over the notifier channel while a scan is in flight.

#[cfg(test)]
use mockall::{automock, predicate::*};

use pnet::util::MacAddr;
use std::hash::Hash;
use std::net::Ipv4Addr;
use std::thread::JoinHandle;

use crate::error::Result;

// ARP reply from a single device
#[derive(Debug, Clone, Eq)]
/// Data structure representing a responding device on the network
pub struct Device {
    /// IPv4 of the device
    pub ip: Ipv4Addr,
    /// MAC address of the device
    pub mac: MacAddr,
}

// A single scan reports each network address at most once, so identity is
// the IP address alone
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.ip == other.ip
    }
}

impl Hash for Device {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ip.hash(state);
    }
}

impl Ord for Device {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ip.cmp(&other.ip)
    }
}

impl PartialOrd for Device {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A [`Device`] joined with its hardware vendor display string
pub struct HostRecord {
    /// IPv4 of the device
    pub ip: Ipv4Addr,
    /// MAC address of the device
    pub mac: MacAddr,
    /// Vendor of the device, or "Unknown" when the lookup failed
    pub vendor: String,
}

impl HostRecord {
    /// Joins a [`Device`] with the resolved vendor display string
    pub fn new(device: &Device, vendor: String) -> Self {
        Self {
            ip: device.ip,
            mac: device.mac,
            vendor,
        }
    }
}

#[derive(Debug)]
/// Data structure representing a message that a device is being scanned
pub struct Scanning {
    /// IPv4 of the device
    pub ip: Ipv4Addr,
}

#[derive(Debug)]
/// Generic enum representing the various kinds of scanning messages over the
/// mpsc channel
pub enum ScanMessage {
    /// Indicates that scanning has completed
    Done,
    /// Sent to inform that a device is about to be scanned
    Info(Scanning),
    /// Sent whenever an ARP reply is received from a device in the range
    DeviceFound(Device),
}

#[cfg_attr(test, automock)]
/// Trait used by all scanners
pub trait Scanner: Sync + Send {
    /// Performs network scanning
    fn scan(&self) -> Result<JoinHandle<Result<()>>>;
}

pub mod arp_scanner;
mod heartbeat;

#[cfg(test)]
#[path = "./scanners_tests.rs"]
mod tests;

//! Library package for discovering live hosts on a LAN via ARP
//!
//! Sends a link-layer broadcast resolution request to every host in a
//! target range, collects replies within a bounded window, and reports
//! each responding (IP, MAC) pair. Vendor enrichment is available through
//! [`vendor::VendorResolver`].
//!
//! # Examples
//!
//! ```bash
//! sudo -E cargo run --example arp-scanner -p lanprobe-lib
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod network;
pub mod packet;
pub mod progress;
pub mod scanners;
pub mod targets;
pub mod vendor;

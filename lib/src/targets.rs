//! Provides helpers for managing scan targets

pub mod ips;

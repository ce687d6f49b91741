//! Provides hardware vendor lookups for discovered devices

#[cfg(test)]
use mockall::automock;

use pnet::util::MacAddr;
use std::time::Duration;

/// Fallback display string for any failed vendor lookup
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// Upper bound on how long a single vendor lookup may take
pub const VENDOR_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

const DEFAULT_BASE_URL: &str = "https://api.macvendors.com";

#[cfg_attr(test, automock)]
/// Trait for resolving a MAC address to a vendor display string
pub trait VendorResolver: Send + Sync {
    /// Returns the vendor display string for the provided MAC address.
    /// Lookup failures of any kind yield [`UNKNOWN_VENDOR`] - this never
    /// fails the caller
    fn resolve(&self, mac: MacAddr) -> String;
}

/// A [`VendorResolver`] backed by the macvendors.com HTTP API
pub struct MacVendorsClient {
    agent: ureq::Agent,
    base_url: String,
}

impl MacVendorsClient {
    /// Returns a new client against the public macvendors.com endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Returns a new client against the provided endpoint
    pub fn with_base_url(base_url: String) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(VENDOR_LOOKUP_TIMEOUT))
            .build();

        Self {
            agent: config.into(),
            base_url,
        }
    }
}

impl Default for MacVendorsClient {
    fn default() -> Self {
        Self::new()
    }
}

// The API keys lookups on the bare hex digits, no separators
fn lookup_key(mac: MacAddr) -> String {
    mac.to_string().replace(':', "").to_uppercase()
}

impl VendorResolver for MacVendorsClient {
    fn resolve(&self, mac: MacAddr) -> String {
        let url = format!("{}/{}", self.base_url, lookup_key(mac));

        // non-2xx responses surface as errors from call()
        match self.agent.get(&url).call() {
            Ok(mut res) => res
                .body_mut()
                .read_to_string()
                .unwrap_or_else(|_| UNKNOWN_VENDOR.to_string()),
            Err(e) => {
                log::debug!("vendor lookup failed for {}: {}", mac, e);
                UNKNOWN_VENDOR.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "./vendor_tests.rs"]
mod tests;

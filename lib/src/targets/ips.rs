//! Provides the address range targeted by a scan

use std::{fmt, net, str::FromStr, sync::Arc};

use crate::error::{LanProbeError, Result};

#[derive(Debug)]
/// Represents the set of IPv4 addresses targeted by a scan
///
/// A range is either a CIDR block ("192.168.1.1/24") or a single bare IPv4
/// address ("192.168.1.1"). Rather than materializing every address in the
/// block, this wrapper stores the specification in string form and
/// dynamically loops the addresses when needed, which keeps large blocks
/// cheap to hold.
///
/// # Errors
///
/// Returns a configuration error if the specification is not a valid IP or
/// CIDR block
///
/// # Examples
///
/// ```
/// # use std::net;
/// # use lanprobe_lib::error::Result;
/// # use lanprobe_lib::targets::ips::AddressRange;
/// let print_ip = |ip: net::Ipv4Addr| -> Result<()> {
///   println!("ip: {}", ip);
///   Ok(())
/// };
/// let range = AddressRange::new("192.168.68.1/24").unwrap();
/// range.lazy_loop(print_ip).unwrap();
/// ```
pub struct AddressRange {
    target: String,
    len: usize,
}

fn loop_ips<F: FnMut(net::Ipv4Addr) -> Result<()>>(
    target: &str,
    mut cb: F,
) -> Result<()> {
    if target.contains("/") {
        // target is a cidr block
        let ip_net = ipnet::Ipv4Net::from_str(target).map_err(|e| {
            LanProbeError::from_ipnet_addr_parse_error(target, e)
        })?;

        for ip in ip_net.hosts() {
            cb(ip)?;
        }
    } else {
        // target is a single ip
        let ip: net::Ipv4Addr = net::Ipv4Addr::from_str(target)
            .map_err(|e| LanProbeError::from_net_addr_parse_error(target, e))?;

        cb(ip)?;
    }

    Ok(())
}

impl AddressRange {
    /// Returns a new instance of AddressRange for the provided specification
    pub fn new(target: &str) -> Result<Arc<Self>> {
        let mut len = 0;

        loop_ips(target, |_| {
            len += 1;
            Ok(())
        })?;

        if len == 0 {
            return Err(LanProbeError::Config(format!(
                "address range contains no hosts: {}",
                target
            )));
        }

        Ok(Arc::new(Self {
            target: target.to_string(),
            len,
        }))
    }

    /// Returns the true length of the range. If the underlying specification
    /// is "192.168.0.1/24", then a call to "len" will return 254
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the range contains no hosts
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the provided address falls within this range
    pub fn contains(&self, ip: net::Ipv4Addr) -> bool {
        if self.target.contains("/") {
            ipnet::Ipv4Net::from_str(&self.target)
                .map(|net| net.contains(&ip))
                .unwrap_or(false)
        } else {
            net::Ipv4Addr::from_str(&self.target)
                .map(|target| target == ip)
                .unwrap_or(false)
        }
    }

    /// Loops over all addresses in the range, including those that are not
    /// explicitly spelled out but fall within the CIDR block
    pub fn lazy_loop<F: FnMut(net::Ipv4Addr) -> Result<()>>(
        &self,
        cb: F,
    ) -> Result<()> {
        loop_ips(&self.target, cb)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}

#[cfg(test)]
#[path = "./ips_tests.rs"]
mod tests;

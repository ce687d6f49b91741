use std::collections::HashSet;
use std::net::Ipv4Addr;

use pnet::util::MacAddr;

use super::{Device, HostRecord};

#[test]
fn device_identity_is_the_network_address() {
    let a = Device {
        ip: Ipv4Addr::new(192, 168, 1, 1),
        mac: MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01),
    };

    // same address reported twice with differing MACs still counts once
    let b = Device {
        ip: Ipv4Addr::new(192, 168, 1, 1),
        mac: MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x02),
    };

    assert_eq!(a, b);

    let mut set: HashSet<Device> = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);
}

#[test]
fn devices_order_by_network_address() {
    let mut devices = vec![
        Device {
            ip: Ipv4Addr::new(192, 168, 1, 9),
            mac: MacAddr::default(),
        },
        Device {
            ip: Ipv4Addr::new(192, 168, 1, 2),
            mac: MacAddr::default(),
        },
    ];

    devices.sort();

    assert_eq!(devices[0].ip, Ipv4Addr::new(192, 168, 1, 2));
}

#[test]
fn host_record_joins_device_with_vendor() {
    let device = Device {
        ip: Ipv4Addr::new(192, 168, 1, 1),
        mac: MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01),
    };

    let record = HostRecord::new(&device, "Acme Corp".to_string());

    assert_eq!(record.ip, device.ip);
    assert_eq!(record.mac, device.mac);
    assert_eq!(record.vendor, "Acme Corp");
}

use std::{env, sync::mpsc, time::Duration};

use lanprobe_lib::{
    network,
    packet::wire,
    scanners::{Device, ScanMessage, Scanner, arp_scanner::ARPScanner},
    targets::ips::AddressRange,
};

fn is_root() -> bool {
    match env::var("USER") {
        Ok(val) => val == "root",
        Err(_e) => false,
    }
}

fn main() {
    if !is_root() {
        panic!("permission denied: must run with root privileges");
    }

    let interface = network::get_default_interface().expect("cannot find interface");
    let cidr = interface.cidr.clone();
    let packet_wire = wire::default(&interface).expect("failed to create wire");
    let targets = AddressRange::new(&cidr).expect("failed to parse address range");
    let (tx, rx) = mpsc::channel::<ScanMessage>();

    let scanner = ARPScanner::builder()
        .interface(interface)
        .wire(packet_wire)
        .targets(targets)
        .idle_timeout(Duration::from_secs(1))
        .notifier(tx)
        .build()
        .expect("failed to build scanner");

    let mut results: Vec<Device> = Vec::new();

    let handle = scanner.scan().expect("failed to start scan");

    loop {
        let msg = rx.recv().expect("failed to poll for messages");

        match msg {
            ScanMessage::Done => {
                println!("scanning complete");
                break;
            }
            ScanMessage::DeviceFound(device) => results.push(device),
            _ => {
                println!("{:?}", msg)
            }
        }
    }

    if let Err(e) = handle.join() {
        panic!("error: {:?}", e);
    }

    println!("results: {:?}", results);
}

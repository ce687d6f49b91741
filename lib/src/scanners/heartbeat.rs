use pnet::util::MacAddr;
use std::{
    net::Ipv4Addr,
    sync::{Arc, Mutex, mpsc::Receiver},
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    error::Result,
    packet::{Sender, arp_packet::ArpPacketBuilder},
};

const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(500);

// Periodically sends an ARP request for our own address. The blocking
// packet reader only returns when a packet arrives, so without this nudge
// it could sit forever without observing the stop signal.
pub struct HeartBeat {
    source_mac: MacAddr,
    source_ipv4: Ipv4Addr,
    packet_sender: Arc<Mutex<dyn Sender>>,
}

impl HeartBeat {
    pub fn new(
        source_mac: MacAddr,
        source_ipv4: Ipv4Addr,
        packet_sender: Arc<Mutex<dyn Sender>>,
    ) -> Self {
        Self {
            source_mac,
            source_ipv4,
            packet_sender,
        }
    }

    pub fn beat(&self) -> Result<()> {
        let arp_packet = ArpPacketBuilder::default()
            .source_ip(self.source_ipv4)
            .source_mac(self.source_mac)
            .dest_ip(self.source_ipv4)
            .build()?;

        let packet = arp_packet.to_raw();

        let mut pkt_sender = self.packet_sender.lock()?;

        pkt_sender.send(&packet)
    }

    pub fn start_in_thread(
        self,
        stop: Receiver<()>,
    ) -> JoinHandle<Result<()>> {
        thread::spawn(move || -> Result<()> {
            loop {
                if stop.try_recv().is_ok() {
                    log::debug!("exiting heartbeat thread");
                    break;
                }

                if let Err(e) = self.beat() {
                    log::error!("failed to send heartbeat packet: {}", e);
                    break;
                }

                thread::sleep(HEARTBEAT_INTERVAL);
            }

            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "./heartbeat_tests.rs"]
mod tests;

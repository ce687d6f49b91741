//! Provides Scanner implementation for ARP scanning

use derive_builder::Builder;
use pnet::packet::{Packet, arp, ethernet};
use std::{
    net::Ipv4Addr,
    sync::{self, Arc},
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    error::{LanProbeError, Result},
    network::NetworkInterface,
    packet::{self, arp_packet::ArpPacketBuilder, wire::Wire},
    scanners::{Device, Scanning},
    targets::ips::AddressRange,
};

use super::{ScanMessage, Scanner, heartbeat::HeartBeat};

/// Data structure representing an ARP scanner
#[derive(Clone, Builder)]
#[builder(setter(into))]
pub struct ARPScanner {
    /// Network interface to use for scanning
    interface: Arc<NetworkInterface>,
    /// Wire for reading and sending packets on the wire
    wire: Wire,
    /// Address range to probe
    targets: Arc<AddressRange>,
    /// Duration to wait for replies after the last request is transmitted
    idle_timeout: Duration,
    /// Channel for sending scan results and status messages
    notifier: sync::mpsc::Sender<ScanMessage>,
}

impl ARPScanner {
    /// Returns builder for ARPScanner
    pub fn builder() -> ARPScannerBuilder {
        ARPScannerBuilder::default()
    }

    fn process_target(&self, target: Ipv4Addr) -> Result<()> {
        // throttle packet sending to prevent packet loss
        thread::sleep(packet::DEFAULT_PACKET_SEND_TIMING);

        log::debug!("scanning ARP target: {}", target);

        let arp_packet = ArpPacketBuilder::default()
            .source_ip(self.interface.ipv4)
            .source_mac(self.interface.mac)
            .dest_ip(target)
            .build()?;

        let pkt_buf = arp_packet.to_raw();

        // inform consumer we are scanning this target
        self.notifier
            .send(ScanMessage::Info(Scanning { ip: target }))
            .map_err(LanProbeError::from_channel_send_error)?;

        let mut pkt_sender = self.wire.0.lock()?;

        // Send to the broadcast address
        pkt_sender.send(&pkt_buf)?;

        Ok(())
    }

    fn process_incoming_packet(&self, pkt: &[u8]) -> Result<()> {
        let Some(eth) = ethernet::EthernetPacket::new(pkt) else {
            return Ok(());
        };

        let Some(header) = arp::ArpPacket::new(eth.payload()) else {
            return Ok(());
        };

        // Only ARP replies indicate a live device
        if header.get_operation() != arp::ArpOperations::Reply {
            return Ok(());
        }

        let ip4 = header.get_sender_proto_addr();
        let mac = eth.get_source();

        // Replies from outside the target range (our own heartbeat included)
        // are not scan results
        if !self.targets.contains(ip4) {
            log::debug!("ignoring ARP reply from outside target range: {}", ip4);
            return Ok(());
        }

        self.notifier
            .send(ScanMessage::DeviceFound(Device { ip: ip4, mac }))
            .map_err(LanProbeError::from_channel_send_error)?;

        Ok(())
    }

    // Implements packet reading in a separate thread so we can send and
    // receive packets simultaneously
    fn read_packets(
        &self,
        done: sync::mpsc::Receiver<()>,
    ) -> JoinHandle<Result<()>> {
        let (heartbeat_tx, heartbeat_rx) = sync::mpsc::channel::<()>();

        let heartbeat = HeartBeat::new(
            self.interface.mac,
            self.interface.ipv4,
            Arc::clone(&self.wire.0),
        );

        let _ = heartbeat.start_in_thread(heartbeat_rx);

        let self_clone = self.clone();

        thread::spawn(move || -> Result<()> {
            let mut reader = self_clone.wire.1.lock()?;

            loop {
                if done.try_recv().is_ok() {
                    log::debug!("exiting arp packet reader");
                    if let Err(e) = heartbeat_tx.send(()) {
                        log::error!("failed to stop heartbeat: {}", e);
                    }
                    break;
                }

                let pkt = reader.next_packet()?;

                self_clone.process_incoming_packet(pkt)?;
            }

            Ok(())
        })
    }
}

// Implements the Scanner trait for ARPScanner
impl Scanner for ARPScanner {
    fn scan(&self) -> Result<JoinHandle<Result<()>>> {
        log::debug!("performing ARP scan on targets: {:?}", self.targets);
        log::debug!("idle_timeout: {:?}", self.idle_timeout);
        log::debug!("starting arp packet reader");

        let self_clone = self.clone();
        let (done_tx, done_rx) = sync::mpsc::channel::<()>();

        let read_handle = self.read_packets(done_rx);

        // prevent blocking thread so messages can be freely sent to consumer
        let scan_handle = thread::spawn(move || -> Result<()> {
            let mut scan_error: Option<LanProbeError> = None;

            // single pass over the range; unanswered targets are simply
            // absent from the results
            if let Err(err) = self_clone
                .targets
                .lazy_loop(|t| self_clone.process_target(t))
            {
                scan_error = Some(err);
            }

            // reply collection window
            thread::sleep(self_clone.idle_timeout);

            self_clone
                .notifier
                .send(ScanMessage::Done)
                .map_err(LanProbeError::from_channel_send_error)?;

            // ignore errors here as the thread may already be dead due to error
            // we'll catch any errors from that thread below and report
            let _ = done_tx.send(());

            let read_result = read_handle.join()?;

            if let Some(err) = scan_error {
                return Err(err);
            }

            read_result
        });

        Ok(scan_handle)
    }
}

#[cfg(test)]
#[path = "./arp_scanner_tests.rs"]
mod tests;

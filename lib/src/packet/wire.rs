//! Implements a default Wire using pnet

use pnet::datalink;
use std::sync::{Arc, Mutex};

use crate::{
    error::{LanProbeError, Result},
    network::NetworkInterface,
    packet::{Reader, Sender},
};

/// Represents a packet Sender and packet Reader tuple
#[derive(Clone)]
pub struct Wire(pub Arc<Mutex<dyn Sender>>, pub Arc<Mutex<dyn Reader>>);

/// A PNetReader implementation of packet Reader
pub struct PNetReader {
    receiver: Box<dyn datalink::DataLinkReceiver>,
}

unsafe impl Send for PNetReader {}
unsafe impl Sync for PNetReader {}

// Implements the Reader trait for our PNet implementation
impl Reader for PNetReader {
    fn next_packet(&mut self) -> Result<&[u8]> {
        self.receiver
            .next()
            .map_err(|e| LanProbeError::Wire(e.to_string()))
    }
}

/// A PNetSender implementation of packet Sender
pub struct PNetSender {
    sender: Box<dyn datalink::DataLinkSender>,
}

unsafe impl Send for PNetSender {}
unsafe impl Sync for PNetSender {}

// Implements the Sender trait for our PNet implementation
impl Sender for PNetSender {
    fn send(&mut self, packet: &[u8]) -> Result<()> {
        let opt = self.sender.send_to(packet, None);
        match opt {
            Some(res) => {
                Ok(res.map_err(|e| LanProbeError::Wire(e.to_string()))?)
            }
            None => Err(LanProbeError::Wire("failed to send packet".into())),
        }
    }
}

/// Returns the default wire for the provided interface
///
/// Example
/// ```no_run
/// # use lanprobe_lib::network;
/// # use lanprobe_lib::packet::wire;
/// let interface = network::get_default_interface().unwrap();
/// let packet_wire = wire::default(&interface).unwrap();
/// ```
pub fn default(interface: &NetworkInterface) -> Result<Wire> {
    let ifaces = datalink::interfaces();

    let pnet_interface = ifaces
        .iter()
        .find(|i| i.name == interface.name)
        .ok_or_else(|| {
            LanProbeError::Wire(format!(
                "could not find network interface: {}",
                interface.name
            ))
        })?;

    let cfg = datalink::Config::default();

    let channel = match datalink::channel(pnet_interface, cfg) {
        Ok(datalink::Channel::Ethernet(tx, rx)) => Ok((tx, rx)),
        Ok(_) => {
            Err(LanProbeError::Wire("failed to create packet reader".into()))
        }
        Err(e) => Err(LanProbeError::Wire(e.to_string())),
    }?;

    Ok(Wire(
        Arc::new(Mutex::new(PNetSender { sender: channel.0 })),
        Arc::new(Mutex::new(PNetReader {
            receiver: channel.1,
        })),
    ))
}

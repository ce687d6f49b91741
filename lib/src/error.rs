//! Custom Error and Result types for this library

use std::{
    any::Any,
    sync::{
        MutexGuard, PoisonError,
        mpsc::{RecvError, SendError},
    },
};
use thiserror::Error;

use crate::{
    packet::{Reader, Sender, arp_packet::ArpPacketBuilderError},
    scanners::{ScanMessage, arp_scanner::ARPScannerBuilderError},
};

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum LanProbeError {
    /// Invalid configuration detected before any network activity
    #[error("configuration error: {_0}")]
    Config(String),

    /// Error coming directly off the wire
    #[error("wire error: {_0}")]
    Wire(String),

    /// Error detecting or resolving a network interface
    #[error("network error: {_0}")]
    Network(String),

    /// Errors resulting from events channel
    #[error("failed to send notification message: {:#?}", _0)]
    NotifierSendError(#[from] SendError<Box<ScanMessage>>),

    /// Error obtaining lock on packet reader
    #[error("failed to get lock on packet reader: {_0}")]
    PacketReaderLock(String),

    /// Error obtaining lock on packet sender
    #[error("failed to get lock on packet sender: {_0}")]
    PacketSenderLock(String),

    /// Generic thread error
    #[error("thread error: {_0}")]
    ThreadError(String),

    /// Errors when consuming messages from channels
    #[error("failed to receive message from channel: {:#?}", _0)]
    ChannelReceive(#[from] RecvError),

    /// Error generated during ARP packet construction
    #[error("failed to build ARP packet: {_0}")]
    ArpPacketBuild(#[from] ArpPacketBuilderError),

    /// Error resulting from failure to build ARP scanner
    #[error("failed to build arp scanner: {_0}")]
    ArpScannerBuild(#[from] ARPScannerBuilderError),
}

impl From<Box<dyn Any + Send>> for LanProbeError {
    fn from(value: Box<dyn Any + Send>) -> Self {
        if let Some(s) = value.downcast_ref::<&'static str>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else if let Some(s) = value.downcast_ref::<String>() {
            Self::ThreadError(format!("Thread panicked with: {}", s))
        } else {
            Self::ThreadError("Thread panicked with an unknown type".into())
        }
    }
}

impl<'a> From<PoisonError<MutexGuard<'a, dyn Reader + 'static>>>
    for LanProbeError
{
    fn from(value: PoisonError<MutexGuard<'a, dyn Reader + 'static>>) -> Self {
        Self::PacketReaderLock(value.to_string())
    }
}

impl<'a> From<PoisonError<MutexGuard<'a, dyn Sender + 'static>>>
    for LanProbeError
{
    fn from(value: PoisonError<MutexGuard<'a, dyn Sender + 'static>>) -> Self {
        Self::PacketSenderLock(value.to_string())
    }
}

impl LanProbeError {
    /// Converter for std::net::AddrParseError
    pub fn from_net_addr_parse_error(
        ip: &str,
        error: std::net::AddrParseError,
    ) -> Self {
        Self::Config(format!("invalid address {}: {}", ip, error))
    }

    /// Converter for ipnet::AddrParseError
    pub fn from_ipnet_addr_parse_error(
        cidr: &str,
        error: ipnet::AddrParseError,
    ) -> Self {
        Self::Config(format!("invalid CIDR block {}: {}", cidr, error))
    }

    /// Converter for channel send errors
    pub fn from_channel_send_error(e: SendError<ScanMessage>) -> Self {
        LanProbeError::NotifierSendError(SendError(Box::from(e.0)))
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`LanProbeError`]
pub type Result<T> = std::result::Result<T, LanProbeError>;

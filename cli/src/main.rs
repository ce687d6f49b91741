//! CLI for discovering live hosts on a LAN via ARP
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! sudo lanprobe-cli --help
//!
//! # scan the default range
//! sudo lanprobe-cli
//!
//! # scan a specific range with a 3 second reply window
//! sudo lanprobe-cli -r 10.0.0.1/24 -t 3
//! ```
use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use itertools::Itertools;
use lanprobe_lib::{
    error::Result as LibResult,
    network,
    packet::wire,
    progress::{CancelToken, ProgressReporter},
    scanners::{
        Device, HostRecord, ScanMessage, Scanner, arp_scanner::ARPScanner,
    },
    targets::ips::AddressRange,
    vendor::{MacVendorsClient, VendorResolver},
};
use log::*;
use std::{
    collections::HashSet,
    process,
    sync::{
        Arc,
        mpsc::{self, Receiver},
    },
    time::{Duration, Instant},
};

const NO_DEVICES_MESSAGE: &str = "[!] No devices found on the network";

// Vendor strings wider than this are truncated with an ellipsis marker
const VENDOR_MAX_WIDTH: usize = 32;
const VENDOR_TRUNCATED_WIDTH: usize = 29;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for discovering devices on a local network via ARP
struct Args {
    /// IP range to scan as a CIDR block or single IPv4 address
    #[arg(short, long, default_value = "192.168.1.1/24")]
    range: String,

    /// Seconds to wait for replies after all requests are transmitted
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Enable verbose output (suppresses the progress indicator)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
#[cfg(unix)]
fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

#[doc(hidden)]
#[cfg(windows)]
fn is_root() -> bool {
    // `net session` only succeeds in an elevated shell
    use std::process::Command;
    Command::new("net")
        .args(["session"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

// Consumes scan messages until Done, folding duplicate replies for the same
// network address into a single entry. The stop signal is asserted exactly
// once, after collection finishes (on success and on failure alike), so the
// progress reporter never keeps animating once results are final.
#[doc(hidden)]
fn collect_devices(
    scanner: &dyn Scanner,
    rx: Receiver<ScanMessage>,
    token: &CancelToken,
) -> LibResult<Vec<Device>> {
    let result = consume_scan_messages(scanner, rx);
    token.cancel();
    result
}

#[doc(hidden)]
fn consume_scan_messages(
    scanner: &dyn Scanner,
    rx: Receiver<ScanMessage>,
) -> LibResult<Vec<Device>> {
    let mut results: HashSet<Device> = HashSet::new();

    let handle = scanner.scan()?;

    loop {
        let msg = rx.recv()?;

        match msg {
            ScanMessage::Done => {
                debug!("scanning complete");
                break;
            }
            ScanMessage::DeviceFound(device) => {
                debug!("received reply: {:?}", device);
                results.insert(device);
            }
            ScanMessage::Info(scanning) => {
                debug!("scanning target: {}", scanning.ip);
            }
        }
    }

    handle.join()??;

    // normalize to ascending IP order for reproducible output
    Ok(results.into_iter().sorted().collect())
}

// Runs one full probe pass over the range. Transmission and collection
// faults are reported as diagnostics and degrade to an empty result set -
// "no results" can also mean "possibly failed".
#[doc(hidden)]
fn run_scan(args: &Args, range: Arc<AddressRange>, token: &CancelToken) -> Vec<Device> {
    let interface = match network::get_default_interface() {
        Ok(interface) => interface,
        Err(e) => {
            warn!("no network interface detected: {}", e);
            return Vec::new();
        }
    };

    debug!("using interface: {} ({})", interface.name, interface.cidr);

    let packet_wire = match wire::default(&interface) {
        Ok(packet_wire) => packet_wire,
        Err(e) => {
            error!("error during network scan: {}", e);
            return Vec::new();
        }
    };

    let (tx, rx) = mpsc::channel::<ScanMessage>();

    let scanner = match ARPScanner::builder()
        .interface(interface)
        .wire(packet_wire)
        .targets(Arc::clone(&range))
        .idle_timeout(Duration::from_secs(args.timeout))
        .notifier(tx)
        .build()
    {
        Ok(scanner) => scanner,
        Err(e) => {
            error!("error during network scan: {}", e);
            return Vec::new();
        }
    };

    // the progress line would interleave with verbose diagnostics
    if !args.verbose {
        let reporter = ProgressReporter::new(range.to_string(), token.clone());
        let _ = reporter.start_in_thread();
    }

    match collect_devices(&scanner, rx, token) {
        Ok(devices) => devices,
        Err(e) => {
            error!("error during network scan: {}", e);
            Vec::new()
        }
    }
}

#[doc(hidden)]
fn enrich_devices(
    devices: Vec<Device>,
    resolver: &dyn VendorResolver,
) -> Vec<HostRecord> {
    devices
        .iter()
        .map(|device| HostRecord::new(device, resolver.resolve(device.mac)))
        .collect()
}

#[doc(hidden)]
fn truncate_vendor(vendor: &str) -> String {
    if vendor.chars().count() > VENDOR_MAX_WIDTH {
        let truncated: String =
            vendor.chars().take(VENDOR_TRUNCATED_WIDTH).collect();
        format!("{}...", truncated)
    } else {
        vendor.to_string()
    }
}

#[doc(hidden)]
fn render_results(records: &[HostRecord]) -> String {
    if records.is_empty() {
        return NO_DEVICES_MESSAGE.to_string();
    }

    let mut table = prettytable::Table::new();

    table.add_row(prettytable::row!["IP Address", "MAC Address", "Vendor"]);

    for record in records.iter() {
        table.add_row(prettytable::row![
            record.ip,
            record.mac,
            truncate_vendor(&record.vendor)
        ]);
    }

    table.to_string()
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    // configuration errors are reported before any network activity
    let range = AddressRange::new(&args.range).map_err(|e| eyre!("{}", e))?;

    if !is_root() {
        warn!("not running with root privileges; the scan will likely fail");
    }

    let token = CancelToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        // stop the progress thread before bailing out
        handler_token.cancel();
        eprintln!("\n[!] Scan interrupted by user");
        process::exit(1);
    })?;

    info!("timeout: {} seconds", args.timeout);

    let start = Instant::now();
    let devices = run_scan(&args, Arc::clone(&range), &token);
    let scan_time = start.elapsed();

    let resolver = MacVendorsClient::new();
    let records = enrich_devices(devices, &resolver);

    println!("{}", render_results(&records));

    println!(
        "\n[*] Scan completed in {}",
        humantime::format_duration(Duration::from_millis(
            scan_time.as_millis() as u64
        ))
    );
    println!("[*] Scanned range: {}", args.range);

    Ok(())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;

//! Scan payload -> table model shown under a bot reply.
//!
//! Device lists are capped at [`DEVICE_ROW_LIMIT`] rows with a trailing note
//! for the remainder; port results are never capped. Row order always
//! follows the payload.

#[cfg(test)]
#[path = "data_panel_test.rs"]
mod data_panel_test;

use crate::net::types::{DeviceRecord, PortRecord, ScanPayload};

/// Maximum device rows rendered before collapsing into a note.
pub const DEVICE_ROW_LIMIT: usize = 10;

const DEVICE_HEADERS: [&str; 3] = ["IP Address", "MAC Address", "Status"];
const PORT_HEADERS: [&str; 3] = ["Port", "Service", "Status"];

/// Badge coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Online,
    Offline,
    Neutral,
}

impl Tone {
    /// CSS modifier for `status-badge`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Neutral => "neutral",
        }
    }
}

/// A table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Monospace value (addresses, port numbers).
    Code(String),
    Text(String),
    Badge { label: String, tone: Tone },
}

/// A rendered table plus optional overflow note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPanel {
    pub headers: [&'static str; 3],
    pub rows: Vec<[Cell; 3]>,
    pub note: Option<String>,
}

/// Build a panel from a raw `data` value.
///
/// `devices` is checked before `results`; anything else renders nothing.
#[must_use]
pub fn render(data: &serde_json::Value) -> Option<DataPanel> {
    ScanPayload::classify(data).map(|payload| render_payload(&payload))
}

/// Build a panel from an already-classified payload.
#[must_use]
pub fn render_payload(payload: &ScanPayload) -> DataPanel {
    match payload {
        ScanPayload::DeviceList { devices } => device_panel(devices),
        ScanPayload::PortScanResult { results } => port_panel(results),
    }
}

fn device_panel(devices: &[DeviceRecord]) -> DataPanel {
    let rows = devices
        .iter()
        .take(DEVICE_ROW_LIMIT)
        .map(|device| {
            let status = device.status.clone().unwrap_or_else(|| "online".to_owned());
            let tone = match status.as_str() {
                "online" => Tone::Online,
                "offline" => Tone::Offline,
                _ => Tone::Neutral,
            };
            [
                Cell::Code(device.ip.clone().unwrap_or_else(|| "N/A".to_owned())),
                Cell::Code(device.mac.clone().unwrap_or_else(|| "N/A".to_owned())),
                Cell::Badge { label: status, tone },
            ]
        })
        .collect();
    let note = (devices.len() > DEVICE_ROW_LIMIT)
        .then(|| format!("... and {} more devices", devices.len() - DEVICE_ROW_LIMIT));
    DataPanel { headers: DEVICE_HEADERS, rows, note }
}

fn port_panel(results: &[PortRecord]) -> DataPanel {
    let rows = results
        .iter()
        .map(|port| {
            let (label, tone) = if port.open { ("Open", Tone::Online) } else { ("Closed", Tone::Offline) };
            [
                Cell::Code(port.port.clone()),
                Cell::Text(port.service.clone().unwrap_or_else(|| "Unknown".to_owned())),
                Cell::Badge { label: label.to_owned(), tone },
            ]
        })
        .collect();
    DataPanel { headers: PORT_HEADERS, rows, note: None }
}

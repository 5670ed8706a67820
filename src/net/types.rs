//! Wire DTOs for the chat backend.
//!
//! DESIGN
//! ======
//! Request/response envelopes are typed; the optional `data` payload stays a
//! raw `serde_json::Value` because its shape depends on the action the
//! backend ran. `ScanPayload::classify` sorts it into the shapes the
//! transcript knows how to display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Human-readable reply text, possibly with `**bold**` and newlines.
    pub message: String,
    /// Action the backend resolved the message to (e.g. `"ping"`).
    #[serde(default)]
    pub action: Option<String>,
    /// `"success"`, `"error"`, or an action-specific value such as `"unknown"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Raw action result; only some shapes are rendered.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ChatResponse {
    /// Whether the backend flagged this reply as a failed action.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

/// Reply from `GET {base}/chat/help`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpResponse {
    pub message: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Structured scan result attached to a bot reply.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanPayload {
    DeviceList { devices: Vec<DeviceRecord> },
    PortScanResult { results: Vec<PortRecord> },
}

/// One host found by a network scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRecord {
    pub ip: Option<String>,
    pub mac: Option<String>,
    pub status: Option<String>,
}

/// One probed port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortRecord {
    /// Port number as sent; kept as text so odd values still display.
    pub port: String,
    pub service: Option<String>,
    pub open: bool,
}

impl ScanPayload {
    /// Sort a raw `data` value into a known shape.
    ///
    /// A `devices` array wins over a `results` array when both are present.
    /// Anything else (including non-object values) yields `None`.
    #[must_use]
    pub fn classify(data: &serde_json::Value) -> Option<Self> {
        if let Some(rows) = data.get("devices").and_then(serde_json::Value::as_array) {
            let devices = rows.iter().map(parse_device_record).collect();
            return Some(Self::DeviceList { devices });
        }
        if let Some(rows) = data.get("results").and_then(serde_json::Value::as_array) {
            let results = rows.iter().map(parse_port_record).collect();
            return Some(Self::PortScanResult { results });
        }
        None
    }
}

fn parse_device_record(row: &serde_json::Value) -> DeviceRecord {
    DeviceRecord {
        ip: non_empty_text(row.get("ip")),
        mac: non_empty_text(row.get("mac")),
        status: non_empty_text(row.get("status")),
    }
}

fn parse_port_record(row: &serde_json::Value) -> PortRecord {
    let port = match row.get("port") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let open = row
        .get("open")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    PortRecord { port, service: non_empty_text(row.get("service")), open }
}

/// Text view of a scalar field; absent, null and empty values are `None`.
fn non_empty_text(value: Option<&serde_json::Value>) -> Option<String> {
    let text = match value? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

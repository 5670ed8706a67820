//! Wall-clock helpers for message timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// `HH:MM` label for a timestamp, in local time in the browser and UTC elsewhere.
#[must_use]
pub fn time_label(ts_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let (hours, minutes) = utc_hours_minutes(ts_ms);
        format!("{hours:02}:{minutes:02}")
    }
}

#[cfg(any(test, not(feature = "csr")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(ts_ms: f64) -> (u32, u32) {
    let total_minutes = (ts_ms.max(0.0) / 60_000.0).floor() as u64;
    let minute_of_day = total_minutes % (24 * 60);
    ((minute_of_day / 60) as u32, (minute_of_day % 60) as u32)
}

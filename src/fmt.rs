//! Shared formatting helpers for segment bodies.
//!
//! Rates and totals are tiered into the unit that keeps the number in a
//! readable range. All powers are 1024-based.

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Format a bits-per-second rate.
///
/// Below 1 Mbit/s: whole `"Kbit/s"`; above 1024 Mbit/s: `"Gbit/s"` with two
/// decimals; otherwise `"Mbit/s"` with one decimal.
pub fn format_bit_rate(bits_per_sec: f64) -> String {
    let bits = if bits_per_sec.is_finite() {
        bits_per_sec.max(0.0)
    } else {
        0.0
    };
    let mbit = round1(bits / MIB);
    if mbit < 1.0 {
        format!("{:.0} Kbit/s", (bits / KIB).round())
    } else if mbit > 1024.0 {
        format!("{:.2} Gbit/s", bits / GIB)
    } else {
        format!("{:.1} Mbit/s", mbit)
    }
}

/// Format a cumulative byte count with the same tiering as [`format_bit_rate`].
pub fn format_total_bytes(bytes: u64) -> String {
    let b = bytes as f64;
    let mb = round1(b / MIB);
    if mb < 1.0 {
        format!("{:.0} KB", (b / KIB).round())
    } else if mb > 1024.0 {
        format!("{:.2} GB", b / GIB)
    } else {
        format!("{:.1} MB", mb)
    }
}

/// Format a percentage padded to three characters, so `" 7%"` and `"42%"`
/// occupy the same width in the bar.
pub fn format_percent(percent: u8) -> String {
    format!("{:>3}", format!("{}%", percent))
}

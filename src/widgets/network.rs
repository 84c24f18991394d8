//! Throughput of the active interface.

use tracing::debug;

use crate::collector::{NetworkReading, SampleError};
use crate::fmt::{format_bit_rate, format_total_bytes};
use crate::segment::{Color, GAP, Icon, Segment};

pub const NO_CONNECTION: &str = "No connection";

/// `label ▸ ↓ rx_rate ⇔ rx_total ▸ ↑ tx_rate ⇔ tx_total`
pub fn body(reading: &NetworkReading) -> String {
    format!(
        "{label}{mini}{GAP}{down}{GAP}{rx_rate}{GAP}{dbl}{GAP}{rx_total}{mini}{GAP}{up}{GAP}{tx_rate}{GAP}{dbl}{GAP}{tx_total}",
        label = reading.label,
        mini = Icon::MiniArrow,
        down = Icon::DownArrow,
        up = Icon::UpArrow,
        dbl = Icon::DoubleArrow,
        rx_rate = format_bit_rate(reading.rates.rx_bits_per_sec),
        rx_total = format_total_bytes(reading.rx_total),
        tx_rate = format_bit_rate(reading.rates.tx_bits_per_sec),
        tx_total = format_total_bytes(reading.tx_total),
    )
}

pub fn segment(color: Color, reading: Result<Option<NetworkReading>, SampleError>) -> Segment {
    let seg = Segment::new(color);
    match reading {
        Ok(Some(reading)) => {
            let icon = if reading.wireless {
                Icon::NetworkWlan
            } else {
                Icon::NetworkEth
            };
            seg.icon(icon).body(body(&reading))
        }
        Ok(None) => seg.icon(Icon::NetworkEth).body(NO_CONNECTION),
        Err(e) => {
            debug!("network segment degraded: {}", e);
            seg.icon(Icon::NetworkEth).body(NO_CONNECTION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::NetRates;

    fn reading() -> NetworkReading {
        NetworkReading {
            label: "wlan0/HomeNet".to_string(),
            wireless: true,
            rates: NetRates {
                tx_bits_per_sec: 4096.0,
                rx_bits_per_sec: 2.5 * 1024.0 * 1024.0,
            },
            rx_total: 52_428_800,
            tx_total: 512_000,
        }
    }

    #[test]
    fn body_layout() {
        let expected = format!(
            "wlan0/HomeNet{m}\u{3000}{d}\u{3000}2.5 Mbit/s\u{3000}{x}\u{3000}50.0 MB{m}\u{3000}{u}\u{3000}4 Kbit/s\u{3000}{x}\u{3000}500 KB",
            m = Icon::MiniArrow,
            d = Icon::DownArrow,
            u = Icon::UpArrow,
            x = Icon::DoubleArrow,
        );
        assert_eq!(body(&reading()), expected);
    }

    #[test]
    fn icon_follows_interface_kind() {
        let seg = segment(Color::BlackYellow, Ok(Some(reading())));
        assert_eq!(seg.icon, Some(Icon::NetworkWlan));

        let wired = NetworkReading {
            label: "eth0".to_string(),
            wireless: false,
            ..reading()
        };
        let seg = segment(Color::BlackYellow, Ok(Some(wired)));
        assert_eq!(seg.icon, Some(Icon::NetworkEth));
    }

    #[test]
    fn no_connection() {
        let seg = segment(Color::BlackYellow, Ok(None));
        assert_eq!(seg.body.as_deref(), Some(NO_CONNECTION));

        let seg = segment(Color::BlackYellow, Err(SampleError::Parse("bad".into())));
        assert_eq!(seg.body.as_deref(), Some(NO_CONNECTION));
    }
}

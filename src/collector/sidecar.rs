//! Parsers for the sidecar files written by other scripts.
//!
//! Both files are owned by external processes with their own update cadence.
//! Only a few known markers are read; anything else in them is ignored.

use crate::collector::procfs::parser::ParseError;

/// Temperature trend printed after the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Steady,
    Rising,
    Falling,
    Unknown,
}

impl Trend {
    fn parse(s: &str) -> Self {
        match s.trim() {
            "(=)" => Trend::Steady,
            "(up)" => Trend::Rising,
            "(down)" => Trend::Falling,
            _ => Trend::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    /// Temperature value as written, without unit (`-3.4`).
    pub temperature: String,
    pub trend: Trend,
}

/// Parses the weather log.
///
/// The second line carries the reading:
///
/// ```text
/// Tartu 2015-02-10 21:40
/// Temp:  -3.4 °C (down)
/// Wind: 4 m/s SW
/// ```
pub fn parse_weather(content: &str) -> Result<WeatherReading, ParseError> {
    let line = content
        .lines()
        .nth(1)
        .ok_or_else(|| ParseError::new("weather log has no reading line"))?;
    let (_, after_marker) = line
        .split_once("Temp:")
        .ok_or_else(|| ParseError::new("no Temp: marker in weather log"))?;
    let (value, trend) = after_marker
        .split_once("°C")
        .ok_or_else(|| ParseError::new("no °C unit in weather log"))?;

    let temperature = value.trim();
    if temperature.is_empty() {
        return Err(ParseError::new("empty temperature in weather log"));
    }

    Ok(WeatherReading {
        temperature: temperature.to_string(),
        trend: Trend::parse(trend),
    })
}

/// Interface marked as default by the network script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInterface {
    pub name: String,
    pub ssid: Option<String>,
}

impl ActiveInterface {
    /// Wireless interfaces follow the `wl*` naming (wlan0, wlp3s0).
    pub fn is_wireless(&self) -> bool {
        self.name.starts_with("wl")
    }

    /// `wlan0/HomeNet` for wireless links with a known SSID, else the name.
    pub fn label(&self) -> String {
        match (&self.ssid, self.is_wireless()) {
            (Some(ssid), true) => format!("{}/{}", self.name, ssid),
            _ => self.name.clone(),
        }
    }
}

/// Parses the connected-interfaces file.
///
/// ```text
/// # connected interfaces
/// default wlan0
/// ssid HomeNet
/// ```
///
/// The interface is the second token of the second line; the optional SSID is
/// the second token of the third line.
pub fn parse_interfaces(content: &str) -> Result<ActiveInterface, ParseError> {
    let mut lines = content.lines().skip(1);
    let name = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .ok_or_else(|| ParseError::new("no default interface listed"))?;
    let ssid = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .map(str::to_string);

    Ok(ActiveInterface {
        name: name.to_string(),
        ssid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weather() {
        let log = "Tartu 2015-02-10 21:40\nTemp:  -3.4 °C (down)\nWind: 4 m/s SW\n";
        let reading = parse_weather(log).unwrap();
        assert_eq!(reading.temperature, "-3.4");
        assert_eq!(reading.trend, Trend::Falling);
    }

    #[test]
    fn test_parse_weather_trends() {
        let trend = |t: &str| {
            parse_weather(&format!("header\nTemp: 1.0 °C {}\n", t))
                .unwrap()
                .trend
        };
        assert_eq!(trend("(=)"), Trend::Steady);
        assert_eq!(trend("(up)"), Trend::Rising);
        assert_eq!(trend("(down)"), Trend::Falling);
        assert_eq!(trend(""), Trend::Unknown);
        assert_eq!(trend("(sideways)"), Trend::Unknown);
    }

    #[test]
    fn test_parse_weather_malformed() {
        assert!(parse_weather("").is_err());
        assert!(parse_weather("only one line\n").is_err());
        assert!(parse_weather("header\nWind: 4 m/s\n").is_err());
        assert!(parse_weather("header\nTemp: 4\n").is_err());
        assert!(parse_weather("header\nTemp:  °C (=)\n").is_err());
    }

    #[test]
    fn test_parse_interfaces() {
        let iface = parse_interfaces("# connected\ndefault wlan0\nssid HomeNet\n").unwrap();
        assert_eq!(iface.name, "wlan0");
        assert_eq!(iface.ssid.as_deref(), Some("HomeNet"));
        assert!(iface.is_wireless());
        assert_eq!(iface.label(), "wlan0/HomeNet");

        let wired = parse_interfaces("# connected\ndefault eth0\n").unwrap();
        assert_eq!(wired.ssid, None);
        assert_eq!(wired.label(), "eth0");
    }

    #[test]
    fn test_parse_interfaces_without_default() {
        assert!(parse_interfaces("").is_err());
        assert!(parse_interfaces("# connected\n").is_err());
        assert!(parse_interfaces("# connected\ndefault\n").is_err());
    }
}

use tracing::debug;

use crate::collector::SampleError;
use crate::collector::sidecar::{Trend, WeatherReading};
use crate::segment::{Color, Icon, Segment};

pub const UNREADABLE: &str = "wx file can't be read";

fn icon_for(trend: Trend) -> Icon {
    match trend {
        Trend::Steady => Icon::Equals,
        Trend::Rising => Icon::UpArrow,
        Trend::Falling => Icon::DownArrow,
        Trend::Unknown => Icon::Thermometer,
    }
}

/// Outside temperature with its trend as the icon.
pub fn segment(color: Color, reading: Result<WeatherReading, SampleError>) -> Segment {
    match reading {
        Ok(wx) => Segment::new(color)
            .icon(icon_for(wx.trend))
            .body(format!("{}°C", wx.temperature)),
        Err(e) => {
            debug!("weather segment degraded: {}", e);
            Segment::new(color).body(UNREADABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wx(temperature: &str, trend: Trend) -> Result<WeatherReading, SampleError> {
        Ok(WeatherReading {
            temperature: temperature.to_string(),
            trend,
        })
    }

    #[test]
    fn trend_icons() {
        assert_eq!(segment(Color::WhiteGray, wx("1", Trend::Steady)).icon, Some(Icon::Equals));
        assert_eq!(segment(Color::WhiteGray, wx("1", Trend::Rising)).icon, Some(Icon::UpArrow));
        assert_eq!(segment(Color::WhiteGray, wx("1", Trend::Falling)).icon, Some(Icon::DownArrow));
        assert_eq!(
            segment(Color::WhiteGray, wx("1", Trend::Unknown)).icon,
            Some(Icon::Thermometer)
        );
    }

    #[test]
    fn body_and_placeholder() {
        let seg = segment(Color::WhiteGray, wx("-3.4", Trend::Falling));
        assert_eq!(seg.body.as_deref(), Some("-3.4°C"));

        let seg = segment(Color::WhiteGray, Err(SampleError::Unavailable("wx log".into())));
        assert_eq!(seg.body.as_deref(), Some(UNREADABLE));
        assert_eq!(seg.icon, None);
    }
}

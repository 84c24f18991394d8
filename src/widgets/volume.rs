//! Master volume.

use tracing::debug;

use crate::bar::BarGauge;
use crate::collector::SampleError;
use crate::collector::tools::VolumeInfo;
use crate::segment::{Color, GAP, Icon, Segment};
use crate::widgets::TickContext;

pub const NO_SOUND: &str = "No sound";

fn icon_for(percent: u8) -> Icon {
    if percent < 40 {
        Icon::VolLow
    } else if percent > 69 {
        Icon::VolHigh
    } else {
        Icon::VolMedium
    }
}

/// The gauge is left out when the battery already drew one this tick.
pub fn segment(color: Color, volume: Result<VolumeInfo, SampleError>, ctx: &TickContext) -> Segment {
    let seg = Segment::new(color);
    let volume = match volume {
        Ok(volume) => volume,
        Err(e) => {
            debug!("volume segment degraded: {}", e);
            return seg.icon(Icon::VolMute).body(NO_SOUND);
        }
    };

    if volume.muted {
        let seg = seg.icon(Icon::VolMute);
        return if ctx.battery_bar_shown {
            seg.body("")
        } else {
            seg.body(BarGauge::new(0.0).render())
        };
    }

    let seg = seg.icon(icon_for(volume.percent));
    if ctx.battery_bar_shown {
        seg.body(format!("{}%", volume.percent))
    } else {
        seg.body(format!(
            "{}{GAP}{}%",
            BarGauge::new(volume.percent as f64),
            volume.percent
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vol(percent: u8, muted: bool) -> Result<VolumeInfo, SampleError> {
        Ok(VolumeInfo { percent, muted })
    }

    const NO_BAT: TickContext = TickContext {
        battery_bar_shown: false,
    };
    const BAT: TickContext = TickContext {
        battery_bar_shown: true,
    };

    #[test]
    fn icon_thresholds() {
        assert_eq!(segment(Color::WhiteBlue, vol(39, false), &NO_BAT).icon, Some(Icon::VolLow));
        assert_eq!(segment(Color::WhiteBlue, vol(40, false), &NO_BAT).icon, Some(Icon::VolMedium));
        assert_eq!(segment(Color::WhiteBlue, vol(69, false), &NO_BAT).icon, Some(Icon::VolMedium));
        assert_eq!(segment(Color::WhiteBlue, vol(70, false), &NO_BAT).icon, Some(Icon::VolHigh));
    }

    #[test]
    fn bar_dropped_next_to_battery_bar() {
        let seg = segment(Color::WhiteBlue, vol(66, false), &NO_BAT);
        let expected = format!("{}\u{3000}66%", BarGauge::new(66.0));
        assert_eq!(seg.body.as_deref(), Some(expected.as_str()));

        let seg = segment(Color::WhiteBlue, vol(66, false), &BAT);
        assert_eq!(seg.body.as_deref(), Some("66%"));
    }

    #[test]
    fn muted() {
        let seg = segment(Color::WhiteBlue, vol(66, true), &NO_BAT);
        assert_eq!(seg.icon, Some(Icon::VolMute));
        assert_eq!(seg.body, Some(BarGauge::new(0.0).render()));

        let seg = segment(Color::WhiteBlue, vol(66, true), &BAT);
        assert_eq!(seg.body.as_deref(), Some(""));
        assert!(!seg.is_suppressed());
    }

    #[test]
    fn unparsable_mixer_output() {
        let seg = segment(Color::WhiteBlue, Err(SampleError::Parse("no [NN%]".into())), &NO_BAT);
        assert_eq!(seg.icon, Some(Icon::VolMute));
        assert_eq!(seg.body.as_deref(), Some(NO_SOUND));
    }

    #[test]
    fn missing_mixer_shows_placeholder() {
        let seg = segment(Color::WhiteBlue, Err(SampleError::Unavailable("amixer".into())), &BAT);
        assert!(!seg.is_suppressed());
        assert_eq!(seg.icon, Some(Icon::VolMute));
        assert_eq!(seg.body.as_deref(), Some(NO_SOUND));
    }
}

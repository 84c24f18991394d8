//! Battery gauge, shown only while the battery is (dis)charging.

use tracing::debug;

use crate::bar::{BarGauge, BarStyle};
use crate::collector::SampleError;
use crate::collector::sysfs::{BatteryInfo, BatteryState};
use crate::segment::{Color, GAP, Icon, Segment};
use crate::widgets::TickContext;

pub const BAR_WIDTH: usize = 18;

/// Builds the battery segment and records in `ctx` whether a gauge was drawn.
pub fn segment(
    color: Color,
    battery: Result<Option<BatteryInfo>, SampleError>,
    ctx: &mut TickContext,
) -> Segment {
    let battery = match battery {
        Ok(Some(battery)) => battery,
        Ok(None) => return Segment::new(color),
        Err(e) => {
            debug!("battery segment suppressed: {}", e);
            return Segment::new(color);
        }
    };

    let pct = battery.percent;
    let (icon, color, style) = match battery.state {
        BatteryState::Discharging if pct >= 50 => (Icon::BatFull, color, BarStyle::RoundCandycane),
        BatteryState::Discharging if pct <= 10 => {
            (Icon::BatEmpty, Color::WhiteOrange, BarStyle::RoundCandycane)
        }
        BatteryState::Discharging => (Icon::BatMedium, Color::WhiteMagenta, BarStyle::RoundCandycane),
        BatteryState::Charging => (Icon::BatCharging, color, BarStyle::RoundRegular),
        _ => return Segment::new(color),
    };

    ctx.battery_bar_shown = true;
    let bar = BarGauge::new(pct as f64).width(BAR_WIDTH).style(style);
    Segment::new(color)
        .icon(icon)
        .body(format!("{}{GAP}{}%", bar, pct))
}

use chrono::{DateTime, Local};

use crate::segment::{Color, Icon, Segment};

/// Weekday and day of month, `Tue 10`.
pub fn date(color: Color, now: &DateTime<Local>) -> Segment {
    Segment::new(color).body(now.format("%a %d").to_string())
}

/// `HH:MM` at the right edge, drawn without arrows.
pub fn time(color: Color, now: &DateTime<Local>) -> Segment {
    Segment::new(color)
        .icon(Icon::Blank)
        .body(now.format("%R").to_string())
        .without_arrows()
}

use tracing::debug;

use crate::bar::BarGauge;
use crate::collector::SampleError;
use crate::collector::tools::PlayerState;
use crate::segment::{Color, Icon, Segment};
use crate::widgets::TickContext;

pub const NOT_PLAYING: &str = "Not playing";

/// Track title and position; a paused or stopped player shows
/// [`NOT_PLAYING`].
pub fn segment(color: Color, state: Result<PlayerState, SampleError>, ctx: &TickContext) -> Segment {
    let seg = Segment::new(color).icon(Icon::Music);
    let track = match state {
        Ok(PlayerState::Playing(track)) => track,
        Ok(_) => return seg.body(NOT_PLAYING),
        Err(e) => {
            debug!("music segment degraded: {}", e);
            return seg.body(NOT_PLAYING);
        }
    };

    let mut parts = vec![track.title, format!("{}/{}", track.elapsed, track.duration)];
    if !ctx.battery_bar_shown {
        parts.push(BarGauge::new(track.percent as f64).render());
    }
    seg.body(parts.join(" "))
}

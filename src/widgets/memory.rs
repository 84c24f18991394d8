use tracing::debug;

use crate::collector::SampleError;
use crate::segment::{Color, Icon, Segment};

/// Used memory in percent.
pub fn segment(color: Color, memory: Result<u8, SampleError>) -> Segment {
    let seg = Segment::new(color).icon(Icon::Ram);
    match memory {
        Ok(pct) => seg.body(format!("{}%", pct)),
        Err(e) => {
            debug!("memory segment degraded: {}", e);
            seg.body("mem can't be read")
        }
    }
}

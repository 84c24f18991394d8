//! Single-value temperatures reported by vendor tools.

use tracing::debug;

use crate::collector::SampleError;
use crate::segment::{Color, Icon, Segment};

fn temperature(
    color: Color,
    icon: Icon,
    reading: Result<i32, SampleError>,
    unreadable: &str,
) -> Segment {
    let seg = Segment::new(color).icon(icon);
    match reading {
        Ok(t) => seg.body(format!("{}°C", t)),
        Err(e) => {
            debug!("{:?} temperature degraded: {}", icon, e);
            seg.body(unreadable)
        }
    }
}

pub fn gpu(color: Color, reading: Result<i32, SampleError>) -> Segment {
    temperature(color, Icon::Gpu, reading, "temp can't be read from nvidia-settings")
}

pub fn hdd(color: Color, reading: Result<i32, SampleError>) -> Segment {
    temperature(color, Icon::Hdd, reading, "temp can't be read from hddtemp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_degrees() {
        assert_eq!(gpu(Color::BlackYellow, Ok(52)).body.as_deref(), Some("52°C"));
        assert_eq!(hdd(Color::BlackYellow, Ok(38)).icon, Some(Icon::Hdd));
    }

    #[test]
    fn tool_failures() {
        let seg = gpu(Color::BlackYellow, Err(SampleError::Unavailable("nvidia-settings".into())));
        assert_eq!(seg.body.as_deref(), Some("temp can't be read from nvidia-settings"));
        let seg = hdd(Color::BlackYellow, Err(SampleError::Parse("".into())));
        assert_eq!(seg.body.as_deref(), Some("temp can't be read from hddtemp"));
    }
}

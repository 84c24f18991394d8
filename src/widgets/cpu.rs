//! CPU segments: aggregate with memory, per core, per core with temperatures.

use std::collections::HashMap;

use tracing::debug;

use crate::collector::SampleError;
use crate::collector::tools::CoreTemp;
use crate::fmt::format_percent;
use crate::rates::CpuUsage;
use crate::segment::{Color, GAP, Icon, Segment};

const CPU_UNREADABLE: &str = "cpu stats can't be read";
const TEMPS_UNREADABLE: &str = "temps can't be read from sensors";

fn join_cores(parts: Vec<String>) -> String {
    let separator = format!(" {} ", Icon::MiniArrow);
    parts.join(separator.as_str())
}

/// `CPU0:  7% ▸ CPU1: 12% ▸ ...`
pub fn per_core_body(usage: &CpuUsage) -> String {
    join_cores(
        usage
            .cores
            .iter()
            .map(|(id, pct)| format!("CPU{}: {}", id, format_percent(*pct)))
            .collect(),
    )
}

/// One entry per core.
pub fn per_core(color: Color, usage: Result<CpuUsage, SampleError>) -> Segment {
    let seg = Segment::new(color).icon(Icon::Cpu);
    match usage {
        Ok(usage) => seg.body(per_core_body(&usage)),
        Err(e) => {
            debug!("cpu segment degraded: {}", e);
            seg.body(CPU_UNREADABLE)
        }
    }
}

/// Aggregate CPU and memory usage in one segment.
pub fn with_memory(
    color: Color,
    usage: Result<CpuUsage, SampleError>,
    memory: Result<u8, SampleError>,
) -> Segment {
    let seg = Segment::new(color).icon(Icon::Cpu);
    match (usage, memory) {
        (Ok(usage), Ok(mem)) => seg.body(format!(
            "{}{GAP}{}{GAP}{}{GAP}{}%",
            format_percent(usage.total),
            Icon::MiniArrow,
            Icon::Ram,
            mem
        )),
        (Err(e), _) | (_, Err(e)) => {
            debug!("cpu/mem segment degraded: {}", e);
            seg.body(CPU_UNREADABLE)
        }
    }
}

/// Per-core usage paired with the `sensors` reading of the same core.
///
/// Cores without a matching reading (hyperthreads) show the usage only.
pub fn with_temps(
    color: Color,
    usage: Result<CpuUsage, SampleError>,
    temps: Result<Vec<CoreTemp>, SampleError>,
) -> Segment {
    let seg = Segment::new(color).icon(Icon::Cpu);
    let temps = match temps {
        Ok(temps) => temps,
        Err(e) => {
            debug!("cpu/temp segment degraded: {}", e);
            return seg.body(TEMPS_UNREADABLE);
        }
    };
    let usage = match usage {
        Ok(usage) => usage,
        Err(e) => {
            debug!("cpu/temp segment degraded: {}", e);
            return seg.body(CPU_UNREADABLE);
        }
    };

    let by_core: HashMap<u32, &str> = temps
        .iter()
        .map(|t| (t.core, t.reading.as_str()))
        .collect();

    let parts = usage
        .cores
        .iter()
        .map(|(id, pct)| match by_core.get(id) {
            Some(reading) => format!("CPU{}: {} / {}", id, format_percent(*pct), reading),
            None => format!("CPU{}: {}", id, format_percent(*pct)),
        })
        .collect();

    seg.body(join_cores(parts))
}

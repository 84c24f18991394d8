//! Delta state for the counter-based samplers.
//!
//! `/proc/stat` jiffies and `/proc/net/dev` byte counters only grow, so a
//! reading means something only against the previous one. Each state struct
//! keeps exactly one previous sample and nothing else.
//!
//! The first observation, a counter regression (reboot-free counter reset,
//! interface swap) and a zero elapsed time all produce a zero reading instead
//! of an error; the next tick has a proper baseline again.

use std::collections::HashMap;
use std::time::Instant;

use crate::collector::procfs::parser::{CpuStat, GlobalStat};

// ---------------------------------------------------------------------------
// Delta helpers
// ---------------------------------------------------------------------------

/// Compute u64 delta, returning `None` on counter regression.
pub fn du64(curr: u64, prev: u64) -> Option<u64> {
    curr.checked_sub(prev)
}

// ---------------------------------------------------------------------------
// CPU
// ---------------------------------------------------------------------------

/// Idle and total jiffies of one CPU line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub total: u64,
}

impl From<&CpuStat> for CpuTimes {
    fn from(stat: &CpuStat) -> Self {
        Self {
            idle: stat.idle,
            total: stat.total(),
        }
    }
}

/// Busy share of the interval between two samples, in whole percent.
///
/// `busy = (total - total_prev) - (idle - idle_prev)`. Returns `None` when no
/// jiffies elapsed or a counter went backwards.
pub fn cpu_percent(prev: CpuTimes, curr: CpuTimes) -> Option<u8> {
    let total = du64(curr.total, prev.total)?;
    let idle = du64(curr.idle, prev.idle)?;
    if total == 0 {
        return None;
    }
    let busy = total.saturating_sub(idle);
    Some((100.0 * busy as f64 / total as f64).round().min(100.0) as u8)
}

/// Utilization over the last interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuUsage {
    pub total: u8,
    /// `(core id, percent)` in `/proc/stat` order.
    pub cores: Vec<(u32, u8)>,
}

/// Rate tracking state for `/proc/stat`.
#[derive(Debug, Default)]
pub struct CpuRateState {
    prev_total: Option<CpuTimes>,
    prev_cores: HashMap<u32, CpuTimes>,
}

impl CpuRateState {
    pub fn reset(&mut self) {
        self.prev_total = None;
        self.prev_cores.clear();
    }

    /// Folds a new `/proc/stat` sample in and returns the usage since the
    /// previous one.
    pub fn update(&mut self, stat: &GlobalStat) -> CpuUsage {
        let curr = CpuTimes::from(&stat.aggregate);
        let total = self
            .prev_total
            .and_then(|prev| cpu_percent(prev, curr))
            .unwrap_or(0);
        self.prev_total = Some(curr);

        let mut cores = Vec::with_capacity(stat.cores.len());
        for core in &stat.cores {
            let Some(id) = core.cpu_id else { continue };
            let curr = CpuTimes::from(core);
            let percent = self
                .prev_cores
                .insert(id, curr)
                .and_then(|prev| cpu_percent(prev, curr))
                .unwrap_or(0);
            cores.push((id, percent));
        }

        CpuUsage { total, cores }
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Cumulative byte counters of one interface at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSample {
    pub interface: String,
    pub sent_bytes: u64,
    pub recv_bytes: u64,
    pub timestamp: Instant,
}

/// Throughput over the last interval, in bits per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetRates {
    pub tx_bits_per_sec: f64,
    pub rx_bits_per_sec: f64,
}

/// Rate tracking state for one interface's byte counters.
#[derive(Debug, Default)]
pub struct NetRateState {
    prev: Option<NetworkSample>,
}

impl NetRateState {
    pub fn reset(&mut self) {
        self.prev = None;
    }

    /// Folds a new sample in and returns the throughput since the previous
    /// one.
    ///
    /// A sample taken at the same instant as the previous one (or earlier)
    /// reports zero and leaves the stored sample untouched.
    pub fn update(&mut self, sample: NetworkSample) -> NetRates {
        let rates = match &self.prev {
            Some(prev) if prev.interface == sample.interface => {
                let elapsed = sample
                    .timestamp
                    .saturating_duration_since(prev.timestamp)
                    .as_secs_f64();
                if elapsed <= 0.0 {
                    return NetRates::default();
                }
                match (
                    du64(sample.sent_bytes, prev.sent_bytes),
                    du64(sample.recv_bytes, prev.recv_bytes),
                ) {
                    (Some(sent), Some(recv)) => NetRates {
                        tx_bits_per_sec: (sent * 8) as f64 / elapsed,
                        rx_bits_per_sec: (recv * 8) as f64 / elapsed,
                    },
                    _ => NetRates::default(),
                }
            }
            _ => NetRates::default(),
        };

        self.prev = Some(sample);
        rates
    }
}

//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of various `/proc` files
//! into structured data. They are designed to be easily testable with string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parsed data from `/proc/meminfo` (values in kB).
#[derive(Debug, Clone, Default)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_available: Option<u64>,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Used memory as a rounded percentage of the total.
    ///
    /// Kernels older than 3.14 have no `MemAvailable`; free + buffers + cached
    /// stands in for it there.
    pub fn used_percent(&self) -> u8 {
        if self.mem_total == 0 {
            return 0;
        }
        let available = self
            .mem_available
            .unwrap_or(self.mem_free + self.buffers + self.cached)
            .min(self.mem_total);
        let used = self.mem_total - available;
        (100.0 * used as f64 / self.mem_total as f64).round() as u8
    }
}

/// Parses `/proc/meminfo` content.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut saw_total = false;

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
            saw_total = true;
        } else if line.starts_with("MemFree:") {
            info.mem_free = parse_kb(line);
        } else if line.starts_with("MemAvailable:") {
            info.mem_available = Some(parse_kb(line));
        } else if line.starts_with("Buffers:") {
            info.buffers = parse_kb(line);
        } else if line.starts_with("Cached:") {
            info.cached = parse_kb(line);
        }
    }

    if !saw_total {
        return Err(ParseError::new("missing MemTotal in meminfo"));
    }

    Ok(info)
}

/// Single CPU line from `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct CpuStat {
    pub cpu_id: Option<u32>, // None for aggregate "cpu" line
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

impl CpuStat {
    /// Jiffies counted towards utilization: user + nice + system + idle.
    pub fn total(&self) -> u64 {
        self.user + self.nice + self.system + self.idle
    }
}

/// CPU section of `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct GlobalStat {
    /// Aggregate `cpu` line.
    pub aggregate: CpuStat,
    /// `cpuN` lines in file order.
    pub cores: Vec<CpuStat>,
}

/// Parses `/proc/stat` content.
///
/// Only the leading block of `cpu*` lines is read; the first non-cpu line ends it.
pub fn parse_global_stat(content: &str) -> Result<GlobalStat, ParseError> {
    let mut aggregate = None;
    let mut cores = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if !parts[0].starts_with("cpu") {
            break;
        }
        if parts.len() < 5 {
            return Err(ParseError::new(format!(
                "not enough fields in {}: expected 4+, got {}",
                parts[0],
                parts.len() - 1
            )));
        }

        let get_val = |idx: usize, name: &str| -> Result<u64, ParseError> {
            parts[idx]
                .parse()
                .map_err(|_| ParseError::new(format!("invalid {} in {}", name, parts[0])))
        };

        let cpu_id = if parts[0] == "cpu" {
            None
        } else {
            Some(
                parts[0]
                    .strip_prefix("cpu")
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| ParseError::new(format!("invalid cpu label {}", parts[0])))?,
            )
        };

        let stat = CpuStat {
            cpu_id,
            user: get_val(1, "user")?,
            nice: get_val(2, "nice")?,
            system: get_val(3, "system")?,
            idle: get_val(4, "idle")?,
        };

        match cpu_id {
            None => aggregate = Some(stat),
            Some(_) => cores.push(stat),
        }
    }

    let aggregate = aggregate.ok_or_else(|| ParseError::new("missing aggregate cpu line"))?;
    Ok(GlobalStat { aggregate, cores })
}

// ============ Network Device Stats Parser ============

/// Parsed data from `/proc/net/dev`.
#[derive(Debug, Clone, Default)]
pub struct NetDevStats {
    /// Interface name (eth0, lo, etc.)
    pub interface: String,
    /// Bytes received
    pub rx_bytes: u64,
    /// Bytes transmitted
    pub tx_bytes: u64,
}

/// Parses `/proc/net/dev` content.
///
/// Format:
/// Inter-|   Receive                                                |  Transmit
///  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
///    lo: 1234567     1234    0    0    0     0          0         0  1234567     1234    0    0    0     0       0          0
pub fn parse_net_dev(content: &str) -> Result<Vec<NetDevStats>, ParseError> {
    let mut devices = Vec::new();

    for line in content.lines() {
        // Skip header lines
        if line.contains('|') || line.trim().is_empty() {
            continue;
        }

        let Some((interface, rest)) = line.split_once(':') else {
            continue;
        };

        let values: Vec<&str> = rest.split_whitespace().collect();
        if values.len() < 16 {
            return Err(ParseError::new(format!(
                "not enough fields for {}: expected 16, got {}",
                interface.trim(),
                values.len()
            )));
        }

        let get_val = |idx: usize| -> Result<u64, ParseError> {
            values[idx]
                .parse()
                .map_err(|_| ParseError::new(format!("invalid counter for {}", interface.trim())))
        };

        devices.push(NetDevStats {
            interface: interface.trim().to_string(),
            rx_bytes: get_val(0)?,
            tx_bytes: get_val(8)?,
        });
    }

    Ok(devices)
}

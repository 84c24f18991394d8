//! System collector for gathering global system metrics from `/proc/`.

use crate::collector::error::SampleError;
use crate::collector::procfs::parser::{
    GlobalStat, MemInfo, NetDevStats, parse_global_stat, parse_meminfo, parse_net_dev,
};
use crate::collector::traits::FileSystem;
use std::path::Path;

/// Collects system-wide metrics from `/proc/`.
#[derive(Debug, Clone)]
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Collects memory information from `/proc/meminfo`.
    pub fn collect_meminfo(&self) -> Result<MemInfo, SampleError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_meminfo(&content)?)
    }

    /// Collects CPU jiffy counters from `/proc/stat`.
    pub fn collect_stat(&self) -> Result<GlobalStat, SampleError> {
        let path = format!("{}/stat", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_global_stat(&content)?)
    }

    /// Collects per-interface byte counters from `/proc/net/dev`.
    pub fn collect_net_dev(&self) -> Result<Vec<NetDevStats>, SampleError> {
        let path = format!("{}/net/dev", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_net_dev(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn collects_from_typical_laptop() {
        let collector = SystemCollector::new(MockFs::typical_laptop(), "/proc");

        let mem = collector.collect_meminfo().unwrap();
        assert_eq!(mem.mem_total, 16384000);

        let stat = collector.collect_stat().unwrap();
        assert_eq!(stat.cores.len(), 4);

        let devices = collector.collect_net_dev().unwrap();
        assert!(devices.iter().any(|d| d.interface == "wlan0"));
    }

    #[test]
    fn missing_proc_is_unavailable() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");
        assert!(matches!(
            collector.collect_stat(),
            Err(SampleError::Unavailable(_))
        ));
    }

    #[test]
    fn garbage_is_parse_error() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/stat", "intr 1 2 3\n");
        let collector = SystemCollector::new(fs, "/proc");
        assert!(matches!(collector.collect_stat(), Err(SampleError::Parse(_))));
    }
}

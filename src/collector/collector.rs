//! Main collector that combines the individual samplers.
//!
//! The `Collector` struct is the one thing the composer talks to: every
//! metric a segment can show has a method here, and every method reports
//! failure as a [`SampleError`] scoped to that metric.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, trace};

use crate::collector::error::SampleError;
use crate::collector::procfs::SystemCollector;
use crate::collector::sidecar::{ActiveInterface, WeatherReading, parse_interfaces, parse_weather};
use crate::collector::sysfs::{BatteryInfo, PowerSupplyCollector};
use crate::collector::tools::{
    CoreTemp, PlayerState, VolumeInfo, parse_amixer, parse_mpc, parse_plain_temperature,
    parse_sensors,
};
use crate::collector::traits::{CommandRunner, FileSystem};
use crate::config::{DEFAULT_INTERFACES_FILE, DEFAULT_WX_LOG};
use crate::rates::{CpuRateState, CpuUsage, NetRateState, NetRates, NetworkSample};

/// Where the samplers read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Base path to proc filesystem (usually "/proc").
    pub proc_path: String,
    /// Base path to sysfs (usually "/sys").
    pub sys_path: PathBuf,
    /// Weather log written by the weather script.
    pub wx_log: PathBuf,
    /// Connected-interfaces file written by the network script.
    pub interfaces_file: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            proc_path: "/proc".to_string(),
            sys_path: PathBuf::from("/sys"),
            wx_log: PathBuf::from(DEFAULT_WX_LOG),
            interfaces_file: PathBuf::from(DEFAULT_INTERFACES_FILE),
        }
    }
}

/// Throughput and totals of the active interface.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkReading {
    /// `iface` or `iface/ssid`.
    pub label: String,
    pub wireless: bool,
    pub rates: NetRates,
    pub rx_total: u64,
    pub tx_total: u64,
}

/// Main collector that gathers all metrics.
pub struct Collector<F: FileSystem + Clone, R: CommandRunner> {
    fs: F,
    runner: R,
    system: SystemCollector<F>,
    power: PowerSupplyCollector<F>,
    wx_log: PathBuf,
    interfaces_file: PathBuf,
    cpu_rates: CpuRateState,
    net_rates: NetRateState,
}

impl<F: FileSystem + Clone, R: CommandRunner> Collector<F, R> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `runner` - External program runner (real or mock)
    /// * `paths` - Locations of `/proc`, `/sys` and the sidecar files
    pub fn new(fs: F, runner: R, paths: SourcePaths) -> Self {
        Self {
            system: SystemCollector::new(fs.clone(), paths.proc_path),
            power: PowerSupplyCollector::new(fs.clone(), &paths.sys_path),
            fs,
            runner,
            wx_log: paths.wx_log,
            interfaces_file: paths.interfaces_file,
            cpu_rates: CpuRateState::default(),
            net_rates: NetRateState::default(),
        }
    }

    /// Takes baseline samples for the delta samplers, so the first rendered
    /// tick already shows a real interval.
    pub fn prime(&mut self) {
        if let Err(e) = self.cpu_usage() {
            debug!("CPU baseline not taken: {}", e);
        }
        if let Err(e) = self.network(Instant::now()) {
            debug!("Network baseline not taken: {}", e);
        }
    }

    /// Drops all delta state and takes fresh baselines.
    pub fn reset(&mut self) {
        self.cpu_rates.reset();
        self.net_rates.reset();
        self.prime();
    }

    /// CPU utilization since the previous call, aggregate and per core.
    ///
    /// Each call advances the baseline, so call it at most once per tick.
    pub fn cpu_usage(&mut self) -> Result<CpuUsage, SampleError> {
        let stat = self.system.collect_stat()?;
        let usage = self.cpu_rates.update(&stat);
        trace!("CPU usage: {:?}", usage);
        Ok(usage)
    }

    /// Used physical memory in percent.
    pub fn memory_percent(&self) -> Result<u8, SampleError> {
        Ok(self.system.collect_meminfo()?.used_percent())
    }

    /// First battery, or `None` on machines without one.
    pub fn battery(&self) -> Result<Option<BatteryInfo>, SampleError> {
        self.power.collect_battery()
    }

    /// State of the `Master` mixer control.
    pub fn volume(&self) -> Result<VolumeInfo, SampleError> {
        let out = self.runner.run("amixer", &["get", "Master"])?;
        Ok(parse_amixer(&out)?)
    }

    /// Player state from `mpc`, bounded to one second.
    pub fn music(&self) -> Result<PlayerState, SampleError> {
        let out = self.runner.run("timeout", &["1s", "mpc"])?;
        Ok(parse_mpc(&out)?)
    }

    /// Outside temperature from the weather log.
    pub fn weather(&self) -> Result<WeatherReading, SampleError> {
        let content = self.fs.read_to_string(&self.wx_log)?;
        Ok(parse_weather(&content)?)
    }

    /// Interface the network script marked as default.
    pub fn active_interface(&self) -> Result<ActiveInterface, SampleError> {
        let content = self.fs.read_to_string(&self.interfaces_file)?;
        Ok(parse_interfaces(&content)?)
    }

    /// Throughput of the active interface since the previous call.
    ///
    /// `Ok(None)` means no connection: the interfaces file is missing or
    /// lists nothing usable, or the interface is not in `/proc/net/dev`.
    pub fn network(&mut self, now: Instant) -> Result<Option<NetworkReading>, SampleError> {
        let iface = match self.active_interface() {
            Ok(iface) => iface,
            Err(e) => {
                debug!("No active interface: {}", e);
                return Ok(None);
            }
        };

        let devices = self.system.collect_net_dev()?;
        let Some(dev) = devices.into_iter().find(|d| d.interface == iface.name) else {
            debug!("Interface {} not present in net/dev", iface.name);
            return Ok(None);
        };

        let rates = self.net_rates.update(NetworkSample {
            interface: dev.interface,
            sent_bytes: dev.tx_bytes,
            recv_bytes: dev.rx_bytes,
            timestamp: now,
        });

        Ok(Some(NetworkReading {
            label: iface.label(),
            wireless: iface.is_wireless(),
            rates,
            rx_total: dev.rx_bytes,
            tx_total: dev.tx_bytes,
        }))
    }

    /// Per-core temperatures from `sensors`.
    pub fn core_temps(&self) -> Result<Vec<CoreTemp>, SampleError> {
        let out = self.runner.run("sensors", &[])?;
        Ok(parse_sensors(&out)?)
    }

    /// GPU core temperature in °C from `nvidia-settings`.
    pub fn gpu_temp(&self) -> Result<i32, SampleError> {
        let out = self
            .runner
            .run("nvidia-settings", &["-q", "GPUCoreTemp", "-t"])?;
        Ok(parse_plain_temperature(&out)?)
    }

    /// Temperature of the first disk in °C from `hddtemp`.
    pub fn hdd_temp(&self) -> Result<i32, SampleError> {
        let out = self.runner.run("sudo", &["hddtemp", "/dev/sda", "-n"])?;
        Ok(parse_plain_temperature(&out)?)
    }
}

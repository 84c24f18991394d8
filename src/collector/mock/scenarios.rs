//! Pre-built mock scenarios for testing.
//!
//! These scenarios provide realistic machine states: `/proc` and `/sys`
//! files, the two sidecar files, and output of the external tools.

use super::filesystem::MockFs;
use super::runner::MockRunner;
use crate::config::{DEFAULT_INTERFACES_FILE, DEFAULT_WX_LOG};

impl MockFs {
    /// A four-core laptop on battery, connected over wifi.
    pub fn typical_laptop() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12288000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
",
        );
        fs.set_net_dev("wlan0", 52_428_800, 10_485_760);

        fs.add_file("/sys/class/power_supply/AC/type", "Mains\n");
        fs.add_file("/sys/class/power_supply/AC/online", "0\n");
        fs.add_file("/sys/class/power_supply/BAT0/type", "Battery\n");
        fs.add_file("/sys/class/power_supply/BAT0/capacity", "57\n");
        fs.add_file("/sys/class/power_supply/BAT0/status", "Discharging\n");

        fs.add_file(
            DEFAULT_WX_LOG,
            "Tartu 2015-02-10 21:40\nTemp:  -3.4 °C (down)\nWind: 4 m/s SW\n",
        );
        fs.add_file(
            DEFAULT_INTERFACES_FILE,
            "# connected interfaces\ndefault wlan0\nssid HomeNet\n",
        );

        fs
    }

    /// A desktop on mains power: no battery, wired network.
    pub fn desktop() -> Self {
        let mut fs = Self::typical_laptop();
        fs.remove_file("/sys/class/power_supply/BAT0/type");
        fs.remove_file("/sys/class/power_supply/BAT0/capacity");
        fs.remove_file("/sys/class/power_supply/BAT0/status");
        fs.add_file("/sys/class/power_supply/AC/online", "1\n");
        fs.add_file(DEFAULT_INTERFACES_FILE, "# connected interfaces\ndefault eth0\n");
        fs
    }

    /// Rewrites `/proc/net/dev` with `lo`, `eth0` and `wlan0`, giving
    /// `iface` the supplied byte counters.
    pub fn set_net_dev(&mut self, iface: &str, rx_bytes: u64, tx_bytes: u64) {
        let line = |name: &str| {
            let (rx, tx) = if name == iface {
                (rx_bytes, tx_bytes)
            } else {
                (1_000, 1_000)
            };
            format!(
                "{:>6}: {} 100 0 0 0 0 0 0 {} 100 0 0 0 0 0 0\n",
                name, rx, tx
            )
        };

        let mut content = String::from(
            "Inter-|   Receive                                                |  Transmit\n \
             face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n",
        );
        for name in ["lo", "eth0", "wlan0"] {
            content.push_str(&line(name));
        }
        self.add_file("/proc/net/dev", content);
    }
}

impl MockRunner {
    /// Tool output matching [`MockFs::typical_laptop`]: mixer at 66 %, a
    /// track playing, four core temperatures, hdd and gpu readings.
    pub fn typical_laptop() -> Self {
        let mut runner = Self::new();

        runner.add_output(
            "amixer get Master",
            "\
Simple mixer control 'Master',0
  Capabilities: pvolume pswitch pswitch-joined
  Playback channels: Front Left - Front Right
  Limits: Playback 0 - 87
  Mono:
  Front Left: Playback 57 [66%] [-22.50dB] [on]
  Front Right: Playback 57 [66%] [-22.50dB] [on]
",
        );
        runner.add_output(
            "timeout 1s mpc",
            "\
Boards of Canada - Roygbiv
[playing] #3/12   1:23/2:31 (55%)
volume: 80%   repeat: off   random: off   single: off   consume: off
",
        );
        runner.add_output(
            "sensors",
            "\
coretemp-isa-0000
Adapter: ISA adapter
Physical id 0:  +49.0°C  (high = +80.0°C, crit = +100.0°C)
Core 0:         +45.0°C  (high = +80.0°C, crit = +100.0°C)
Core 1:         +47.0°C  (high = +80.0°C, crit = +100.0°C)
Core 2:         +44.0°C  (high = +80.0°C, crit = +100.0°C)
Core 3:         +46.0°C  (high = +80.0°C, crit = +100.0°C)
",
        );
        runner.add_output("sudo hddtemp /dev/sda -n", "38\n");
        runner.add_output("nvidia-settings -q GPUCoreTemp -t", "52\n");

        runner
    }
}

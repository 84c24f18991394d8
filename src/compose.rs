//! Builds the status line for a mode.
//!
//! Each mode is a fixed, ordered list of segment kinds with their color
//! scheme. Segments are rendered left to right and concatenated without
//! separators; the arrows inside each segment do the visual separation.

use std::time::Instant;

use chrono::{DateTime, Local};
use tracing::trace;

use crate::collector::{Collector, CommandRunner, FileSystem};
use crate::segment::{Color, Segment};
use crate::widgets::{
    TickContext, battery, clock, cpu, memory, music, network, temps, volume, weather,
};

/// Number of modes with a layout (`1..=LAYOUT_COUNT`).
pub const LAYOUT_COUNT: u8 = 4;

/// Appended to every status so the systray does not cover the clock.
pub const STATUS_PADDING: &str = "        ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    CpuAndMemory,
    CpuPerCore,
    CpuAndTemps,
    Memory,
    Music,
    Volume,
    Network,
    Battery,
    Weather,
    GpuTemp,
    HddTemp,
    Date,
    Time,
}

use SegmentKind::*;

const MODE_1: &[(SegmentKind, Color)] = &[
    (CpuAndMemory, Color::WhiteGray),
    (Music, Color::BlackYellow),
    (Volume, Color::WhiteBlue),
    (Date, Color::WhiteGray),
    (Time, Color::White),
];

const MODE_2: &[(SegmentKind, Color)] = &[
    (Network, Color::BlackYellow),
    (Battery, Color::WhiteGray),
    (Weather, Color::WhiteGray),
    (Volume, Color::WhiteBlue),
    (Date, Color::WhiteGray),
    (Time, Color::White),
];

const MODE_3: &[(SegmentKind, Color)] = &[
    (Memory, Color::BlackYellow),
    (CpuAndTemps, Color::WhiteGray),
    (GpuTemp, Color::BlackYellow),
    (HddTemp, Color::BlackYellow),
    (Weather, Color::WhiteGray),
    (Volume, Color::WhiteBlue),
    (Date, Color::WhiteGray),
    (Time, Color::White),
];

const MODE_4: &[(SegmentKind, Color)] = &[
    (CpuPerCore, Color::WhiteGray),
    (Memory, Color::BlackYellow),
    (Network, Color::BlackYellow),
    (Date, Color::WhiteGray),
    (Time, Color::White),
];

/// Segment layout of `mode`, or `None` when the mode has none.
pub fn layout(mode: u8) -> Option<&'static [(SegmentKind, Color)]> {
    match mode {
        1 => Some(MODE_1),
        2 => Some(MODE_2),
        3 => Some(MODE_3),
        4 => Some(MODE_4),
        _ => None,
    }
}

/// Turns samples into status lines.
pub struct Composer<F: FileSystem + Clone, R: CommandRunner> {
    collector: Collector<F, R>,
}

impl<F: FileSystem + Clone, R: CommandRunner> Composer<F, R> {
    pub fn new(collector: Collector<F, R>) -> Self {
        Self { collector }
    }

    /// Takes sampler baselines; see [`Collector::prime`].
    pub fn prime(&mut self) {
        self.collector.prime();
    }

    /// Drops sampler state; see [`Collector::reset`].
    pub fn reset(&mut self) {
        self.collector.reset();
    }

    /// Renders one tick of `mode`.
    ///
    /// Returns `None` for a mode without a layout. Segment failures never
    /// fail the tick: each segment falls back to its own placeholder.
    pub fn compose(&mut self, mode: u8, now: DateTime<Local>) -> Option<String> {
        let layout = layout(mode)?;

        // The battery decides whether other segments draw bars, so it is
        // sampled before anything else.
        let mut ctx = TickContext::default();
        let mut battery_segment = layout
            .iter()
            .find(|(kind, _)| *kind == Battery)
            .map(|&(_, color)| battery::segment(color, self.collector.battery(), &mut ctx));

        let mut status = String::new();
        for &(kind, color) in layout {
            let segment = self.build(kind, color, &mut battery_segment, &ctx, &now);
            trace!("{:?}: {:?}", kind, segment.body);
            status.push_str(&segment.render());
        }
        status.push_str(STATUS_PADDING);

        Some(status)
    }

    /// `battery` holds the segment sampled ahead of the loop; a layout
    /// lists the battery at most once.
    fn build(
        &mut self,
        kind: SegmentKind,
        color: Color,
        battery: &mut Option<Segment>,
        ctx: &TickContext,
        now: &DateTime<Local>,
    ) -> Segment {
        let c = &mut self.collector;
        match kind {
            Battery => battery.take().unwrap_or_else(|| Segment::new(color)),
            CpuAndMemory => cpu::with_memory(color, c.cpu_usage(), c.memory_percent()),
            CpuPerCore => cpu::per_core(color, c.cpu_usage()),
            CpuAndTemps => cpu::with_temps(color, c.cpu_usage(), c.core_temps()),
            Memory => memory::segment(color, c.memory_percent()),
            Music => music::segment(color, c.music(), ctx),
            Volume => volume::segment(color, c.volume(), ctx),
            Network => network::segment(color, c.network(Instant::now())),
            Weather => weather::segment(color, c.weather()),
            GpuTemp => temps::gpu(color, c.gpu_temp()),
            HddTemp => temps::hdd(color, c.hdd_temp()),
            Date => clock::date(color, now),
            Time => clock::time(color, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::BarGauge;
    use crate::collector::sidecar::{Trend, WeatherReading};
    use crate::collector::tools::VolumeInfo;
    use crate::collector::{MockFs, MockRunner, NetworkReading, SourcePaths};
    use crate::config::DEFAULT_WX_LOG;
    use crate::rates::NetRates;
    use crate::segment::Icon;
    use chrono::TimeZone;

    fn composer(fs: MockFs, runner: MockRunner) -> Composer<MockFs, MockRunner> {
        let mut composer = Composer::new(Collector::new(fs, runner, SourcePaths::default()));
        composer.prime();
        composer
    }

    fn laptop() -> Composer<MockFs, MockRunner> {
        composer(MockFs::typical_laptop(), MockRunner::typical_laptop())
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2015, 2, 10, 21, 40, 0).unwrap()
    }

    #[test]
    fn every_mode_in_range_has_a_layout() {
        for mode in 1..=LAYOUT_COUNT {
            assert!(layout(mode).is_some());
        }
        assert!(layout(0).is_none());
        assert!(layout(LAYOUT_COUNT + 1).is_none());
    }

    #[test]
    fn unknown_mode_renders_nothing() {
        let mut c = laptop();
        assert_eq!(c.compose(0, now()), None);
        assert_eq!(c.compose(42, now()), None);
    }

    #[test]
    fn status_ends_with_clock_and_padding() {
        let mut c = laptop();
        for mode in 1..=LAYOUT_COUNT {
            let status = c.compose(mode, now()).unwrap();
            assert!(status.ends_with("\x07\x07\u{3000}21:40        "), "mode {}", mode);
        }
    }

    #[test]
    fn mode_1_segment_order() {
        let mut c = laptop();
        let status = c.compose(1, now()).unwrap();

        let cpu = status.find(Icon::Cpu.glyph()).unwrap();
        let music = status.find("Boards of Canada - Roygbiv 1:23/2:31").unwrap();
        let vol = status.find(Icon::VolMedium.glyph()).unwrap();
        let date = status.find("Tue 10").unwrap();
        let time = status.find("21:40").unwrap();
        assert!(cpu < music && music < vol && vol < date && date < time);

        // No battery in this layout, so music and volume keep their bars.
        assert!(status.contains(&BarGauge::new(55.0).render()));
        assert!(status.contains(&format!("{}\u{3000}66%", BarGauge::new(66.0))));
    }

    #[test]
    fn battery_bar_drops_volume_bar() {
        let mut c = laptop();
        let status = c.compose(2, now()).unwrap();

        assert!(status.contains(Icon::BatFull.glyph()));
        assert!(status.contains("\u{3000}57%"));
        assert!(!status.contains(&BarGauge::new(66.0).render()));
        assert!(status.contains("66%"));
        assert!(status.contains("wlan0/HomeNet"));
        assert!(status.contains("-3.4°C"));
    }

    #[test]
    fn no_battery_is_suppressed() {
        let mut c = composer(MockFs::desktop(), MockRunner::typical_laptop());
        let status = c.compose(2, now()).unwrap();

        for icon in [Icon::BatFull, Icon::BatMedium, Icon::BatEmpty, Icon::BatCharging] {
            assert!(!status.contains(icon.glyph()));
        }
        assert!(status.contains(&format!("{}\u{3000}66%", BarGauge::new(66.0))));
        assert!(status.contains(Icon::NetworkEth.glyph()));
        assert!(status.starts_with(&format!(
            "{}{}{}",
            Color::YellowBlack.code(),
            Icon::Arrow.glyph(),
            Color::BlackYellow.code()
        )));
    }

    #[test]
    fn suppressed_battery_leaves_no_gap() {
        let mut c = composer(MockFs::desktop(), MockRunner::typical_laptop());
        let status = c.compose(2, now()).unwrap();

        let net = network::segment(
            Color::BlackYellow,
            Ok(Some(NetworkReading {
                label: "eth0".to_string(),
                wireless: false,
                rates: NetRates::default(),
                rx_total: 1_000,
                tx_total: 1_000,
            })),
        );
        let wx = weather::segment(
            Color::WhiteGray,
            Ok(WeatherReading {
                temperature: "-3.4".to_string(),
                trend: Trend::Falling,
            }),
        );
        let vol = volume::segment(
            Color::WhiteBlue,
            Ok(VolumeInfo {
                percent: 66,
                muted: false,
            }),
            &TickContext::default(),
        );
        let expected = [
            net.render(),
            wx.render(),
            vol.render(),
            clock::date(Color::WhiteGray, &now()).render(),
            clock::time(Color::White, &now()).render(),
            STATUS_PADDING.to_string(),
        ]
        .concat();
        assert_eq!(status, expected);

        // Network's closing arrow runs straight into the weather opener.
        assert!(status.contains(&format!(
            "{}{}{}{}",
            Color::BlackYellow.code(),
            Icon::Arrow.glyph(),
            Color::GrayBlack.code(),
            Icon::Arrow.glyph()
        )));
    }

    #[test]
    fn failing_segments_degrade_independently() {
        let mut fs = MockFs::typical_laptop();
        fs.remove_file(DEFAULT_WX_LOG);
        let mut c = composer(fs, MockRunner::new());

        let status = c.compose(3, now()).unwrap();
        assert!(status.contains("temps can't be read from sensors"));
        assert!(status.contains("temp can't be read from nvidia-settings"));
        assert!(status.contains("temp can't be read from hddtemp"));
        assert!(status.contains("wx file can't be read"));
        // Memory still comes from /proc.
        assert!(status.contains("25%"));
        // amixer is missing: only the volume segment falls back.
        assert!(status.contains(&format!(
            "{}{}{}",
            Icon::VolMute.glyph(),
            crate::segment::GAP,
            volume::NO_SOUND
        )));

        let status = c.compose(1, now()).unwrap();
        assert!(status.contains("Not playing"));
    }

    #[test]
    fn per_core_layout() {
        let mut c = laptop();
        let status = c.compose(4, now()).unwrap();
        assert!(status.contains("CPU0:  0%"));
        assert!(status.contains("CPU3:  0%"));
        assert!(status.contains("0 Kbit/s"));
    }

    #[test]
    fn compose_is_repeatable_on_unchanged_input() {
        let mut c = laptop();
        for mode in 1..=LAYOUT_COUNT {
            let first = c.compose(mode, now()).unwrap();
            let second = c.compose(mode, now()).unwrap();
            assert_eq!(first, second, "mode {}", mode);
        }
    }
}

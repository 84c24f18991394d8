//! Parsers for the output of external tools.
//!
//! Each parser documents the output shape it expects. All of them are pure
//! so they can be tested against captured output.

use crate::collector::procfs::parser::ParseError;

/// Maximum number of characters of a track title kept for display.
pub const TITLE_TRIM_LENGTH: usize = 30;

/// Mixer state of the `Master` control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeInfo {
    pub percent: u8,
    pub muted: bool,
}

/// Yields the contents of every `[...]` group in `s`.
fn bracketed(s: &str) -> impl Iterator<Item = &str> {
    s.split('[')
        .skip(1)
        .filter_map(|chunk| chunk.split_once(']').map(|(inner, _)| inner))
}

/// Parses `amixer get Master` output.
///
/// ```text
/// Simple mixer control 'Master',0
///   Capabilities: pvolume pswitch pswitch-joined
///   Limits: Playback 0 - 87
///   Mono:
///   Front Left: Playback 57 [66%] [-22.50dB] [on]
/// ```
///
/// The first `[NN%]` group is the volume and the first `[on]`/`[off]` group
/// is the switch.
pub fn parse_amixer(content: &str) -> Result<VolumeInfo, ParseError> {
    let percent = bracketed(content)
        .find_map(|g| g.strip_suffix('%').and_then(|n| n.parse::<u32>().ok()))
        .ok_or_else(|| ParseError::new("no volume percentage in amixer output"))?;
    let muted = bracketed(content)
        .find_map(|g| match g {
            "on" => Some(false),
            "off" => Some(true),
            _ => None,
        })
        .ok_or_else(|| ParseError::new("no switch state in amixer output"))?;

    Ok(VolumeInfo {
        percent: percent.min(100) as u8,
        muted,
    })
}

/// Currently loaded track as reported by `mpc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Title line, trimmed to [`TITLE_TRIM_LENGTH`] characters plus `...`.
    pub title: String,
    pub elapsed: String,
    pub duration: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerState {
    Playing(NowPlaying),
    Paused(NowPlaying),
    Stopped,
}

fn trim_title(title: &str) -> String {
    if title.chars().count() > TITLE_TRIM_LENGTH {
        let mut trimmed: String = title.chars().take(TITLE_TRIM_LENGTH).collect();
        trimmed.push_str("...");
        trimmed
    } else {
        title.to_string()
    }
}

/// Parses `mpc` (status) output.
///
/// ```text
/// Artist - Title
/// [playing] #3/12   1:23/4:56 (28%)
/// volume: 80%   repeat: off   random: off   single: off   consume: off
/// ```
///
/// When nothing is loaded only the `volume:` line is printed.
pub fn parse_mpc(content: &str) -> Result<PlayerState, ParseError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 {
        return Ok(PlayerState::Stopped);
    }

    let status = lines[1].trim();
    let playing = if status.starts_with("[playing]") {
        true
    } else if status.starts_with("[paused]") {
        false
    } else {
        return Ok(PlayerState::Stopped);
    };

    let tokens: Vec<&str> = status.split_whitespace().collect();
    let (elapsed, duration) = tokens
        .iter()
        .filter(|t| t.contains(':'))
        .find_map(|t| t.split_once('/'))
        .ok_or_else(|| ParseError::new("no elapsed/total time in mpc status"))?;
    let percent = tokens
        .iter()
        .find_map(|t| {
            t.strip_prefix('(')
                .and_then(|t| t.strip_suffix("%)"))
                .and_then(|n| n.parse::<u32>().ok())
        })
        .ok_or_else(|| ParseError::new("no progress percentage in mpc status"))?;

    let track = NowPlaying {
        title: trim_title(lines[0].trim()),
        elapsed: elapsed.to_string(),
        duration: duration.to_string(),
        percent: percent.min(100) as u8,
    };

    Ok(if playing {
        PlayerState::Playing(track)
    } else {
        PlayerState::Paused(track)
    })
}

/// One `Core N:` reading from `sensors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreTemp {
    pub core: u32,
    /// Reading without the leading sign, e.g. `45.0°C`.
    pub reading: String,
}

/// Parses `sensors` output, keeping the `Core N:` lines.
///
/// ```text
/// coretemp-isa-0000
/// Adapter: ISA adapter
/// Core 0:       +45.0°C  (high = +80.0°C, crit = +100.0°C)
/// Core 1:       +47.0°C  (high = +80.0°C, crit = +100.0°C)
/// ```
pub fn parse_sensors(content: &str) -> Result<Vec<CoreTemp>, ParseError> {
    let mut temps = Vec::new();

    for line in content.lines().filter(|l| l.starts_with("Core ")) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(ParseError::new(format!("short sensors line: {}", line)));
        }
        let core = parts[1]
            .trim_end_matches(':')
            .parse()
            .map_err(|_| ParseError::new(format!("invalid core label: {}", parts[1])))?;
        let reading = parts[2].trim_start_matches('+').to_string();
        temps.push(CoreTemp { core, reading });
    }

    if temps.is_empty() {
        return Err(ParseError::new("no Core lines in sensors output"));
    }

    Ok(temps)
}

/// Parses a bare integer temperature in °C, as printed by
/// `hddtemp -n` and `nvidia-settings -q GPUCoreTemp -t`.
pub fn parse_plain_temperature(content: &str) -> Result<i32, ParseError> {
    let first = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| ParseError::new("empty temperature output"))?;
    first
        .parse()
        .map_err(|_| ParseError::new(format!("invalid temperature {:?}", first)))
}

//! Color control bytes and icon glyphs understood by the patched dwm bar.
//!
//! dwm's colorbar patch switches color scheme on a control byte in the status
//! text (`\x01`..`\x15`, matching the `colors[]` table in `config.h`). Two-tone
//! schemes are named `<text>_<background>`.

/// Color scheme selected by a control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Normal,
    Urgent,
    Error,
    White,
    Warning,
    BlackYellow,
    YellowBlack,
    BlackBlue,
    BlueBlack,
    WhiteBlue,
    BlackGray,
    GrayBlack,
    WhiteGray,
    WhiteOrange,
    BlackOrange,
    OrangeBlack,
    BlackMagenta,
    MagentaBlack,
    WhiteMagenta,
}

impl Color {
    /// The control byte selecting this scheme.
    pub fn code(self) -> char {
        match self {
            Color::Normal => '\x01',
            Color::Urgent => '\x03',
            Color::Error => '\x04',
            Color::White => '\x07',
            Color::Warning | Color::WhiteMagenta => '\x08',
            Color::BlackYellow => '\x09',
            Color::YellowBlack => '\x0A',
            Color::BlackBlue => '\x0B',
            Color::BlueBlack => '\x0C',
            Color::WhiteBlue => '\x0D',
            Color::BlackGray => '\x0E',
            Color::GrayBlack => '\x0F',
            Color::WhiteGray => '\x10',
            Color::WhiteOrange => '\x11',
            Color::BlackOrange => '\x12',
            Color::OrangeBlack => '\x13',
            Color::BlackMagenta => '\x14',
            Color::MagentaBlack => '\x15',
        }
    }

    /// Schemes drawing the leading and trailing arrow around a segment with
    /// this background: `<bg>_black` before, `black_<bg>` after.
    ///
    /// `None` for single-tone schemes and schemes on a black background.
    pub fn arrow_pair(self) -> Option<(Color, Color)> {
        match self {
            Color::BlackYellow => Some((Color::YellowBlack, Color::BlackYellow)),
            Color::BlackBlue | Color::WhiteBlue => Some((Color::BlueBlack, Color::BlackBlue)),
            Color::BlackGray | Color::WhiteGray => Some((Color::GrayBlack, Color::BlackGray)),
            Color::BlackOrange | Color::WhiteOrange => {
                Some((Color::OrangeBlack, Color::BlackOrange))
            }
            Color::BlackMagenta | Color::WhiteMagenta => {
                Some((Color::MagentaBlack, Color::BlackMagenta))
            }
            _ => None,
        }
    }
}

/// Glyphs from the bar font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Zero-width placeholder: keeps the spacing of an icon without a glyph.
    Blank,
    VolMute,
    VolLow,
    VolMedium,
    VolHigh,
    Music,
    Cpu,
    Gpu,
    Ram,
    Hdd,
    NetworkEth,
    NetworkWlan,
    BatFull,
    BatMedium,
    BatEmpty,
    BatCharging,
    Thermometer,
    UpArrow,
    DownArrow,
    Equals,
    DoubleArrow,
    Arrow,
    MiniArrow,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Blank => "",
            Icon::VolMute => "\u{1e5b}",
            Icon::VolLow => "\u{1e5c}",
            Icon::VolMedium => "\u{ea32}",
            Icon::VolHigh => "\u{ea33}",
            Icon::Music => "\u{1e5a}",
            Icon::Cpu => "\u{1e04}",
            Icon::Gpu => "\u{1e41}",
            Icon::Ram => "\u{1e3e}",
            Icon::Hdd => "\u{1e05}",
            Icon::NetworkEth => "\u{ea4b}",
            Icon::NetworkWlan => "\u{eafd}",
            Icon::BatFull => "\u{ea27}",
            Icon::BatMedium => "\u{ea26}",
            Icon::BatEmpty => "\u{ea25}",
            Icon::BatCharging => "\u{ea28}",
            Icon::Thermometer => "\u{1e42}",
            Icon::UpArrow => "\u{1e4b}",
            Icon::DownArrow => "\u{1e4a}",
            Icon::Equals => "=",
            Icon::DoubleArrow => "\u{1e2b}",
            Icon::Arrow => "\u{1e00}",
            Icon::MiniArrow => "\u{1e02}",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_pairs_follow_background() {
        assert_eq!(
            Color::WhiteGray.arrow_pair(),
            Some((Color::GrayBlack, Color::BlackGray))
        );
        assert_eq!(
            Color::BlackYellow.arrow_pair(),
            Some((Color::YellowBlack, Color::BlackYellow))
        );
        assert_eq!(Color::White.arrow_pair(), None);
        assert_eq!(Color::YellowBlack.arrow_pair(), None);
    }

    #[test]
    fn paired_schemes_are_two_tone() {
        for color in [
            Color::BlackYellow,
            Color::WhiteBlue,
            Color::WhiteGray,
            Color::WhiteOrange,
            Color::WhiteMagenta,
        ] {
            let (lead, trail) = color.arrow_pair().unwrap();
            assert_ne!(lead.code(), trail.code());
            assert!(lead.arrow_pair().is_none());
        }
    }
}

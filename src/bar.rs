//! Fixed-width Unicode gauge.
//!
//! The glyphs live in the private-use area of the bar font: each palette has
//! start, middle and end caps for the empty and the filled region, plus a
//! transition glyph closing the filled run of a partially filled bar.

/// Width used when a segment does not ask for a specific one.
pub const DEFAULT_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    #[default]
    RoundRegular,
    RoundCandycane,
}

struct Glyphs {
    empty_start: char,
    empty_mid: char,
    empty_end: char,
    filled_start: char,
    filled_mid: char,
    filled_end: char,
    transition: char,
}

impl BarStyle {
    fn glyphs(self) -> Glyphs {
        let (filled_start, filled_mid, filled_end, transition) = match self {
            BarStyle::RoundRegular => ('\u{ead3}', '\u{ead4}', '\u{ead5}', '\u{ead6}'),
            BarStyle::RoundCandycane => ('\u{ead7}', '\u{ead8}', '\u{ead9}', '\u{eada}'),
        };
        Glyphs {
            empty_start: '\u{ead0}',
            empty_mid: '\u{ead1}',
            empty_end: '\u{ead2}',
            filled_start,
            filled_mid,
            filled_end,
            transition,
        }
    }

    /// Every glyph of the empty region.
    pub fn empty_glyphs(self) -> [char; 3] {
        let g = self.glyphs();
        [g.empty_start, g.empty_mid, g.empty_end]
    }

    /// Every glyph of the filled region, transition included.
    pub fn filled_glyphs(self) -> [char; 4] {
        let g = self.glyphs();
        [g.filled_start, g.filled_mid, g.filled_end, g.transition]
    }
}

/// A percentage rendered as `width` glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGauge {
    percent: f64,
    width: usize,
    style: BarStyle,
}

impl BarGauge {
    /// Percent is clamped to `[0, 100]`; NaN counts as 0.
    pub fn new(percent: f64) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        Self {
            percent,
            width: DEFAULT_WIDTH,
            style: BarStyle::default(),
        }
    }

    /// Width in cells, at least 1.
    pub fn width(self, width: usize) -> Self {
        Self {
            width: width.max(1),
            ..self
        }
    }

    pub fn style(self, style: BarStyle) -> Self {
        Self { style, ..self }
    }

    /// `round(percent / 100 * width)`.
    pub fn filled_cells(&self) -> usize {
        ((self.percent / 100.0 * self.width as f64).round() as usize).min(self.width)
    }

    pub fn render(&self) -> String {
        let n = self.width;
        let filled = self.filled_cells();
        let g = self.style.glyphs();

        if n == 1 {
            let glyph = if filled == 0 {
                g.empty_start
            } else {
                g.filled_start
            };
            return glyph.to_string();
        }

        let mut out = String::with_capacity(n * 3);
        let push_n = |out: &mut String, c: char, count: usize| {
            out.extend(std::iter::repeat_n(c, count));
        };

        if filled == 0 {
            out.push(g.empty_start);
            push_n(&mut out, g.empty_mid, n - 2);
            out.push(g.empty_end);
        } else if filled == n {
            out.push(g.filled_start);
            push_n(&mut out, g.filled_mid, n - 2);
            out.push(g.filled_end);
        } else {
            // 1 <= filled <= n - 1, so the last cell is always empty.
            if filled > 1 {
                out.push(g.filled_start);
                push_n(&mut out, g.filled_mid, filled - 2);
            }
            out.push(g.transition);
            push_n(&mut out, g.empty_mid, n - filled - 1);
            out.push(g.empty_end);
        }

        out
    }
}

impl std::fmt::Display for BarGauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

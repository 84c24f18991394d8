//! Styled fragments of the status line.
//!
//! A segment is an optional icon and a body, colored by one scheme and
//! usually bracketed by arrow glyphs whose colors connect it to the black
//! bar background:
//!
//! ```text
//! <bg_black> ARROW <scheme> ICON U+3000 <scheme> body <black_bg> ARROW
//! ```
//!
//! A segment without a body renders to nothing.

pub mod style;

pub use style::{Color, Icon};

/// Spacing used between an icon and the text, and inside bodies.
pub const GAP: char = '\u{3000}';

/// Formats one segment.
///
/// Returns an empty string when `body` is `None`. When `arrows` is set but
/// the scheme has no arrow pair, the segment renders without arrows.
pub fn format_segment(icon: Option<Icon>, color: Color, body: Option<&str>, arrows: bool) -> String {
    let Some(body) = body else {
        return String::new();
    };

    let mut out = String::new();
    let icon_part = |out: &mut String| {
        if let Some(icon) = icon {
            out.push(color.code());
            out.push_str(icon.glyph());
            out.push(GAP);
        }
    };

    match color.arrow_pair().filter(|_| arrows) {
        Some((lead, trail)) => {
            out.push(lead.code());
            out.push_str(Icon::Arrow.glyph());
            icon_part(&mut out);
            out.push(color.code());
            out.push_str(body);
            out.push(trail.code());
            out.push_str(Icon::Arrow.glyph());
        }
        None => {
            out.push(color.code());
            icon_part(&mut out);
            out.push_str(body);
        }
    }

    out
}

/// One fragment of the status line, built fresh every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub icon: Option<Icon>,
    pub color: Color,
    pub body: Option<String>,
    pub arrows: bool,
}

impl Segment {
    /// An empty (suppressed) segment in the given scheme, with arrows.
    pub fn new(color: Color) -> Self {
        Self {
            icon: None,
            color,
            body: None,
            arrows: true,
        }
    }

    pub fn icon(self, icon: Icon) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }

    pub fn body(self, body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..self
        }
    }

    pub fn without_arrows(self) -> Self {
        Self {
            arrows: false,
            ..self
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.body.is_none()
    }

    pub fn render(&self) -> String {
        format_segment(self.icon, self.color, self.body.as_deref(), self.arrows)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

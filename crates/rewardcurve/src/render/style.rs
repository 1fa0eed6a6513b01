//! Colors and line styles for chart series.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Default series blue (`#1f77b4`).
    pub const BLUE: Rgb = Rgb(0x1f, 0x77, 0xb4);

    /// Neutral grey (`#808080`).
    pub const GREY: Rgb = Rgb(0x80, 0x80, 0x80);

    /// Black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// `#rrggbb` form of the color.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Styling for one line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Rgb,

    /// Opacity in `[0, 1]`.
    pub alpha: f64,

    /// Stroke width in pixels.
    pub stroke_width: u32,
}

impl LineStyle {
    /// Opaque 1px line of the given color.
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            alpha: 1.0,
            stroke_width: 1,
        }
    }

    /// Set the opacity.
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the stroke width.
    pub const fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Style of the smoothed trend line.
    pub const fn smoothed() -> Self {
        Self::new(Rgb::BLUE).stroke_width(2)
    }

    /// Style of the raw backdrop: muted and translucent.
    pub const fn raw() -> Self {
        Self::new(Rgb::GREY).alpha(0.3)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(Rgb::BLACK)
    }
}

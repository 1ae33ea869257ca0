use crate::foundation::error::{LifeglassError, LifeglassResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Fraction of canvas height reserved below the content region for footer
/// captions.
pub(crate) const BOTTOM_PAD_FRAC: f64 = 0.18;

/// Fraction of canvas width available to foreground content.
pub(crate) const CONTENT_WIDTH_FRAC: f64 = 0.98;

/// Output canvas geometry for one device display.
///
/// `offset_top` reserves vertical space for the lock-screen clock overlay;
/// no foreground geometry is placed above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSpec {
    /// Canvas width in pixels. Must be > 0.
    pub width: u32,
    /// Canvas height in pixels. Must be > 0.
    pub height: u32,
    /// Reserved band at the top of the canvas, in pixels.
    pub offset_top: u32,
}

impl CanvasSpec {
    /// Validated constructor. Zero width or height is rejected; an
    /// `offset_top` at or beyond the bottom of the canvas is accepted and
    /// yields a degenerate (empty) content region.
    pub fn new(width: u32, height: u32, offset_top: u32) -> LifeglassResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeglassError::validation(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            offset_top,
        })
    }

    /// The band between the reserved top offset and the bottom caption
    /// padding, horizontally centered. Degenerate specs clamp to zero height.
    pub fn content_region(&self) -> Region {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let content_w = w * CONTENT_WIDTH_FRAC;
        let content_h = (h - f64::from(self.offset_top) - h * BOTTOM_PAD_FRAC).max(0.0);
        Region {
            x: (w - content_w) / 2.0,
            y: f64::from(self.offset_top),
            width: content_w,
            height: content_h,
        }
    }
}

/// Rectangular area in which a layout strategy places foreground geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Region {
    /// Center point of the region.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the region has no usable area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as 0..1 fractions, for filter color matrices.
    pub(crate) fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(CanvasSpec::new(0, 100, 0).is_err());
        assert!(CanvasSpec::new(100, 0, 0).is_err());
        assert!(CanvasSpec::new(1, 1, 0).is_ok());
    }

    #[test]
    fn content_region_reserves_top_and_bottom() {
        let canvas = CanvasSpec::new(750, 1334, 420).unwrap();
        let region = canvas.content_region();
        assert_eq!(region.y, 420.0);
        assert!((region.width - 750.0 * CONTENT_WIDTH_FRAC).abs() < 1e-9);
        assert!((region.bottom() - (1334.0 - 1334.0 * BOTTOM_PAD_FRAC)).abs() < 1e-9);
    }

    #[test]
    fn oversized_offset_degenerates_instead_of_failing() {
        let canvas = CanvasSpec::new(750, 1334, 1400).unwrap();
        let region = canvas.content_region();
        assert_eq!(region.height, 0.0);
        assert!(region.is_degenerate());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb::new(0xFF, 0x2D, 0x55).to_hex(), "#ff2d55");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }
}

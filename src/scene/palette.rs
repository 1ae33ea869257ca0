use crate::calendar::progress::Variant;
use crate::foundation::core::Rgb;

/// Dark neutral fill used for unlived cells, future days and the ring track.
pub const NEUTRAL_DARK: Rgb = Rgb::new(0x1c, 0x1c, 0x1e);

const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Per-variant wallpaper color scheme. Selected solely by variant; immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Fill for elapsed cells and the progress arc.
    pub primary: Rgb,
    /// Secondary highlight color.
    pub accent: Rgb,
    /// Background mesh stops: base, mid glow, deep edge.
    pub background: [Rgb; 3],
}

static LIFE: Palette = Palette {
    primary: Rgb::new(0xFF, 0x2D, 0x55),
    accent: Rgb::new(0xAF, 0x52, 0xDE),
    background: [BLACK, Rgb::new(0x12, 0x04, 0x1a), Rgb::new(0x0a, 0x00, 0x12)],
};

static YEAR: Palette = Palette {
    primary: Rgb::new(0x00, 0x7A, 0xFF),
    accent: Rgb::new(0x58, 0x56, 0xD6),
    background: [BLACK, Rgb::new(0x04, 0x0b, 0x1a), Rgb::new(0x00, 0x08, 0x12)],
};

static GOAL: Palette = Palette {
    primary: Rgb::new(0xFF, 0x95, 0x00),
    accent: Rgb::new(0xFF, 0x3B, 0x30),
    background: [BLACK, Rgb::new(0x1a, 0x0d, 0x04), Rgb::new(0x12, 0x08, 0x00)],
};

impl Palette {
    /// The palette for `variant`.
    pub fn for_variant(variant: Variant) -> &'static Palette {
        match variant {
            Variant::Life => &LIFE,
            Variant::Year => &YEAR,
            Variant::Goal => &GOAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_keyed_by_variant() {
        assert_eq!(Palette::for_variant(Variant::Life).primary.to_hex(), "#ff2d55");
        assert_eq!(Palette::for_variant(Variant::Year).primary.to_hex(), "#007aff");
        assert_eq!(Palette::for_variant(Variant::Goal).primary.to_hex(), "#ff9500");
    }

    #[test]
    fn backgrounds_start_at_black() {
        for v in [Variant::Life, Variant::Year, Variant::Goal] {
            assert_eq!(Palette::for_variant(v).background[0], BLACK);
        }
    }
}

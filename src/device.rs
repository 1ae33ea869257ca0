use crate::foundation::core::CanvasSpec;

/// Display geometry for one supported device.
///
/// `offset_top` is tuned per model so generated content clears the
/// lock-screen clock completely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DeviceSpec {
    /// Stable identifier used in URLs and CLI flags.
    pub id: &'static str,
    /// Marketing name.
    pub name: &'static str,
    /// Native display width in pixels.
    pub width: u32,
    /// Native display height in pixels.
    pub height: u32,
    /// Reserved clock band in pixels.
    pub offset_top: u32,
}

impl DeviceSpec {
    /// Canvas geometry for this device.
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec {
            width: self.width,
            height: self.height,
            offset_top: self.offset_top,
        }
    }
}

/// Identifier of the default preset.
pub const DEFAULT_DEVICE_ID: &str = "iphone_6_8";

static PRESETS: &[DeviceSpec] = &[
    DeviceSpec {
        id: "iphone_se",
        name: "iPhone SE (1st gen)",
        width: 640,
        height: 1136,
        offset_top: 380,
    },
    DeviceSpec {
        id: "iphone_6_8",
        name: "iPhone 6 / 7 / 8",
        width: 750,
        height: 1334,
        offset_top: 420,
    },
    DeviceSpec {
        id: "iphone_6_8_plus",
        name: "iPhone 6 / 7 / 8 Plus",
        width: 1080,
        height: 1920,
        offset_top: 560,
    },
    DeviceSpec {
        id: "iphone_x_11_pro",
        name: "iPhone X / XS / 11 Pro",
        width: 1125,
        height: 2436,
        offset_top: 700,
    },
];

/// Look up a preset by identifier.
pub fn find_device(id: &str) -> Option<&'static DeviceSpec> {
    PRESETS.iter().find(|d| d.id == id)
}

/// The default preset (iPhone 6/7/8).
pub fn default_device() -> &'static DeviceSpec {
    // The table always carries the default id.
    find_device(DEFAULT_DEVICE_ID).unwrap_or(&PRESETS[0])
}

/// All presets, in table order.
pub fn device_presets() -> &'static [DeviceSpec] {
    PRESETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_default() {
        let spec = find_device(DEFAULT_DEVICE_ID).unwrap();
        assert_eq!(spec.width, 750);
        assert_eq!(spec.height, 1334);
        assert_eq!(spec.offset_top, 420);
        assert_eq!(default_device().id, DEFAULT_DEVICE_ID);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(find_device("pixel_9").is_none());
    }

    #[test]
    fn every_preset_yields_a_usable_canvas() {
        for spec in device_presets() {
            let canvas = spec.canvas();
            assert!(canvas.width > 0 && canvas.height > 0);
            assert!(!canvas.content_region().is_degenerate(), "{}", spec.id);
        }
    }
}

//! Lifeglass renders personalized lock-screen wallpapers as PNG images.
//!
//! Three calendar variants are supported: a life-in-weeks grid, a year
//! progress view (day grid or hourglass) and a goal countdown ring. The
//! pipeline turns computed progress data into pixels in four stages:
//!
//! 1. **Progress**: date arithmetic produces a [`ProgressData`] per variant
//! 2. **Generate**: `ProgressData + CanvasSpec -> SceneDocument` (pure vector scene)
//! 3. **Serialize**: `SceneDocument -> SVG markup`
//! 4. **Rasterize**: SVG -> RGBA frame -> PNG bytes
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all correctness-bearing geometry is a pure
//!   function of its inputs. Ambient decoration (sand speckles, grain sizes)
//!   draws from an explicit [`AmbientRng`] so tests can pin it down.
//! - **No IO in the generator**: file and font access happen only in the
//!   rasterization stage.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod calendar;
mod device;
mod foundation;
mod generate;
mod render;
mod scene;

pub use calendar::progress::{
    LIFE_EXPECTANCY_YEARS, ProgressData, TOTAL_LIFE_WEEKS, Variant, WEEKS_PER_YEAR, goal_progress,
    life_progress, year_progress,
};
pub use device::{DEFAULT_DEVICE_ID, DeviceSpec, default_device, device_presets, find_device};
pub use foundation::core::{BezPath, CanvasSpec, Point, Rect, Region, Rgb, Vec2};
pub use foundation::error::{LifeglassError, LifeglassResult};
pub use foundation::math::{AmbientRng, ProcessRng};
pub use generate::{SceneOptions, YearStyle, generate};
pub use render::pipeline::{render_to_file, render_wallpaper};
pub use render::raster::{WallpaperFrame, encode_png, rasterize};
pub use scene::model::{
    CircleNode, Dash, Def, FadeStop, Fill, LineCap, LineNode, Paint, PathNode, Primitive, Rotation,
    RoundRectNode, SceneDocument, Stroke, TextAnchor, TextNode,
};
pub use scene::palette::{NEUTRAL_DARK, Palette};

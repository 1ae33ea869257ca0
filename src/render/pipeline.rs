use std::path::Path;

use anyhow::Context as _;

use crate::calendar::progress::{ProgressData, Variant};
use crate::foundation::core::CanvasSpec;
use crate::foundation::error::LifeglassResult;
use crate::foundation::math::AmbientRng;
use crate::generate::{SceneOptions, generate};
use crate::render::raster;

/// Render one wallpaper end to end: generate the scene, serialize it,
/// rasterize it and encode PNG bytes.
pub fn render_wallpaper(
    variant: Variant,
    progress: &ProgressData,
    canvas: CanvasSpec,
    opts: SceneOptions,
    rng: &mut dyn AmbientRng,
) -> LifeglassResult<Vec<u8>> {
    let doc = generate(variant, progress, canvas, opts, rng);
    let frame = raster::rasterize(&doc)?;
    raster::encode_png(&frame)
}

/// Render a wallpaper and write it to `path`, creating parent directories.
pub fn render_to_file(
    path: &Path,
    variant: Variant,
    progress: &ProgressData,
    canvas: CanvasSpec,
    opts: SceneOptions,
    rng: &mut dyn AmbientRng,
) -> LifeglassResult<()> {
    let png = render_wallpaper(variant, progress, canvas, opts, rng)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

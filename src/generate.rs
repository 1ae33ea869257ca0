pub(crate) mod goal;
pub(crate) mod hourglass;
pub(crate) mod life;
pub(crate) mod year_grid;

use crate::calendar::progress::{ProgressData, Variant};
use crate::foundation::core::{CanvasSpec, Region, Rgb};
use crate::foundation::math::AmbientRng;
use crate::scene::model::{Def, MESH_GRADIENT_ID, Paint, SOFT_GLOW_ID, SceneDocument};
use crate::scene::palette::Palette;

/// Year-variant presentation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearStyle {
    /// One rounded-rect cell per day of the year.
    Grid,
    /// Hourglass silhouette with draining sand.
    #[default]
    Hourglass,
}

/// Per-deployment generator knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneOptions {
    /// Which presentation the year variant uses.
    pub year_style: YearStyle,
}

/// Everything a layout strategy needs to place foreground geometry.
pub(crate) struct LayoutCtx<'a> {
    pub(crate) progress: &'a ProgressData,
    pub(crate) canvas: CanvasSpec,
    pub(crate) region: Region,
    pub(crate) palette: &'static Palette,
}

type LayoutFn = fn(&mut SceneDocument, &LayoutCtx<'_>, &mut dyn AmbientRng);

/// Variant-keyed strategy table.
fn layout_for(variant: Variant, opts: SceneOptions) -> LayoutFn {
    match (variant, opts.year_style) {
        (Variant::Life, _) => life::layout,
        (Variant::Year, YearStyle::Grid) => year_grid::layout,
        (Variant::Year, YearStyle::Hourglass) => hourglass::layout,
        (Variant::Goal, _) => goal::layout,
    }
}

/// Background mesh center. The hourglass scene uses a cold night-blue glow
/// instead of the palette's mid stop.
fn mesh_center(variant: Variant, opts: SceneOptions, palette: &Palette) -> Rgb {
    if variant == Variant::Year && opts.year_style == YearStyle::Hourglass {
        Rgb::new(0x05, 0x0c, 0x1f)
    } else {
        palette.background[1]
    }
}

/// Generate the complete vector scene for one wallpaper.
///
/// Pure function of its inputs apart from `rng`, which feeds only ambient
/// decoration (sand speckles, grain sizes); all correctness-bearing geometry
/// is deterministic. Never fails: a degenerate content region (offset at or
/// past the caption band) yields a valid document with an empty foreground.
#[tracing::instrument(skip(progress, rng), fields(total = progress.total, elapsed = progress.elapsed))]
pub fn generate(
    variant: Variant,
    progress: &ProgressData,
    canvas: CanvasSpec,
    opts: SceneOptions,
    rng: &mut dyn AmbientRng,
) -> SceneDocument {
    let palette = Palette::for_variant(variant);
    let region = canvas.content_region();

    let mut doc = SceneDocument {
        width: canvas.width,
        height: canvas.height,
        defs: vec![
            Def::RadialMesh {
                id: MESH_GRADIENT_ID.to_string(),
                center: mesh_center(variant, opts, palette),
                edge: palette.background[0],
            },
            Def::SoftGlow {
                id: SOFT_GLOW_ID.to_string(),
                std_deviation: 8.0,
            },
        ],
        background: Paint::reference(MESH_GRADIENT_ID),
        nodes: Vec::with_capacity(node_capacity(variant)),
    };

    if !region.is_degenerate() {
        let ctx = LayoutCtx {
            progress,
            canvas,
            region,
            palette,
        };
        layout_for(variant, opts)(&mut doc, &ctx, rng);
    }

    doc
}

fn node_capacity(variant: Variant) -> usize {
    match variant {
        Variant::Life => life::CELL_COUNT,
        Variant::Year => 400,
        Variant::Goal => 4,
    }
}

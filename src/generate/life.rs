//! Life-in-weeks grid: one circle per week of an 80-year lifespan.

use crate::foundation::core::Point;
use crate::foundation::math::AmbientRng;
use crate::generate::LayoutCtx;
use crate::scene::model::{CircleNode, Fill, Primitive, SOFT_GLOW_ID, SceneDocument};
use crate::scene::palette::NEUTRAL_DARK;

pub(crate) const ROWS: usize = 80;
pub(crate) const COLS: usize = 52;
pub(crate) const CELL_COUNT: usize = ROWS * COLS;

const GAP: f64 = 3.0;
const UNLIVED_OPACITY: f64 = 0.3;

/// Every n-th lived cell gets a glow highlight.
const GLOW_EVERY: usize = 400;

pub(crate) fn layout(doc: &mut SceneDocument, ctx: &LayoutCtx<'_>, _rng: &mut dyn AmbientRng) {
    let region = &ctx.region;

    // Largest cell size that fits both axes with the fixed gap.
    let avail_w = region.width - (COLS as f64 - 1.0) * GAP;
    let avail_h = region.height - (ROWS as f64 - 1.0) * GAP;
    let cell = (avail_w / COLS as f64).min(avail_h / ROWS as f64);
    if cell <= 0.0 {
        return;
    }

    let grid_w = COLS as f64 * cell + (COLS as f64 - 1.0) * GAP;
    let grid_h = ROWS as f64 * cell + (ROWS as f64 - 1.0) * GAP;
    let x0 = region.x + (region.width - grid_w) / 2.0;
    let y0 = region.y + (region.height - grid_h) / 2.0;

    for i in 0..CELL_COUNT {
        let row = i / COLS;
        let col = i % COLS;
        let cx = x0 + col as f64 * (cell + GAP) + cell / 2.0;
        let cy = y0 + row as f64 * (cell + GAP) + cell / 2.0;

        let lived = (i as u32) < ctx.progress.elapsed;
        let fill = if lived {
            Fill::solid(ctx.palette.primary)
        } else {
            Fill::solid_with_opacity(NEUTRAL_DARK, UNLIVED_OPACITY)
        };
        let filter = (lived && i % GLOW_EVERY == 0).then(|| SOFT_GLOW_ID.to_string());

        doc.nodes.push(Primitive::Circle(CircleNode {
            center: Point::new(cx, cy),
            radius: cell / 2.2,
            fill: Some(fill),
            stroke: None,
            filter,
            rotation: None,
        }));
    }
}

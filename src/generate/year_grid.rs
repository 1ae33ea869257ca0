//! Year day grid: one rounded-rect cell per day of the calendar year, with a
//! year label above the grid and literal day counts in the footer.

use crate::foundation::core::{Point, Rect, Rgb};
use crate::foundation::math::AmbientRng;
use crate::generate::LayoutCtx;
use crate::scene::model::{
    Fill, Primitive, RoundRectNode, SceneDocument, TextAnchor, TextNode,
};
use crate::scene::palette::NEUTRAL_DARK;

const COLS: usize = 15;
const ROWS: usize = 25;
const GAP: f64 = 4.0;
const FUTURE_OPACITY: f64 = 0.3;

/// Vertical band at the top of the content region reserved for the label.
const HEADER_BAND: f64 = 70.0;

const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

pub(crate) fn layout(doc: &mut SceneDocument, ctx: &LayoutCtx<'_>, _rng: &mut dyn AmbientRng) {
    let region = &ctx.region;

    if let Some(label) = &ctx.progress.label {
        doc.nodes.push(Primitive::Text(TextNode {
            pos: Point::new(region.x + region.width / 2.0, region.y + HEADER_BAND * 0.65),
            content: label.clone(),
            size: 42.0,
            weight: 700,
            fill: Fill::solid_with_opacity(WHITE, 0.9),
            anchor: TextAnchor::Middle,
            letter_spacing: Some(6.0),
            filter: None,
        }));
    }

    let grid_top = region.y + HEADER_BAND;
    let grid_h_avail = region.height - HEADER_BAND;

    let avail_w = region.width - (COLS as f64 - 1.0) * GAP;
    let avail_h = grid_h_avail - (ROWS as f64 - 1.0) * GAP;
    let cell = (avail_w / COLS as f64).min(avail_h / ROWS as f64);
    if cell > 0.0 {
        let grid_w = COLS as f64 * cell + (COLS as f64 - 1.0) * GAP;
        let grid_h = ROWS as f64 * cell + (ROWS as f64 - 1.0) * GAP;
        let x0 = region.x + (region.width - grid_w) / 2.0;
        let y0 = grid_top + (grid_h_avail - grid_h) / 2.0;

        // One cell per day; the 15x25 grid has spare cells that are never
        // drawn past `total`.
        let total = (ctx.progress.total as usize).min(ROWS * COLS);
        for i in 0..total {
            let row = i / COLS;
            let col = i % COLS;
            let x = x0 + col as f64 * (cell + GAP);
            let y = y0 + row as f64 * (cell + GAP);

            let elapsed = (i as u32) < ctx.progress.elapsed;
            let fill = if elapsed {
                Fill::solid(ctx.palette.primary)
            } else {
                Fill::solid_with_opacity(NEUTRAL_DARK, FUTURE_OPACITY)
            };
            doc.nodes.push(Primitive::RoundRect(RoundRectNode {
                rect: Rect::new(x, y, x + cell, y + cell),
                radius: cell * 0.28,
                fill,
            }));
        }
    }

    // Footer captions live in the bottom padding band, below the region.
    let h = f64::from(ctx.canvas.height);
    let cx = region.x + region.width / 2.0;
    doc.nodes.push(Primitive::Text(TextNode {
        pos: Point::new(cx, region.bottom() + h * 0.055),
        content: format!("{} DAYS LEFT", ctx.progress.remaining),
        size: 30.0,
        weight: 700,
        fill: Fill::solid(WHITE),
        anchor: TextAnchor::Middle,
        letter_spacing: Some(8.0),
        filter: None,
    }));
    doc.nodes.push(Primitive::Text(TextNode {
        pos: Point::new(cx, region.bottom() + h * 0.095),
        content: format!("{} OF {} DAYS", ctx.progress.elapsed, ctx.progress.total),
        size: 20.0,
        weight: 500,
        fill: Fill::solid_with_opacity(WHITE, 0.4),
        anchor: TextAnchor::Middle,
        letter_spacing: Some(4.0),
        filter: None,
    }));
}

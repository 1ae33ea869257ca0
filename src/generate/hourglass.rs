//! Year hourglass: a glass silhouette with a heaped sand mound below, a
//! draining volume above the neck, a falling grain stream and ambient specks.
//!
//! The silhouette is defined at a 460x720 reference size and scaled into the
//! content region, so nothing crosses the reserved clock band.

use crate::foundation::core::{BezPath, Point, Region, Rgb};
use crate::foundation::math::AmbientRng;
use crate::generate::LayoutCtx;
use crate::scene::model::{
    BLOOM_ID, CircleNode, Def, FadeStop, Fill, GRAIN_PATTERN_ID, LineCap, LineNode, Paint,
    PathNode, Primitive, SAND_FADE_ID, SAND_GLOW_ID, SceneDocument, Stroke,
};

const REF_W: f64 = 460.0;
const REF_H: f64 = 720.0;
const REF_NECK_W: f64 = 18.0;

/// Electric blue glass outline.
const GLASS_STROKE: Rgb = Rgb::new(0x00, 0xA3, 0xFF);
/// Cyan sand highlight.
const SAND_ACCENT: Rgb = Rgb::new(0x00, 0xE0, 0xFF);
const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Each bulb holds at most this fraction of the glass height.
const BULB_FRAC: f64 = 0.46;

const GRAIN_COUNT: usize = 22;
const SPECK_COUNT: usize = 30;

/// Glass geometry scaled into the content region.
struct Glass {
    cx: f64,
    top_y: f64,
    neck_y: f64,
    bottom_y: f64,
    width: f64,
    height: f64,
    neck_w: f64,
    sx: f64,
    sy: f64,
}

fn glass_metrics(region: &Region) -> Glass {
    let height = region.height * 0.95;
    let width = (height * (REF_W / REF_H)).min(region.width * 0.9);
    let sx = width / REF_W;
    let sy = height / REF_H;
    let top_y = region.y + (region.height - height) / 2.0;
    Glass {
        cx: region.x + region.width / 2.0,
        top_y,
        neck_y: top_y + height / 2.0,
        bottom_y: top_y + height,
        width,
        height,
        neck_w: REF_NECK_W * sx,
        sx,
        sy,
    }
}

/// Interior glass width at height `y`: an organic bulge mixing a 1.5-power
/// and a cubic term, pinched to the neck width at the waist.
fn width_at(glass: &Glass, y: f64) -> f64 {
    let half = glass.height / 2.0;
    let p = ((y - glass.neck_y).abs() / half).min(1.0);
    glass.neck_w + (glass.width - glass.neck_w) * (0.3 * p.powf(1.5) + 0.7 * p.powi(3))
}

/// Height of the bottom sand column for a given progress fraction. Zero below
/// the visibility threshold.
fn bulb_fill_height(progress: f64, glass_h: f64, sy: f64) -> f64 {
    let fill = progress.clamp(0.0, 1.0) * glass_h * BULB_FRAC;
    if fill > 5.0 * sy { fill } else { 0.0 }
}

/// Peak of the heaped mound rising above the sand column.
fn mound_height(fill_h: f64, sy: f64) -> f64 {
    (80.0 * sy).min(fill_h * 0.9)
}

fn glass_path(g: &Glass) -> BezPath {
    let (cx, w, nw) = (g.cx, g.width, g.neck_w);
    let flare_x = 40.0 * g.sx;
    let shoulder_y = 220.0 * g.sy;
    let waist_y = 100.0 * g.sy;

    let mut path = BezPath::new();
    path.move_to((cx - w / 2.0, g.top_y));
    path.line_to((cx + w / 2.0, g.top_y));
    path.curve_to(
        (cx + w / 2.0 + flare_x, g.top_y + shoulder_y),
        (cx + nw * 4.0, g.neck_y - waist_y),
        (cx + nw / 2.0, g.neck_y),
    );
    path.curve_to(
        (cx + nw * 4.0, g.neck_y + waist_y),
        (cx + w / 2.0 + flare_x, g.bottom_y - shoulder_y),
        (cx + w / 2.0, g.bottom_y),
    );
    path.line_to((cx - w / 2.0, g.bottom_y));
    path.curve_to(
        (cx - w / 2.0 - flare_x, g.bottom_y - shoulder_y),
        (cx - nw * 4.0, g.neck_y + waist_y),
        (cx - nw / 2.0, g.neck_y),
    );
    path.curve_to(
        (cx - nw * 4.0, g.neck_y - waist_y),
        (cx - w / 2.0 - flare_x, g.top_y + shoulder_y),
        (cx - w / 2.0, g.top_y),
    );
    path.close_path();
    path
}

fn bottom_mound_path(g: &Glass, fill_h: f64) -> BezPath {
    let fill_y = g.bottom_y - fill_h;
    let w_at = width_at(g, fill_y) - 15.0 * g.sx;
    let mound_h = mound_height(fill_h, g.sy);
    let base_y = g.bottom_y - 5.0 * g.sy;
    let settle_y = g.bottom_y - 30.0 * g.sy;

    let mut path = BezPath::new();
    path.move_to((g.cx - w_at / 2.0, base_y));
    path.line_to((g.cx + w_at / 2.0, base_y));
    path.curve_to(
        (g.cx + w_at / 2.0, settle_y),
        (g.cx + w_at / 3.0, fill_y),
        (g.cx, fill_y - mound_h),
    );
    path.curve_to(
        (g.cx - w_at / 3.0, fill_y),
        (g.cx - w_at / 2.0, settle_y),
        (g.cx - w_at / 2.0, base_y),
    );
    path.close_path();
    path
}

fn top_volume_path(g: &Glass, fill_h: f64) -> BezPath {
    let base_y = g.neck_y - 10.0 * g.sy;
    let surface_y = base_y - fill_h;
    let w_at = width_at(g, surface_y) - 15.0 * g.sx;
    // Draining vortex: the surface dips toward the neck.
    let dip = (40.0 * g.sy).min(fill_h * 0.5);
    let slope_y = 40.0 * g.sy;

    let mut path = BezPath::new();
    path.move_to((g.cx - g.neck_w / 2.0, base_y));
    path.line_to((g.cx + g.neck_w / 2.0, base_y));
    path.curve_to(
        (g.cx + g.neck_w, base_y - slope_y),
        (g.cx + w_at / 2.0, surface_y + slope_y),
        (g.cx + w_at / 2.0, surface_y),
    );
    path.quad_to((g.cx, surface_y + dip), (g.cx - w_at / 2.0, surface_y));
    path.curve_to(
        (g.cx - w_at / 2.0, surface_y + slope_y),
        (g.cx - g.neck_w, base_y - slope_y),
        (g.cx - g.neck_w / 2.0, base_y),
    );
    path.close_path();
    path
}

fn sand_fill(opacity: f64) -> Fill {
    Fill {
        paint: Paint::reference(SAND_FADE_ID),
        opacity,
    }
}

fn grain_overlay() -> Fill {
    Fill {
        paint: Paint::reference(GRAIN_PATTERN_ID),
        opacity: 1.0,
    }
}

pub(crate) fn layout(doc: &mut SceneDocument, ctx: &LayoutCtx<'_>, rng: &mut dyn AmbientRng) {
    let g = glass_metrics(&ctx.region);

    doc.defs.push(Def::Bloom {
        id: BLOOM_ID.to_string(),
        std_deviation: 8.0,
        tint: Rgb::new(0x00, 0x99, 0xFF),
    });
    doc.defs.push(Def::FloodGlow {
        id: SAND_GLOW_ID.to_string(),
        std_deviation: 15.0,
        color: GLASS_STROKE,
        opacity: 0.4,
    });
    doc.defs.push(Def::GrainPattern {
        id: GRAIN_PATTERN_ID.to_string(),
    });
    doc.defs.push(Def::VerticalFade {
        id: SAND_FADE_ID.to_string(),
        stops: vec![
            FadeStop {
                offset: 0.0,
                color: GLASS_STROKE,
                opacity: 1.0,
            },
            FadeStop {
                offset: 0.7,
                color: SAND_ACCENT,
                opacity: 0.6,
            },
            FadeStop {
                offset: 1.0,
                color: SAND_ACCENT,
                opacity: 0.3,
            },
        ],
    });

    // Glass outline with a faint interior sheen.
    doc.nodes.push(Primitive::Path(PathNode {
        path: glass_path(&g),
        fill: Some(Fill::solid_with_opacity(WHITE, 0.01)),
        stroke: Some(Stroke {
            paint: Paint::Solid(GLASS_STROKE),
            width: 2.0,
            opacity: 0.6,
            cap: LineCap::Butt,
            dash: None,
        }),
        filter: Some(BLOOM_ID.to_string()),
    }));

    // Cap plates.
    let overhang = 40.0 * g.sx;
    for y in [g.top_y, g.bottom_y] {
        doc.nodes.push(Primitive::Line(LineNode {
            from: Point::new(g.cx - g.width / 2.0 - overhang, y),
            to: Point::new(g.cx + g.width / 2.0 + overhang, y),
            stroke: Stroke {
                paint: Paint::Solid(GLASS_STROKE),
                width: 4.0,
                opacity: 1.0,
                cap: LineCap::Round,
                dash: None,
            },
            filter: Some(BLOOM_ID.to_string()),
        }));
    }

    // Bottom mound grows with elapsed time.
    let fill_bottom = bulb_fill_height(ctx.progress.fraction(), g.height, g.sy);
    if fill_bottom > 0.0 {
        let mound = bottom_mound_path(&g, fill_bottom);
        doc.nodes.push(Primitive::Path(PathNode {
            path: mound.clone(),
            fill: Some(sand_fill(1.0)),
            stroke: None,
            filter: Some(SAND_GLOW_ID.to_string()),
        }));
        doc.nodes.push(Primitive::Path(PathNode {
            path: mound,
            fill: Some(grain_overlay()),
            stroke: None,
            filter: None,
        }));
    }

    // Top volume shrinks as the year drains away.
    let fill_top =
        bulb_fill_height(ctx.progress.remaining_fraction(), g.height, g.sy);
    if fill_top > 0.0 {
        let volume = top_volume_path(&g, fill_top);
        doc.nodes.push(Primitive::Path(PathNode {
            path: volume.clone(),
            fill: Some(sand_fill(0.8)),
            stroke: None,
            filter: Some(SAND_GLOW_ID.to_string()),
        }));
        doc.nodes.push(Primitive::Path(PathNode {
            path: volume,
            fill: Some(grain_overlay()),
            stroke: None,
            filter: None,
        }));
    }

    // Ambient specks drifting around the glass.
    for _ in 0..SPECK_COUNT {
        let x = g.cx + (rng.next_unit() - 0.5) * g.width * 1.5;
        let y = g.top_y + 2.0 + rng.next_unit() * g.height * 1.15;
        let radius = rng.next_unit() * 1.5 + 0.5;
        let opacity = rng.next_unit() * 0.4;
        doc.nodes.push(Primitive::Circle(CircleNode {
            center: Point::new(x, y),
            radius,
            fill: Some(Fill::solid_with_opacity(SAND_ACCENT, opacity)),
            stroke: None,
            filter: None,
            rotation: None,
        }));
    }

    // Falling stream from the neck to the top of the mound.
    let stream_end = g.bottom_y - fill_bottom - 15.0 * g.sy;
    for i in 0..GRAIN_COUNT {
        let t = i as f64 / (GRAIN_COUNT as f64 - 1.0);
        let y = g.neck_y + t * (stream_end - g.neck_y);
        if y >= stream_end {
            continue;
        }
        let jitter = (i as f64 * 2.2).sin() * 1.8 * g.sx;
        let radius = 3.0 * g.sx * (0.8 + rng.next_unit() * 0.4);
        doc.nodes.push(Primitive::Circle(CircleNode {
            center: Point::new(g.cx + jitter, y),
            radius,
            fill: Some(Fill::solid_with_opacity(SAND_ACCENT, 1.0 - t * 0.2)),
            stroke: None,
            filter: Some(BLOOM_ID.to_string()),
            rotation: None,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region {
            x: 7.5,
            y: 420.0,
            width: 735.0,
            height: 673.88,
        }
    }

    #[test]
    fn bottom_fill_is_zero_at_zero_and_monotonic() {
        let g = glass_metrics(&region());
        assert_eq!(bulb_fill_height(0.0, g.height, g.sy), 0.0);

        let mut prev = 0.0;
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            let fill = bulb_fill_height(p, g.height, g.sy);
            assert!(fill >= prev, "fill height decreased at p={p}");
            prev = fill;
        }
        // Full bulb tops out at the bulb fraction.
        assert!((prev - g.height * BULB_FRAC).abs() < 1e-9);
    }

    #[test]
    fn mound_peak_is_capped() {
        let g = glass_metrics(&region());
        assert!(mound_height(10.0, g.sy) <= 9.0 + 1e-9);
        assert!(mound_height(1e6, g.sy) <= 80.0 * g.sy + 1e-9);
    }

    #[test]
    fn silhouette_stays_inside_the_region() {
        use kurbo::Shape as _;
        let r = region();
        let g = glass_metrics(&r);
        let bounds = glass_path(&g).bounding_box();
        assert!(bounds.y0 >= r.y);
        assert!(bounds.y1 <= r.bottom() + 1e-9);
    }

    #[test]
    fn neck_width_pinches_the_bulge() {
        let g = glass_metrics(&region());
        assert!((width_at(&g, g.neck_y) - g.neck_w).abs() < 1e-9);
        assert!((width_at(&g, g.top_y) - g.width).abs() < 1e-9);
        assert!(width_at(&g, g.neck_y + 50.0) < width_at(&g, g.neck_y + 150.0));
    }
}

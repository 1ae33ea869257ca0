//! Goal countdown ring: a dark track, a progress arc drawn with the
//! dash-offset technique, and a large remaining-days numeral.

use std::f64::consts::PI;

use crate::foundation::core::{Point, Rgb};
use crate::foundation::math::AmbientRng;
use crate::generate::LayoutCtx;
use crate::scene::model::{
    CircleNode, Dash, Fill, LineCap, Paint, Primitive, Rotation, SOFT_GLOW_ID, SceneDocument,
    Stroke, TextAnchor, TextNode,
};
use crate::scene::palette::NEUTRAL_DARK;

const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Ring radius as a fraction of canvas width.
const RADIUS_FRAC: f64 = 0.35;
/// Stroke width as a fraction of canvas width.
const STROKE_FRAC: f64 = 0.08;

pub(crate) fn layout(doc: &mut SceneDocument, ctx: &LayoutCtx<'_>, _rng: &mut dyn AmbientRng) {
    let w = f64::from(ctx.canvas.width);
    let center = ctx.region.center();
    let radius = w * RADIUS_FRAC;
    let stroke_w = w * STROKE_FRAC;
    let circumference = 2.0 * PI * radius;
    let fraction = ctx.progress.fraction();

    // Track.
    doc.nodes.push(Primitive::Circle(CircleNode {
        center,
        radius,
        fill: None,
        stroke: Some(Stroke::solid(NEUTRAL_DARK, stroke_w)),
        filter: None,
        rotation: None,
    }));

    // Progress arc, starting at 12 o'clock.
    doc.nodes.push(Primitive::Circle(CircleNode {
        center,
        radius,
        fill: None,
        stroke: Some(Stroke {
            paint: Paint::Solid(ctx.palette.primary),
            width: stroke_w,
            opacity: 1.0,
            cap: LineCap::Round,
            dash: Some(Dash {
                array: circumference,
                offset: circumference * (1.0 - fraction),
            }),
        }),
        filter: Some(SOFT_GLOW_ID.to_string()),
        rotation: Some(Rotation {
            degrees: -90.0,
            center,
        }),
    }));

    // Remaining-days numeral.
    doc.nodes.push(Primitive::Text(TextNode {
        pos: Point::new(center.x, center.y + w / 30.0),
        content: ctx.progress.remaining.to_string(),
        size: w / 3.0,
        weight: 900,
        fill: Fill::solid(WHITE),
        anchor: TextAnchor::Middle,
        letter_spacing: None,
        filter: Some(SOFT_GLOW_ID.to_string()),
    }));

    doc.nodes.push(Primitive::Text(TextNode {
        pos: Point::new(center.x, center.y + w / 5.0),
        content: "DAYS LEFT".to_string(),
        size: w / 22.0,
        weight: 600,
        fill: Fill::solid_with_opacity(WHITE, 0.4),
        anchor: TextAnchor::Middle,
        letter_spacing: Some(12.0 * w / 750.0),
        filter: None,
    }));
}

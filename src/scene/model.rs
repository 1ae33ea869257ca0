use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect, Rgb};

/// Id of the full-canvas radial background gradient.
pub(crate) const MESH_GRADIENT_ID: &str = "mesh";
/// Id of the plain gaussian glow filter.
pub(crate) const SOFT_GLOW_ID: &str = "soft-glow";
/// Id of the tinted bloom filter used on glass strokes and falling grains.
pub(crate) const BLOOM_ID: &str = "bloom";
/// Id of the flood-composited glow wrapped around sand volumes.
pub(crate) const SAND_GLOW_ID: &str = "sand-glow";
/// Id of the tiling speckle texture overlaid on sand volumes.
pub(crate) const GRAIN_PATTERN_ID: &str = "grain";
/// Id of the bottom-to-top sand gradient.
pub(crate) const SAND_FADE_ID: &str = "sand-fade";

/// Paint applied to a fill or stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    /// Flat color.
    Solid(Rgb),
    /// Reference to a [`Def`] (gradient or pattern) by id.
    Ref(String),
}

impl Paint {
    /// Reference a def by id.
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Ref(id.into())
    }
}

/// Fill style: paint plus fill opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fill {
    /// Fill paint.
    pub paint: Paint,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Fill {
    /// Opaque solid fill.
    pub fn solid(color: Rgb) -> Self {
        Self {
            paint: Paint::Solid(color),
            opacity: 1.0,
        }
    }

    /// Solid fill at reduced opacity.
    pub fn solid_with_opacity(color: Rgb, opacity: f64) -> Self {
        Self {
            paint: Paint::Solid(color),
            opacity,
        }
    }
}

/// Stroke line-cap shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    /// Flat cap.
    #[default]
    Butt,
    /// Rounded cap.
    Round,
}

/// Single-interval dash specification (`stroke-dasharray`/`stroke-dashoffset`).
///
/// With `array` set to a circle's circumference, `offset` controls what
/// fraction of the outline is drawn; this is how the goal ring arc works.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dash {
    /// Dash interval length.
    pub array: f64,
    /// Offset into the dash pattern.
    pub offset: f64,
}

/// Stroke style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Line-cap shape.
    pub cap: LineCap,
    /// Optional dash pattern.
    pub dash: Option<Dash>,
}

impl Stroke {
    /// Opaque solid stroke with butt caps and no dash.
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            paint: Paint::Solid(color),
            width,
            opacity: 1.0,
            cap: LineCap::Butt,
            dash: None,
        }
    }
}

/// Rotation about a fixed point, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Angle in degrees, clockwise positive.
    pub degrees: f64,
    /// Rotation center.
    pub center: Point,
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAnchor {
    /// Anchor at the left edge.
    #[default]
    Start,
    /// Anchor at the center.
    Middle,
    /// Anchor at the right edge.
    End,
}

/// One stop of a [`Def::VerticalFade`] gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeStop {
    /// Stop position in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Rgb,
    /// Stop opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A reusable declaration emitted into the document defs block and referenced
/// by id from paints and filters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Def {
    /// Radial background mesh: bright center fading to a dark edge.
    RadialMesh {
        /// Referenced id.
        id: String,
        /// Center color.
        center: Rgb,
        /// Edge color.
        edge: Rgb,
    },
    /// Bottom-to-top linear gradient for sand volumes.
    VerticalFade {
        /// Referenced id.
        id: String,
        /// Ordered stops, bottom first.
        stops: Vec<FadeStop>,
    },
    /// Gaussian blur merged under the source graphic.
    SoftGlow {
        /// Referenced id.
        id: String,
        /// Blur standard deviation.
        std_deviation: f64,
    },
    /// Blur recolored to a tint, merged under the source graphic.
    Bloom {
        /// Referenced id.
        id: String,
        /// Blur standard deviation.
        std_deviation: f64,
        /// Tint applied to the blurred halo.
        tint: Rgb,
    },
    /// Blur composited with a flood color, merged under the source graphic.
    FloodGlow {
        /// Referenced id.
        id: String,
        /// Blur standard deviation.
        std_deviation: f64,
        /// Flood color.
        color: Rgb,
        /// Flood opacity.
        opacity: f64,
    },
    /// Tiling speckle texture for sand grain.
    GrainPattern {
        /// Referenced id.
        id: String,
    },
}

/// Circle primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleNode {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Optional fill.
    pub fill: Option<Fill>,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Optional filter reference.
    pub filter: Option<String>,
    /// Optional rotation (used with dashes to start arcs at 12 o'clock).
    pub rotation: Option<Rotation>,
}

/// Axis-aligned rounded rectangle primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundRectNode {
    /// Rectangle bounds.
    pub rect: Rect,
    /// Corner radius in pixels.
    pub radius: f64,
    /// Fill style.
    pub fill: Fill,
}

/// Bezier path primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathNode {
    /// Path geometry.
    pub path: BezPath,
    /// Optional fill.
    pub fill: Option<Fill>,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Optional filter reference.
    pub filter: Option<String>,
}

/// Straight line primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineNode {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke style.
    pub stroke: Stroke,
    /// Optional filter reference.
    pub filter: Option<String>,
}

/// Text primitive. Positioned at the baseline of the first line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    /// Baseline anchor position.
    pub pos: Point,
    /// Text content.
    pub content: String,
    /// Font size in pixels.
    pub size: f64,
    /// Numeric font weight.
    pub weight: u16,
    /// Fill style.
    pub fill: Fill,
    /// Horizontal anchoring around `pos`.
    pub anchor: TextAnchor,
    /// Optional letter spacing in pixels.
    pub letter_spacing: Option<f64>,
    /// Optional filter reference.
    pub filter: Option<String>,
}

/// A single drawing primitive, in z-order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Primitive {
    /// Circle.
    Circle(CircleNode),
    /// Rounded rectangle.
    RoundRect(RoundRectNode),
    /// Bezier path.
    Path(PathNode),
    /// Straight line.
    Line(LineNode),
    /// Text run.
    Text(TextNode),
}

impl Primitive {
    /// Stroke-inclusive axis-aligned bounds.
    ///
    /// Rotation is only ever applied to a circle about its own center, which
    /// leaves its bounds unchanged. Text bounds are an estimate from nominal
    /// glyph metrics (0.6em advance, 0.75em ascent, 0.25em descent).
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => {
                let r = c.radius + c.stroke.as_ref().map_or(0.0, |s| s.width / 2.0);
                Rect::new(
                    c.center.x - r,
                    c.center.y - r,
                    c.center.x + r,
                    c.center.y + r,
                )
            }
            Self::RoundRect(r) => r.rect,
            Self::Path(p) => {
                let half = p.stroke.as_ref().map_or(0.0, |s| s.width / 2.0);
                p.path.bounding_box().inflate(half, half)
            }
            Self::Line(l) => {
                let half = l.stroke.width / 2.0;
                Rect::from_points(l.from, l.to).inflate(half, half)
            }
            Self::Text(t) => {
                let advance = t.content.chars().count() as f64
                    * (t.size * 0.6 + t.letter_spacing.unwrap_or(0.0));
                let (x0, x1) = match t.anchor {
                    TextAnchor::Start => (t.pos.x, t.pos.x + advance),
                    TextAnchor::Middle => (t.pos.x - advance / 2.0, t.pos.x + advance / 2.0),
                    TextAnchor::End => (t.pos.x - advance, t.pos.x),
                };
                Rect::new(x0, t.pos.y - t.size * 0.75, x1, t.pos.y + t.size * 0.25)
            }
        }
    }
}

/// The generated output: ordered primitives plus the defs they reference.
///
/// Exists only for the duration of one generation call and is immediately
/// consumed by the SVG serializer and rasterizer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDocument {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Declarations referenced by id from paints and filters.
    pub defs: Vec<Def>,
    /// Full-canvas background paint.
    pub background: Paint,
    /// Foreground primitives, in z-order.
    pub nodes: Vec<Primitive>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bounds_include_stroke() {
        let node = Primitive::Circle(CircleNode {
            center: Point::new(10.0, 10.0),
            radius: 4.0,
            fill: None,
            stroke: Some(Stroke::solid(Rgb::new(255, 255, 255), 2.0)),
            filter: None,
            rotation: None,
        });
        assert_eq!(node.bounding_box(), Rect::new(5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn line_bounds_span_endpoints() {
        let node = Primitive::Line(LineNode {
            from: Point::new(0.0, 8.0),
            to: Point::new(10.0, 8.0),
            stroke: Stroke::solid(Rgb::new(255, 255, 255), 4.0),
            filter: None,
        });
        assert_eq!(node.bounding_box(), Rect::new(-2.0, 6.0, 12.0, 10.0));
    }

    #[test]
    fn scene_document_round_trips_through_json() {
        let doc = SceneDocument {
            width: 10,
            height: 20,
            defs: vec![Def::SoftGlow {
                id: "soft-glow".to_string(),
                std_deviation: 8.0,
            }],
            background: Paint::reference("mesh"),
            nodes: vec![Primitive::Circle(CircleNode {
                center: Point::new(5.0, 5.0),
                radius: 2.0,
                fill: Some(Fill::solid(Rgb::new(1, 2, 3))),
                stroke: None,
                filter: None,
                rotation: None,
            })],
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: SceneDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn text_bounds_sit_on_the_baseline() {
        let node = Primitive::Text(TextNode {
            pos: Point::new(100.0, 100.0),
            content: "7".to_string(),
            size: 40.0,
            weight: 900,
            fill: Fill::solid(Rgb::new(255, 255, 255)),
            anchor: TextAnchor::Middle,
            letter_spacing: None,
            filter: None,
        });
        let b = node.bounding_box();
        assert_eq!(b.y0, 70.0);
        assert_eq!(b.y1, 110.0);
        assert!((b.x0 - 88.0).abs() < 1e-9 && (b.x1 - 112.0).abs() < 1e-9);
    }
}

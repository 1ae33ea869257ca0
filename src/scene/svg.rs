//! SVG serialization of a scene document.
//!
//! Converts a [`SceneDocument`] into a self-contained SVG string: defs block
//! first, then a full-canvas background rect, then the foreground primitives
//! in z-order. This is a pure function with no IO -- it returns a `String`.

use std::fmt::Write as _;

use crate::scene::model::{
    CircleNode, Def, Fill, LineCap, LineNode, Paint, PathNode, Primitive, RoundRectNode,
    SceneDocument, Stroke, TextAnchor, TextNode,
};

/// Serialize `doc` to SVG markup.
pub fn write_document(doc: &SceneDocument) -> String {
    let mut out = String::with_capacity(doc.nodes.len() * 96 + 1024);
    let _ = writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = doc.width,
        h = doc.height,
    );

    out.push_str("  <defs>\n");
    for def in &doc.defs {
        write_def(&mut out, def);
    }
    out.push_str("  </defs>\n");

    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}" />"#,
        paint_value(&doc.background),
    );

    for node in &doc.nodes {
        write_primitive(&mut out, node);
    }

    out.push_str("</svg>\n");
    out
}

/// Escape the five XML special characters for safe embedding in text content
/// and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Compact decimal formatting: two fractional digits, trailing zeros trimmed.
fn num(v: f64) -> String {
    let mut s = format!("{v:.2}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

fn paint_value(paint: &Paint) -> String {
    match paint {
        Paint::Solid(color) => color.to_hex(),
        Paint::Ref(id) => format!("url(#{id})"),
    }
}

fn write_def(out: &mut String, def: &Def) {
    match def {
        Def::RadialMesh { id, center, edge } => {
            let _ = writeln!(
                out,
                r#"    <radialGradient id="{id}" cx="50%" cy="40%" r="80%" fx="50%" fy="40%">
      <stop offset="0%" stop-color="{c}" />
      <stop offset="60%" stop-color="{e}" />
    </radialGradient>"#,
                c = center.to_hex(),
                e = edge.to_hex(),
            );
        }
        Def::VerticalFade { id, stops } => {
            let _ = writeln!(
                out,
                r#"    <linearGradient id="{id}" x1="0%" y1="100%" x2="0%" y2="0%">"#
            );
            for stop in stops {
                let _ = writeln!(
                    out,
                    r#"      <stop offset="{}%" stop-color="{}" stop-opacity="{}" />"#,
                    num(stop.offset * 100.0),
                    stop.color.to_hex(),
                    num(stop.opacity),
                );
            }
            out.push_str("    </linearGradient>\n");
        }
        Def::SoftGlow { id, std_deviation } => {
            let _ = writeln!(
                out,
                r#"    <filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="{sd}" result="blur" />
      <feMerge>
        <feMergeNode />
        <feMergeNode in="SourceGraphic" />
      </feMerge>
    </filter>"#,
                sd = num(*std_deviation),
            );
        }
        Def::Bloom {
            id,
            std_deviation,
            tint,
        } => {
            let [r, g, b] = tint.to_unit();
            let _ = writeln!(
                out,
                r#"    <filter id="{id}" x="-100%" y="-100%" width="300%" height="300%">
      <feGaussianBlur stdDeviation="{sd}" result="blur" />
      <feColorMatrix in="blur" type="matrix" values="0 0 0 0 {r}  0 0 0 0 {g}  0 0 0 0 {b}  0 0 0 1 0" />
      <feMerge>
        <feMergeNode />
        <feMergeNode in="SourceGraphic" />
      </feMerge>
    </filter>"#,
                sd = num(*std_deviation),
                r = num(r),
                g = num(g),
                b = num(b),
            );
        }
        Def::FloodGlow {
            id,
            std_deviation,
            color,
            opacity,
        } => {
            let _ = writeln!(
                out,
                r#"    <filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="{sd}" result="blur" />
      <feFlood flood-color="{c}" flood-opacity="{o}" result="color" />
      <feComposite in="color" in2="blur" operator="in" />
      <feMerge>
        <feMergeNode />
        <feMergeNode in="SourceGraphic" />
      </feMerge>
    </filter>"#,
                sd = num(*std_deviation),
                c = color.to_hex(),
                o = num(*opacity),
            );
        }
        Def::GrainPattern { id } => {
            let _ = writeln!(
                out,
                r#"    <pattern id="{id}" width="10" height="10" patternUnits="userSpaceOnUse">
      <circle cx="2" cy="2" r="0.5" fill="white" fill-opacity="0.2" />
      <circle cx="7" cy="5" r="0.5" fill="white" fill-opacity="0.1" />
    </pattern>"#
            );
        }
    }
}

fn push_fill_attrs(out: &mut String, fill: Option<&Fill>) {
    match fill {
        Some(f) => {
            let _ = write!(out, r#" fill="{}""#, paint_value(&f.paint));
            if f.opacity < 1.0 {
                let _ = write!(out, r#" fill-opacity="{}""#, num(f.opacity));
            }
        }
        None => out.push_str(r#" fill="none""#),
    }
}

fn push_stroke_attrs(out: &mut String, stroke: &Stroke) {
    let _ = write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        paint_value(&stroke.paint),
        num(stroke.width),
    );
    if stroke.opacity < 1.0 {
        let _ = write!(out, r#" stroke-opacity="{}""#, num(stroke.opacity));
    }
    if stroke.cap == LineCap::Round {
        out.push_str(r#" stroke-linecap="round""#);
    }
    if let Some(dash) = stroke.dash {
        let _ = write!(
            out,
            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
            num(dash.array),
            num(dash.offset),
        );
    }
}

fn push_filter_attr(out: &mut String, filter: Option<&String>) {
    if let Some(id) = filter {
        let _ = write!(out, r#" filter="url(#{id})""#);
    }
}

fn write_primitive(out: &mut String, node: &Primitive) {
    match node {
        Primitive::Circle(c) => write_circle(out, c),
        Primitive::RoundRect(r) => write_round_rect(out, r),
        Primitive::Path(p) => write_path(out, p),
        Primitive::Line(l) => write_line(out, l),
        Primitive::Text(t) => write_text(out, t),
    }
}

fn write_circle(out: &mut String, c: &CircleNode) {
    let _ = write!(
        out,
        r#"  <circle cx="{}" cy="{}" r="{}""#,
        num(c.center.x),
        num(c.center.y),
        num(c.radius),
    );
    push_fill_attrs(out, c.fill.as_ref());
    if let Some(stroke) = &c.stroke {
        push_stroke_attrs(out, stroke);
    }
    if let Some(rot) = c.rotation {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            num(rot.degrees),
            num(rot.center.x),
            num(rot.center.y),
        );
    }
    push_filter_attr(out, c.filter.as_ref());
    out.push_str(" />\n");
}

fn write_round_rect(out: &mut String, r: &RoundRectNode) {
    let _ = write!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}""#,
        num(r.rect.x0),
        num(r.rect.y0),
        num(r.rect.width()),
        num(r.rect.height()),
        num(r.radius),
    );
    push_fill_attrs(out, Some(&r.fill));
    out.push_str(" />\n");
}

fn write_path(out: &mut String, p: &PathNode) {
    let _ = write!(out, r#"  <path d="{}""#, p.path.to_svg());
    push_fill_attrs(out, p.fill.as_ref());
    if let Some(stroke) = &p.stroke {
        push_stroke_attrs(out, stroke);
    }
    push_filter_attr(out, p.filter.as_ref());
    out.push_str(" />\n");
}

fn write_line(out: &mut String, l: &LineNode) {
    let _ = write!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
    );
    push_stroke_attrs(out, &l.stroke);
    push_filter_attr(out, l.filter.as_ref());
    out.push_str(" />\n");
}

fn write_text(out: &mut String, t: &TextNode) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="{}" font-family="-apple-system, sans-serif" font-weight="{}" font-size="{}""#,
        num(t.pos.x),
        num(t.pos.y),
        anchor,
        t.weight,
        num(t.size),
    );
    push_fill_attrs(out, Some(&t.fill));
    if let Some(spacing) = t.letter_spacing {
        let _ = write!(out, r#" letter-spacing="{}""#, num(spacing));
    }
    push_filter_attr(out, t.filter.as_ref());
    let _ = write!(out, ">{}</text>\n", xml_escape(&t.content));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::{Point, Rgb};
    use crate::scene::model::{CircleNode, Dash, Rotation};

    fn empty_doc() -> SceneDocument {
        SceneDocument {
            width: 100,
            height: 200,
            defs: vec![Def::RadialMesh {
                id: "mesh".to_string(),
                center: Rgb::new(0x12, 0x04, 0x1a),
                edge: Rgb::new(0, 0, 0),
            }],
            background: Paint::reference("mesh"),
            nodes: Vec::new(),
        }
    }

    #[test]
    fn document_has_defs_then_background() {
        let svg = write_document(&empty_doc());
        let defs_at = svg.find("<defs>").unwrap();
        let mesh_at = svg.find("radialGradient id=\"mesh\"").unwrap();
        let bg_at = svg.find(r##"fill="url(#mesh)""##).unwrap();
        assert!(defs_at < mesh_at && mesh_at < bg_at);
        assert!(svg.contains(r#"viewBox="0 0 100 200""#));
    }

    #[test]
    fn circle_markup_carries_dash_and_rotation() {
        let mut doc = empty_doc();
        doc.nodes.push(Primitive::Circle(CircleNode {
            center: Point::new(50.0, 100.0),
            radius: 30.0,
            fill: None,
            stroke: Some(Stroke {
                paint: Paint::Solid(Rgb::new(0xFF, 0x95, 0x00)),
                width: 8.0,
                opacity: 1.0,
                cap: LineCap::Round,
                dash: Some(Dash {
                    array: 188.5,
                    offset: 131.95,
                }),
            }),
            filter: None,
            rotation: Some(Rotation {
                degrees: -90.0,
                center: Point::new(50.0, 100.0),
            }),
        }));
        let svg = write_document(&doc);
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#ff9500""##));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r#"stroke-dasharray="188.5" stroke-dashoffset="131.95""#));
        assert!(svg.contains(r#"transform="rotate(-90 50 100)""#));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = empty_doc();
        doc.nodes.push(Primitive::Text(TextNode {
            pos: Point::new(1.0, 2.0),
            content: "a<b & \"c\"".to_string(),
            size: 10.0,
            weight: 400,
            fill: Fill::solid(Rgb::new(255, 255, 255)),
            anchor: TextAnchor::Middle,
            letter_spacing: None,
            filter: None,
        }));
        let svg = write_document(&doc);
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(420.0), "420");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(0.30000000000000004), "0.3");
    }
}

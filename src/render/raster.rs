use crate::foundation::error::{LifeglassError, LifeglassResult};
use crate::scene::model::SceneDocument;
use crate::scene::svg;

/// Straight-alpha RGBA8 bitmap produced by the rasterizer.
#[derive(Clone, Debug)]
pub struct WallpaperFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data, straight (non-premultiplied) alpha.
    pub rgba8: Vec<u8>,
}

/// Rasterize a scene document into an RGBA frame.
#[tracing::instrument(skip(doc), fields(width = doc.width, height = doc.height))]
pub fn rasterize(doc: &SceneDocument) -> LifeglassResult<WallpaperFrame> {
    let markup = svg::write_document(doc);

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(markup.as_bytes(), &opts)
        .map_err(|e| LifeglassError::raster(format!("parse generated svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(doc.width, doc.height)
        .ok_or_else(|| LifeglassError::raster("failed to allocate output pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut rgba8);

    Ok(WallpaperFrame {
        width: doc.width,
        height: doc.height,
        rgba8,
    })
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &WallpaperFrame) -> LifeglassResult<Vec<u8>> {
    use anyhow::Context as _;

    let mut out = std::io::Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &frame.rgba8,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out.into_inner())
}

/// tiny-skia pixmaps are premultiplied; PNG wants straight alpha.
fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demultiply_roundtrips_opaque_and_transparent() {
        let mut px = [10, 20, 30, 255, 0, 0, 0, 0];
        demultiply_rgba8_in_place(&mut px);
        assert_eq!(px, [10, 20, 30, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn demultiply_scales_partial_alpha() {
        // 50% alpha, channel premultiplied to 64 -> ~128 straight.
        let mut px = [64, 64, 64, 128];
        demultiply_rgba8_in_place(&mut px);
        assert_eq!(px[3], 128);
        assert!((126..=130).contains(&px[0]));
    }
}

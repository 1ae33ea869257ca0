//! End-to-end rasterization smoke tests on text-free scenes, so the suite
//! does not depend on which fonts the host has installed.

use lifeglass::{
    CanvasSpec, ProcessRng, ProgressData, SceneOptions, Variant, YearStyle, encode_png, generate,
    rasterize,
};

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn progress(variant: Variant, total: u32, elapsed: u32) -> ProgressData {
    ProgressData {
        total,
        elapsed,
        remaining: total.saturating_sub(elapsed),
        label: None,
        variant,
    }
}

#[test]
fn life_scene_rasterizes_to_an_opaque_frame() {
    init_tracing();
    let canvas = CanvasSpec::new(750, 1334, 420).unwrap();
    let doc = generate(
        Variant::Life,
        &progress(Variant::Life, 4160, 1000),
        canvas,
        SceneOptions::default(),
        &mut ProcessRng::seeded(1),
    );

    let frame = rasterize(&doc).unwrap();
    assert_eq!(frame.width, 750);
    assert_eq!(frame.height, 1334);
    assert_eq!(frame.rgba8.len(), 750 * 1334 * 4);

    // The background mesh covers the full canvas, so every pixel is opaque
    // and at least one lived cell leaves non-black pixels.
    assert!(frame.rgba8.chunks_exact(4).all(|px| px[3] == 255));
    assert!(
        frame
            .rgba8
            .chunks_exact(4)
            .any(|px| px[0] > 0x40 && px[1] < 0x40)
    );
}

#[test]
fn hourglass_scene_rasterizes_without_fonts() {
    init_tracing();
    let canvas = CanvasSpec::new(375, 667, 210).unwrap();
    let doc = generate(
        Variant::Year,
        &progress(Variant::Year, 365, 180),
        canvas,
        SceneOptions {
            year_style: YearStyle::Hourglass,
        },
        &mut ProcessRng::seeded(1),
    );

    let frame = rasterize(&doc).unwrap();
    assert_eq!((frame.width, frame.height), (375, 667));
    assert!(frame.rgba8.iter().any(|&b| b != 0));
}

#[test]
fn png_encoding_produces_a_valid_signature() {
    init_tracing();
    let canvas = CanvasSpec::new(200, 360, 100).unwrap();
    let doc = generate(
        Variant::Life,
        &progress(Variant::Life, 4160, 0),
        canvas,
        SceneOptions::default(),
        &mut ProcessRng::seeded(1),
    );
    let frame = rasterize(&doc).unwrap();
    let png = encode_png(&frame).unwrap();
    assert_eq!(&png[..4], &PNG_MAGIC);
    assert!(png.len() > 64);
}

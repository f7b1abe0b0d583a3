use crate::draw;
use crate::models::{IconData, Rgba};

const TABLET: Rgba = [60, 60, 60, 255];
const SCREEN: Rgba = [240, 240, 240, 255];
const PEN: Rgba = [100, 100, 100, 255];
const PEN_TIP: Rgba = [40, 40, 40, 255];
const STROKE: Rgba = [100, 100, 100, 180];
const SHADOW: Rgba = [0, 0, 0, 60];
const ACCENT: Rgba = [52, 199, 89, 255];

/// Draw the app bundle icon at the given square size.
///
/// All geometry scales from the 512 px reference layout, so every size
/// is rasterized fresh rather than resampled from a master sprite.
pub fn app_icon(size: u32) -> IconData {
    let mut img = IconData::new(size, size);
    let s = size as i32;
    let scale = size as f32 / 512.0;
    let sc = |v: f32| (v * scale) as i32;

    let pad = sc(40.0);
    let (tx0, ty0, tx1, ty1) = (pad, pad, s - pad, s - pad);
    let radius = sc(40.0);

    // drop shadow under the tablet body
    let off = sc(6.0);
    draw::fill_rounded_rect(
        &mut img,
        tx0 + off,
        ty0 + off,
        tx1 + off,
        ty1 + off,
        radius,
        SHADOW,
    );

    draw::fill_rounded_rect(&mut img, tx0, ty0, tx1, ty1, radius, TABLET);

    // screen
    let inset = sc(20.0);
    let (sx0, sy0, sx1, sy1) = (tx0 + inset, ty0 + inset, tx1 - inset, ty1 - inset);
    draw::fill_rounded_rect(&mut img, sx0, sy0, sx1, sy1, sc(20.0), SCREEN);

    // handwriting: zig-zag lines across the screen, as many as fit
    let stroke_w = sc(4.0).max(2) as f32;
    let y_start = sy0 + sc(60.0);
    let x_start = sx0 + sc(40.0);
    let x_end = sx1 - sc(40.0);
    for i in 0..3 {
        let y = y_start + i * sc(50.0);
        if y + sc(20.0) >= sy1 {
            continue;
        }
        let segments = 20;
        let mut points = Vec::with_capacity(segments + 1);
        for j in 0..=segments {
            let x = x_start as f32 + (x_end - x_start) as f32 * j as f32 / segments as f32;
            let wave = if (j / 3) % 2 == 0 { sc(8.0) } else { -sc(8.0) };
            points.push((x, (y + wave) as f32));
        }
        draw::stroke_polyline(&mut img, &points, stroke_w, STROKE);
    }

    // pen diagonal with its tip
    let pen_w = sc(12.0) as f32;
    let px0 = (tx1 - sc(100.0)) as f32;
    let py0 = (ty0 + sc(50.0)) as f32;
    let px1 = px0 + sc(140.0) as f32;
    let py1 = py0 + sc(140.0) as f32;
    draw::stroke_line(&mut img, px0, py0, px1, py1, pen_w, PEN);
    let tip = sc(8.0);
    draw::fill_ellipse(
        &mut img,
        px1 as i32 - tip,
        py1 as i32 - tip,
        px1 as i32 + tip,
        py1 as i32 + tip,
        PEN_TIP,
    );

    // brand dot, upper left of the tablet
    let ind = sc(12.0);
    let (ix, iy) = (tx0 + sc(30.0), ty0 + sc(30.0));
    draw::fill_ellipse(&mut img, ix - ind, iy - ind, ix + ind, iy + ind, ACCENT);

    img
}

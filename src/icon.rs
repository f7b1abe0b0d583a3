use crate::draw;
use crate::models::{IconData, Rgb, Rgba, opaque};

/// Standard macOS menu bar icon size in pixels.
pub const MENU_BAR_SIZE: u32 = 22;

// Template color; macOS tints it per light/dark theme.
const TEMPLATE_BLACK: Rgba = [0, 0, 0, 255];
// Page gray reads on both themes.
const DOC_GRAY: Rgba = [160, 160, 160, 255];
const FOLD_GRAY: Rgba = [100, 100, 100, 255];
const HALO_WHITE: Rgba = [255, 255, 255, 180];

/// Simple filled status circle, inset 3 px from the canvas edge.
pub fn circle_icon(color: Rgb, size: u32) -> IconData {
    let mut img = IconData::new(size, size);
    let s = size as i32;
    let pad = 3;
    draw::fill_ellipse(&mut img, pad, pad, s - pad, s - pad, opaque(color));
    img
}

/// Page with a folded corner and a colored status dot, bottom right.
pub fn document_icon(color: Rgb, size: u32) -> IconData {
    let mut img = IconData::new(size, size);
    let s = size as i32;
    let pad = 4;

    draw::fill_rect(&mut img, pad, pad, s - pad, s - pad, DOC_GRAY);

    let fold = 4.0;
    let right = (s - pad) as f32;
    let top = pad as f32;
    draw::fill_triangle(
        &mut img,
        (right - fold, top),
        (right, top),
        (right, top + fold),
        FOLD_GRAY,
    );

    let dot = 6;
    let dx = s - pad - dot - 1;
    let dy = s - pad - dot - 1;
    draw::fill_ellipse(&mut img, dx, dy, dx + dot, dy + dot, opaque(color));
    img
}

/// 22x22 tablet-and-pen glyph with a colored status dot.
///
/// The glyph is drawn in black so the host can treat it as a template
/// and tint it per theme; the dot sits on a white halo so it stays
/// visible on dark menu bars.
pub fn menubar_icon(status: Rgb) -> IconData {
    let mut img = IconData::new(MENU_BAR_SIZE, MENU_BAR_SIZE);

    // tablet body
    draw::stroke_rounded_rect(&mut img, 2, 4, 15, 18, 2, 1, TEMPLATE_BLACK);

    // pen across the tablet, tip at the lower end
    draw::stroke_line(&mut img, 6.0, 3.0, 17.0, 14.0, 2.0, TEMPLATE_BLACK);
    draw::fill_ellipse(&mut img, 16, 13, 18, 15, TEMPLATE_BLACK);

    // status dot over its halo, with a thin outline for definition
    let (cx, cy, r) = (18, 5, 3);
    let halo = r + 1;
    draw::fill_ellipse(&mut img, cx - halo, cy - halo, cx + halo, cy + halo, HALO_WHITE);
    draw::fill_ellipse(&mut img, cx - r, cy - r, cx + r, cy + r, opaque(status));
    draw::stroke_ellipse(&mut img, cx - r, cy - r, cx + r, cy + r, 1, TEMPLATE_BLACK);

    img
}

use crate::models::{IconData, Rgba};

// Bounding boxes are inclusive on both ends, so [3, 3, 19, 19] spans
// 17 pixels. Clipping happens in IconData::put.

fn in_ellipse(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
    let cx = (x0 + x1) as f32 * 0.5;
    let cy = (y0 + y1) as f32 * 0.5;
    let rx = (x1 - x0) as f32 * 0.5;
    let ry = (y1 - y0) as f32 * 0.5;
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    // multiplied-out form: degenerate boxes must not divide by zero
    (dx * ry) * (dx * ry) + (dy * rx) * (dy * rx) <= (rx * ry) * (rx * ry)
}

fn in_rounded_rect(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let r = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);
    if r == 0 {
        return true;
    }
    // distance to the inset core rect decides the corner arcs
    let dx = x - x.clamp(x0 + r, x1 - r);
    let dy = y - y.clamp(y0 + r, y1 - r);
    dx * dx + dy * dy <= r * r
}

fn dist_to_segment(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
    };
    let ex = x0 + t * dx - px;
    let ey = y0 + t * dy - py;
    (ex * ex + ey * ey).sqrt()
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

pub fn fill_rect(img: &mut IconData, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put(x, y, color);
        }
    }
}

pub fn fill_ellipse(img: &mut IconData, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            if in_ellipse(x, y, x0, y0, x1, y1) {
                img.put(x, y, color);
            }
        }
    }
}

/// Ellipse outline of the given stroke width, drawn inward from the
/// bounding box. An ellipse too small to be hollow is filled solid.
pub fn stroke_ellipse(
    img: &mut IconData,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba,
) {
    let hollow = x1 - x0 > 2 * width && y1 - y0 > 2 * width;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !in_ellipse(x, y, x0, y0, x1, y1) {
                continue;
            }
            if hollow && in_ellipse(x, y, x0 + width, y0 + width, x1 - width, y1 - width) {
                continue;
            }
            img.put(x, y, color);
        }
    }
}

pub fn fill_rounded_rect(
    img: &mut IconData,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba,
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            if in_rounded_rect(x, y, x0, y0, x1, y1, radius) {
                img.put(x, y, color);
            }
        }
    }
}

pub fn stroke_rounded_rect(
    img: &mut IconData,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    width: i32,
    color: Rgba,
) {
    let hollow = x1 - x0 > 2 * width && y1 - y0 > 2 * width;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !in_rounded_rect(x, y, x0, y0, x1, y1, radius) {
                continue;
            }
            if hollow
                && in_rounded_rect(
                    x,
                    y,
                    x0 + width,
                    y0 + width,
                    x1 - width,
                    y1 - width,
                    radius - width,
                )
            {
                continue;
            }
            img.put(x, y, color);
        }
    }
}

/// Thick line segment. Widths below 1 still leave a single-pixel trace.
pub fn stroke_line(img: &mut IconData, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba) {
    let half = width.max(1.0) * 0.5;
    let min_x = (x0.min(x1) - half).floor() as i32;
    let max_x = (x0.max(x1) + half).ceil() as i32;
    let min_y = (y0.min(y1) - half).floor() as i32;
    let max_y = (y0.max(y1) + half).ceil() as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if dist_to_segment(x as f32, y as f32, x0, y0, x1, y1) <= half {
                img.put(x, y, color);
            }
        }
    }
}

pub fn stroke_polyline(img: &mut IconData, points: &[(f32, f32)], width: f32, color: Rgba) {
    for pair in points.windows(2) {
        stroke_line(img, pair[0].0, pair[0].1, pair[1].0, pair[1].1, width, color);
    }
}

pub fn fill_triangle(
    img: &mut IconData,
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    color: Rgba,
) {
    let min_x = p1.0.min(p2.0).min(p3.0).floor() as i32;
    let max_x = p1.0.max(p2.0).max(p3.0).ceil() as i32;
    let min_y = p1.1.min(p2.1).min(p3.1).floor() as i32;
    let max_y = p1.1.max(p2.1).max(p3.1).ceil() as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if point_in_triangle(x as f32 + 0.5, y as f32 + 0.5, p1, p2, p3) {
                img.put(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Rgba = [1, 2, 3, 255];

    #[test]
    fn fill_rect_covers_inclusive_bounds() {
        let mut img = IconData::new(8, 8);
        fill_rect(&mut img, 1, 2, 3, 4, C);
        assert_eq!(img.get(1, 2), C);
        assert_eq!(img.get(3, 4), C);
        assert_eq!(img.get(4, 4), [0, 0, 0, 0]);
        assert_eq!(img.get(0, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn ellipse_touches_bbox_edges_not_corners() {
        let mut img = IconData::new(10, 10);
        fill_ellipse(&mut img, 1, 1, 7, 7, C);
        assert_eq!(img.get(4, 4), C);
        assert_eq!(img.get(1, 4), C);
        assert_eq!(img.get(4, 7), C);
        assert_eq!(img.get(1, 1), [0, 0, 0, 0]);
        assert_eq!(img.get(7, 7), [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_ellipse_fills_single_pixel() {
        let mut img = IconData::new(4, 4);
        fill_ellipse(&mut img, 2, 2, 2, 2, C);
        assert_eq!(img.get(2, 2), C);
        assert_eq!(img.get(1, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn stroke_ellipse_leaves_center_hollow() {
        let mut img = IconData::new(10, 10);
        stroke_ellipse(&mut img, 1, 1, 7, 7, 1, C);
        assert_eq!(img.get(1, 4), C);
        assert_eq!(img.get(4, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn rounded_rect_clears_corners() {
        let mut img = IconData::new(12, 12);
        fill_rounded_rect(&mut img, 0, 0, 9, 9, 3, C);
        assert_eq!(img.get(5, 0), C);
        assert_eq!(img.get(0, 5), C);
        assert_eq!(img.get(5, 5), C);
        assert_eq!(img.get(0, 0), [0, 0, 0, 0]);
        assert_eq!(img.get(9, 9), [0, 0, 0, 0]);
    }

    #[test]
    fn stroke_rounded_rect_is_hollow() {
        let mut img = IconData::new(22, 22);
        stroke_rounded_rect(&mut img, 2, 4, 15, 18, 2, 1, C);
        assert_eq!(img.get(2, 10), C);
        assert_eq!(img.get(8, 4), C);
        assert_eq!(img.get(8, 10), [0, 0, 0, 0]);
        assert_eq!(img.get(2, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn line_thickness_stays_near_segment() {
        let mut img = IconData::new(12, 12);
        stroke_line(&mut img, 2.0, 5.0, 8.0, 5.0, 2.0, C);
        assert_eq!(img.get(5, 5), C);
        assert_eq!(img.get(2, 5), C);
        assert_eq!(img.get(5, 8), [0, 0, 0, 0]);
        assert_eq!(img.get(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn triangle_fills_interior_only() {
        let mut img = IconData::new(22, 22);
        fill_triangle(&mut img, (14.0, 4.0), (18.0, 4.0), (18.0, 8.0), C);
        assert_eq!(img.get(17, 4), C);
        assert_eq!(img.get(17, 5), C);
        assert_eq!(img.get(14, 7), [0, 0, 0, 0]);
    }
}

use std::io::Cursor;
use std::path::Path;

/// Color as stored in the raster buffer.
pub type Rgba = [u8; 4];

/// Status colors are plain RGB; alpha is added at draw time.
pub type Rgb = (u8, u8, u8);

pub fn opaque(color: Rgb) -> Rgba {
    [color.0, color.1, color.2, 255]
}

/// Raw RGBA raster buffer. Dimensions are fixed at creation and the
/// canvas starts fully transparent.
pub struct IconData {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconData {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rgba: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Write one pixel. Coordinates outside the canvas are ignored,
    /// so shapes may overhang the edge.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.rgba[idx..idx + 4].copy_from_slice(&color);
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }

    fn as_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .expect("invalid RGBA buffer")
    }

    /// Encode the buffer as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut png = Vec::new();
        self.as_image()
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(png)
    }

    /// Save the buffer as a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.as_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let img = IconData::new(4, 4);
        assert_eq!(img.rgba.len(), 64);
        assert!(img.rgba.iter().all(|&b| b == 0));
    }

    #[test]
    fn put_clips_out_of_bounds() {
        let mut img = IconData::new(2, 2);
        img.put(-1, 0, [1, 2, 3, 4]);
        img.put(2, 1, [1, 2, 3, 4]);
        img.put(0, 5, [1, 2, 3, 4]);
        assert!(img.rgba.iter().all(|&b| b == 0));
        img.put(1, 1, [9, 8, 7, 6]);
        assert_eq!(img.get(1, 1), [9, 8, 7, 6]);
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let mut img = IconData::new(3, 2);
        img.put(0, 0, [10, 20, 30, 255]);
        img.put(2, 1, [40, 50, 60, 128]);
        let png = img.to_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30, 255]);
        assert_eq!(decoded.get_pixel(2, 1).0, [40, 50, 60, 128]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn save_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let img = crate::icon::circle_icon((52, 199, 89), 22);
        img.save(&path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (22, 22));
        assert_eq!(decoded.get_pixel(11, 11).0, [52, 199, 89, 255]);
    }
}

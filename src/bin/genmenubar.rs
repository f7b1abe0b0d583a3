use std::env;
use std::fs;

use inkbar_icons::{embed, icon};

const COLORS: [(&str, (u8, u8, u8)); 3] = [
    ("green", (52, 199, 89)),
    ("yellow", (255, 214, 10)),
    ("red", (255, 69, 58)),
];

fn main() {
    println!("Generating dark mode compatible menu bar icons...\n");

    for (name, rgb) in COLORS {
        let img = icon::menubar_icon(rgb);
        let png = img
            .to_png()
            .unwrap_or_else(|e| panic!("failed to encode {} icon: {}", name, e));

        println!("// {} status icon, {} bytes", name, png.len());
        println!("pub const ICON_{}: &[u8] = &[", name.to_uppercase());
        println!("{}", embed::byte_array_literal(&png));
        println!("];\n");

        // keep a copy on disk for visual inspection
        let path = env::temp_dir().join(format!("menubar-icon-{}-22.png", name));
        fs::write(&path, &png)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
        println!("Saved to: {}", path.display());
    }
}

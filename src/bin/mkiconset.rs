use std::env;
use std::fs;

use inkbar_icons::appicon;

fn main() {
    // all resolutions iconutil expects, drawn fresh at each size
    let sizes = [16u32, 32, 64, 128, 256, 512, 1024];

    let out_dir = env::temp_dir().join("InkBar.iconset");
    fs::create_dir_all(&out_dir).expect("create iconset dir");

    for size in sizes {
        let img = appicon::app_icon(size);
        let path = out_dir.join(format!("icon_{}x{}.png", size, size));
        img.save(&path)
            .unwrap_or_else(|e| panic!("failed to save {}: {}", path.display(), e));
        println!("Generated icon_{}x{}.png", size, size);

        // retina variant, rendered at double resolution
        if size <= 512 {
            let img2x = appicon::app_icon(size * 2);
            let path = out_dir.join(format!("icon_{}x{}@2x.png", size, size));
            img2x
                .save(&path)
                .unwrap_or_else(|e| panic!("failed to save {}: {}", path.display(), e));
            println!("Generated icon_{}x{}@2x.png", size, size);
        }
    }

    println!("\nIconset written to {}", out_dir.display());
    println!("To convert to .icns, run:");
    println!("  iconutil -c icns {}", out_dir.display());
}

use std::fs;

use inkbar_icons::embed;

const ICONS: [(&str, &str); 3] = [
    ("green", "icon-green-22.png"),
    ("yellow", "icon-yellow-22.png"),
    ("red", "icon-red-22.png"),
];

fn main() {
    println!("// Generated icon data - do not edit by hand");
    println!("// Source: icon-*-22.png");
    println!();

    for (color, filename) in ICONS {
        // a missing input is reported and the batch moves on
        let data = match fs::read(filename) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error: {}: {}", filename, e);
                continue;
            }
        };

        println!("/// {} status icon.", color);
        println!("/// 22x22 PNG with transparency, sized for the macOS menu bar.");
        println!("pub const ICON_{}: &[u8] = &[", color.to_uppercase());
        println!("{}", embed::byte_array_literal(&data));
        println!("];");
        println!();
    }
}

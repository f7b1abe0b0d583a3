use inkbar_icons::icon;

const COLORS: [(&str, (u8, u8, u8)); 3] = [
    ("green", (52, 199, 89)),
    ("yellow", (255, 204, 0)),
    ("red", (255, 59, 48)),
];

fn main() {
    println!("Generating menu bar icons...");

    for (name, rgb) in COLORS {
        let img = icon::circle_icon(rgb, icon::MENU_BAR_SIZE);
        let path = format!("icon-{}-22.png", name);
        img.save(&path)
            .unwrap_or_else(|e| panic!("failed to save {}: {}", path, e));
        println!("Created: {}", path);
    }

    println!("\nGenerating document-style icons (alternative)...");

    for (name, rgb) in COLORS {
        let img = icon::document_icon(rgb, icon::MENU_BAR_SIZE);
        let path = format!("icon-{}-doc-22.png", name);
        img.save(&path)
            .unwrap_or_else(|e| panic!("failed to save {}: {}", path, e));
        println!("Created: {}", path);
    }

    println!("\nAll icons generated.");
}

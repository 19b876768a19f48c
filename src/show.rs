use crate::theme::ColorMap;

pub fn print_themes(themes: &[String]) {
    println!("Available themes:");
    for theme in themes {
        println!("{theme}");
    }
}

pub fn print_palette(theme: &str, colors: &ColorMap) {
    println!("Theme: {theme} ({} colors)", colors.len());
    println!();

    let label_width = colors.keys().map(String::len).max().unwrap_or(0).max(4);

    println!(
        "{:<width$}  {:<6}  {}",
        "role",
        "swatch",
        "color",
        width = label_width
    );
    println!(
        "{:-<width$}  {:-<6}  {}",
        "",
        "",
        "-----",
        width = label_width
    );

    for (role, color) in colors {
        print!("{:<width$}  ", role, width = label_width);
        print!("{}", swatch(color));
        println!("  {color}");
    }
}

/// A six-cell truecolor block for `#rrggbb` colors, blanks otherwise.
fn swatch(color: &str) -> String {
    if let Some((r, g, b)) = hex_to_rgb(color) {
        let luminance = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0;
        let text = if luminance < 0.5 { 255 } else { 0 };
        return format!("\u{1b}[48;2;{r};{g};{b}m\u{1b}[38;2;{text};{text};{text}m      \u{1b}[0m");
    }
    " ".repeat(6)
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 7 || !hex.starts_with('#') {
        return None;
    }
    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some((r, g, b))
}

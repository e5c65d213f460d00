use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Named colours: CSS name → Color32
// ---------------------------------------------------------------------------

/// Colour used when a configured name is not a known CSS colour.
pub const FALLBACK_COLOR: Color32 = Color32::GRAY;

/// Look up a CSS colour name (`"blue"`, `"red"`, `"darkorange"`, …).
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn resolve_color(name: &str) -> Option<Color32> {
    let key = name.trim().to_ascii_lowercase();
    let rgb: Srgb<u8> = palette::named::from_str(&key)?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Like [`resolve_color`] but never fails; unknown names become gray.
pub fn color_or_fallback(name: &str) -> Color32 {
    resolve_color(name).unwrap_or_else(|| {
        log::warn!("Unknown colour name {name:?}, using gray");
        FALLBACK_COLOR
    })
}

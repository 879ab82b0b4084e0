//! Color utilities
//!
//! Functions for parsing and converting overlay colors.

/// Parse hex color "#RRGGBB" or "#RRGGBBAA" to RGBA floats
///
/// Returns RGBA in the range [0.0, 1.0]. A six-digit color takes
/// `default_alpha`; an eight-digit color carries its own alpha.
/// Falls back to white if the hex string is invalid.
///
/// # Examples
///
/// ```
/// use unpotted_reminder::core::color::parse_hex_color;
///
/// let red = parse_hex_color("#FF0000", 1.0);
/// assert_eq!(red, [1.0, 0.0, 0.0, 1.0]);
///
/// let transparent_green = parse_hex_color("#00FF0000", 1.0);
/// assert_eq!(transparent_green, [0.0, 1.0, 0.0, 0.0]);
/// ```
pub fn parse_hex_color(hex: &str, default_alpha: f32) -> [f32; 4] {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return [1.0, 1.0, 1.0, default_alpha]; // Fallback to white
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(255) as f32 / 255.0
    };
    let alpha = if hex.len() >= 8 {
        channel(6..8)
    } else {
        default_alpha
    };
    [channel(0..2), channel(2..4), channel(4..6), alpha]
}

/// Convert RGBA back to hex "#RRGGBBAA"
pub fn to_hex_color(rgba: [f32; 4]) -> String {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

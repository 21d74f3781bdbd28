use egui::Color32;

use crate::error::PainterError;

// Named colors the palette and callers are expected to use. Anything else goes
// through the hex / rgb() forms.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("lime", Color32::from_rgb(0, 255, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parses a CSS-style color string.
///
/// Accepts named colors, `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` with `a` in `0.0..=1.0`.
pub fn parse_color(input: &str) -> Result<Color32, PainterError> {
    let trimmed = input.trim();
    let invalid = || PainterError::InvalidColor(input.to_owned());

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args).ok_or_else(invalid);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color32> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<u8>().ok();

    match parts.as_slice() {
        [r, g, b] => Some(Color32::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = a.parse::<f32>().ok()?.clamp(0.0, 1.0);
            Some(Color32::from_rgba_unmultiplied(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                (alpha * 255.0).round() as u8,
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_parse() {
        assert_eq!(parse_color("black").unwrap(), Color32::BLACK);
        assert_eq!(parse_color("white").unwrap(), Color32::WHITE);
        assert_eq!(
            parse_color("#e83323").unwrap(),
            Color32::from_rgb(0xe8, 0x33, 0x23)
        );
        assert_eq!(
            parse_color("#2E7FCE").unwrap(),
            Color32::from_rgb(0x2e, 0x7f, 0xce)
        );
    }

    #[test]
    fn test_short_hex_and_rgb_forms() {
        assert_eq!(parse_color("#f00").unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(
            parse_color("rgb(10, 20, 30)").unwrap(),
            Color32::from_rgb(10, 20, 30)
        );
        let translucent = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(translucent.a(), 128);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            parse_color("not-a-color"),
            Err(PainterError::InvalidColor(_))
        ));
        assert!(parse_color("#12").is_err());
        assert!(parse_color("#zzzzzz").is_err());
        assert!(parse_color("").is_err());
    }
}

//! Default 256-color palette offered by the editor UI
//!
//! 216 web-safe colors (each channel one of 00/33/66/99/cc/ff) followed by
//! 40 evenly spaced greys, sorted by their hex string.

use super::color::Color;

pub const PALETTE_SIZE: usize = 256;

const WEB_SAFE_STEPS: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xcc, 0xff];

pub fn default_palette() -> Vec<Color> {
    let mut palette = Vec::with_capacity(PALETTE_SIZE);

    for &r in WEB_SAFE_STEPS.iter() {
        for &g in WEB_SAFE_STEPS.iter() {
            for &b in WEB_SAFE_STEPS.iter() {
                palette.push(Color::rgb(r, g, b));
            }
        }
    }

    let greys = PALETTE_SIZE - palette.len();
    for i in 0..greys {
        let v = ((i as f64 / (greys - 1) as f64) * 255.0).round() as u8;
        palette.push(Color::rgb(v, v, v));
    }

    // Ordering matches a plain string sort of the hex codes. Black and white
    // appear twice (once per group), same as the UI's swatch list.
    palette.sort_by_cached_key(|c| c.to_string());
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_256_sorted_entries() {
        let palette = default_palette();
        assert_eq!(palette.len(), PALETTE_SIZE);

        let names: Vec<String> = palette.iter().map(|c| c.to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        assert_eq!(names.first().map(String::as_str), Some("#000000"));
        assert_eq!(names.last().map(String::as_str), Some("#ffffff"));
    }

    #[test]
    fn palette_contains_web_safe_and_grey_ramp() {
        let palette = default_palette();
        assert!(palette.contains(&Color::rgb(0x33, 0x99, 0xcc)));
        // i = 1 of 40 -> round(255 / 39) = 7
        assert!(palette.contains(&Color::rgb(7, 7, 7)));
        assert_eq!(palette.iter().filter(|c| **c == Color::BLACK).count(), 2);
    }
}

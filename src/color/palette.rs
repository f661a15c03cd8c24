//! Legacy indexed-color palette used by the structured serializer.
//!
//! When a font color matches a palette entry the markup carries the palette
//! index (`<color indexed="..."/>`); otherwise it falls back to the raw ARGB
//! literal (`<color rgb="..."/>`).

use super::Rgb;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Palette lookup used when serializing a font color.
///
/// Injected into the `*_with` serializer variants so hosts with a customized
/// workbook palette can override the built-in table.
pub trait PaletteLookup {
    /// Index of the RGB value in the palette, or `None` when not present.
    fn index_of(&self, rgb: Rgb) -> Option<u8>;

    /// The literal form used when the palette has no match.
    fn to_argb(&self, rgb: Rgb) -> String {
        rgb.to_argb_hex()
    }
}

/// Standard legacy spreadsheet palette, 64 indexed colors.
///
/// Indices 0-7 are the primary colors; 8-15 repeat them as the legacy
/// chart-fill block; 16-63 are the extended set.
const LEGACY_PALETTE: [Rgb; 64] = [
    Rgb::new(0, 0, 0),       // 0  black
    Rgb::new(255, 255, 255), // 1  white
    Rgb::new(255, 0, 0),     // 2  red
    Rgb::new(0, 255, 0),     // 3  green
    Rgb::new(0, 0, 255),     // 4  blue
    Rgb::new(255, 255, 0),   // 5  yellow
    Rgb::new(255, 0, 255),   // 6  magenta
    Rgb::new(0, 255, 255),   // 7  cyan
    Rgb::new(0, 0, 0),       // 8
    Rgb::new(255, 255, 255), // 9
    Rgb::new(255, 0, 0),     // 10
    Rgb::new(0, 255, 0),     // 11
    Rgb::new(0, 0, 255),     // 12
    Rgb::new(255, 255, 0),   // 13
    Rgb::new(255, 0, 255),   // 14
    Rgb::new(0, 255, 255),   // 15
    Rgb::new(128, 0, 0),     // 16 dark red
    Rgb::new(0, 128, 0),     // 17 dark green
    Rgb::new(0, 0, 128),     // 18 dark blue
    Rgb::new(128, 128, 0),   // 19 olive
    Rgb::new(128, 0, 128),   // 20 purple
    Rgb::new(0, 128, 128),   // 21 teal
    Rgb::new(192, 192, 192), // 22 silver
    Rgb::new(128, 128, 128), // 23 gray
    Rgb::new(153, 153, 255), // 24
    Rgb::new(153, 51, 102),  // 25
    Rgb::new(255, 255, 204), // 26
    Rgb::new(204, 255, 255), // 27
    Rgb::new(102, 0, 102),   // 28
    Rgb::new(255, 128, 128), // 29
    Rgb::new(0, 102, 204),   // 30
    Rgb::new(204, 204, 255), // 31
    Rgb::new(0, 0, 128),     // 32
    Rgb::new(255, 0, 255),   // 33
    Rgb::new(255, 255, 0),   // 34
    Rgb::new(0, 255, 255),   // 35
    Rgb::new(128, 0, 128),   // 36
    Rgb::new(128, 0, 0),     // 37
    Rgb::new(0, 128, 128),   // 38
    Rgb::new(0, 0, 255),     // 39
    Rgb::new(0, 204, 255),   // 40
    Rgb::new(204, 255, 255), // 41
    Rgb::new(204, 255, 204), // 42
    Rgb::new(255, 255, 153), // 43
    Rgb::new(153, 204, 255), // 44
    Rgb::new(255, 153, 204), // 45
    Rgb::new(204, 153, 255), // 46
    Rgb::new(255, 204, 153), // 47
    Rgb::new(51, 102, 255),  // 48
    Rgb::new(51, 204, 204),  // 49
    Rgb::new(153, 204, 0),   // 50
    Rgb::new(255, 204, 0),   // 51
    Rgb::new(255, 153, 0),   // 52
    Rgb::new(255, 102, 0),   // 53
    Rgb::new(102, 102, 153), // 54
    Rgb::new(150, 150, 150), // 55
    Rgb::new(0, 51, 102),    // 56
    Rgb::new(51, 153, 102),  // 57
    Rgb::new(0, 51, 0),      // 58
    Rgb::new(51, 51, 0),     // 59
    Rgb::new(153, 51, 0),    // 60
    Rgb::new(153, 51, 51),   // 61
    Rgb::new(51, 51, 153),   // 62
    Rgb::new(51, 51, 51),    // 63
];

// Reverse map built once, thread-safe. Duplicate entries keep the first
// (lowest) index.
static INDEX_BY_RGB: Lazy<HashMap<u32, u8>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(LEGACY_PALETTE.len());
    for (i, rgb) in LEGACY_PALETTE.iter().enumerate() {
        map.entry(rgb.to_u32()).or_insert(i as u8);
    }
    map
});

/// The built-in legacy palette.
///
/// # Examples
///
/// ```rust
/// use fontdesc::color::{LegacyPalette, PaletteLookup, Rgb};
///
/// assert_eq!(LegacyPalette.index_of(Rgb::new(255, 0, 0)), Some(2));
/// assert_eq!(LegacyPalette.index_of(Rgb::new(1, 2, 3)), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyPalette;

impl LegacyPalette {
    /// Palette entry at `index`, or `None` past the end of the table.
    #[inline]
    pub fn get(&self, index: u8) -> Option<Rgb> {
        LEGACY_PALETTE.get(index as usize).copied()
    }
}

impl PaletteLookup for LegacyPalette {
    #[inline]
    fn index_of(&self, rgb: Rgb) -> Option<u8> {
        INDEX_BY_RGB.get(&rgb.to_u32()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_indexed() {
        assert_eq!(LegacyPalette.index_of(Rgb::new(0, 0, 0)), Some(0));
        assert_eq!(LegacyPalette.index_of(Rgb::new(255, 255, 255)), Some(1));
        assert_eq!(LegacyPalette.index_of(Rgb::new(255, 0, 0)), Some(2));
        assert_eq!(LegacyPalette.index_of(Rgb::new(0, 255, 255)), Some(7));
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        // Indices 8-15 repeat 0-7; lookups must resolve to the lower block.
        for i in 8u8..16 {
            let rgb = LegacyPalette.get(i).unwrap();
            assert_eq!(LegacyPalette.index_of(rgb), Some(i - 8));
        }
    }

    #[test]
    fn test_unknown_color_falls_back_to_argb() {
        let rgb = Rgb::new(0x1A, 0x2B, 0x3C);
        assert_eq!(LegacyPalette.index_of(rgb), None);
        assert_eq!(LegacyPalette.to_argb(rgb), "FF1A2B3C");
    }

    #[test]
    fn test_extended_entries() {
        assert_eq!(LegacyPalette.index_of(Rgb::new(192, 192, 192)), Some(22));
        assert_eq!(LegacyPalette.index_of(Rgb::new(51, 51, 51)), Some(63));
        assert_eq!(LegacyPalette.get(64), None);
    }
}

//! Named-color resolution for descriptor color tokens.

use super::Rgb;
use phf::phf_map;

/// Resolves a color name from a descriptor to an RGB value.
///
/// Injected into [`Font::parse_with`](crate::Font::parse_with) so hosts can
/// supply their own naming table; lookups are case-sensitive.
pub trait ColorNameResolver {
    /// Resolve a name to its RGB value, or `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<Rgb>;
}

// The platform default named-color set, in both the lowerCamel and
// UPPER_SNAKE casings the platform exposes. Case-sensitive.
static SYSTEM_COLORS: phf::Map<&'static str, Rgb> = phf_map! {
    "white" => Rgb::new(255, 255, 255),
    "WHITE" => Rgb::new(255, 255, 255),
    "lightGray" => Rgb::new(192, 192, 192),
    "LIGHT_GRAY" => Rgb::new(192, 192, 192),
    "gray" => Rgb::new(128, 128, 128),
    "GRAY" => Rgb::new(128, 128, 128),
    "darkGray" => Rgb::new(64, 64, 64),
    "DARK_GRAY" => Rgb::new(64, 64, 64),
    "black" => Rgb::new(0, 0, 0),
    "BLACK" => Rgb::new(0, 0, 0),
    "red" => Rgb::new(255, 0, 0),
    "RED" => Rgb::new(255, 0, 0),
    "pink" => Rgb::new(255, 175, 175),
    "PINK" => Rgb::new(255, 175, 175),
    "orange" => Rgb::new(255, 200, 0),
    "ORANGE" => Rgb::new(255, 200, 0),
    "yellow" => Rgb::new(255, 255, 0),
    "YELLOW" => Rgb::new(255, 255, 0),
    "green" => Rgb::new(0, 255, 0),
    "GREEN" => Rgb::new(0, 255, 0),
    "magenta" => Rgb::new(255, 0, 255),
    "MAGENTA" => Rgb::new(255, 0, 255),
    "cyan" => Rgb::new(0, 255, 255),
    "CYAN" => Rgb::new(0, 255, 255),
    "blue" => Rgb::new(0, 0, 255),
    "BLUE" => Rgb::new(0, 0, 255),
};

/// The built-in resolver over the platform default named-color set.
///
/// # Examples
///
/// ```rust
/// use fontdesc::color::{ColorNameResolver, Rgb, SystemColors};
///
/// assert_eq!(SystemColors.resolve("red"), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(SystemColors.resolve("Red"), None); // case-sensitive
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColors;

impl ColorNameResolver for SystemColors {
    #[inline]
    fn resolve(&self, name: &str) -> Option<Rgb> {
        SYSTEM_COLORS.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_names() {
        assert_eq!(SystemColors.resolve("red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(SystemColors.resolve("pink"), Some(Rgb::new(255, 175, 175)));
        assert_eq!(SystemColors.resolve("orange"), Some(Rgb::new(255, 200, 0)));
    }

    #[test]
    fn test_both_casings_match_same_value() {
        for (lower, upper) in [
            ("lightGray", "LIGHT_GRAY"),
            ("darkGray", "DARK_GRAY"),
            ("red", "RED"),
            ("blue", "BLUE"),
        ] {
            assert_eq!(SystemColors.resolve(lower), SystemColors.resolve(upper));
        }
    }

    #[test]
    fn test_mixed_case_rejected() {
        assert_eq!(SystemColors.resolve("Red"), None);
        assert_eq!(SystemColors.resolve("light_gray"), None);
        assert_eq!(SystemColors.resolve(""), None);
    }
}

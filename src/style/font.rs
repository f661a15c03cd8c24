//! The canonical font style record.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::style::FontFlags;
use std::hash::{Hash, Hasher};

/// Font family classification values for [`Font::family`].
pub mod family {
    /// No classification
    pub const NOT_APPLICABLE: u8 = 0;
    /// Serif (e.g. Times New Roman)
    pub const ROMAN: u8 = 1;
    /// Sans-serif (e.g. Arial)
    pub const SWISS: u8 = 2;
    /// Fixed-pitch (e.g. Courier New)
    pub const MODERN: u8 = 3;
    /// Handwriting
    pub const SCRIPT: u8 = 4;
    /// Novelty
    pub const DECORATIVE: u8 = 5;
}

/// Canonical font style record.
///
/// Built from a descriptor string via [`Font::parse`] or programmatically via
/// [`Font::builder`], then serialized with
/// [`to_markup`](Font::to_markup)/[`to_xml`](Font::to_xml). Intended to be
/// immutable once built so registries can cache and deduplicate it; the fields
/// stay public for incremental construction, and both serializers re-check the
/// size/name invariants before emitting anything.
///
/// Equality and hashing cover family, flags, size, color, and name only —
/// charset and scheme are excluded, so two fonts differing only there collapse
/// to one registry entry. Pinned by tests; flagged for product-owner review.
///
/// # Examples
///
/// ```rust
/// use fontdesc::{Font, FontFlags};
///
/// let font = Font::parse("bold_12_'Times New Roman'_red")?;
/// assert_eq!(font.size, 12);
/// assert_eq!(font.name, "Times New Roman");
/// assert_eq!(font.flags, FontFlags::BOLD);
/// # Ok::<(), fontdesc::Error>(())
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Font {
    /// Font size in points, always > 0 once construction succeeds
    pub size: u32,
    /// Family name, never empty once construction succeeds
    pub name: String,
    /// Font color; `None` means unset
    pub color: Option<Rgb>,
    /// Decoration flags
    pub flags: FontFlags,
    /// Family classification (see [`family`]); 0 means unset
    pub family: u8,
    /// Character set; 0 means unset
    pub charset: u32,
    /// Theme scheme tag ("major"/"minor"); empty means unset
    pub scheme: String,
}

impl Font {
    /// Create a plain font with the given family name and size in points.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            size,
            name: name.into(),
            color: None,
            flags: FontFlags::empty(),
            family: family::NOT_APPLICABLE,
            charset: 0,
            scheme: String::new(),
        }
    }

    /// Start building a font with the given family name and size.
    pub fn builder(name: impl Into<String>, size: u32) -> FontBuilder {
        FontBuilder {
            font: Font::new(name, size),
        }
    }

    /// Check if the bold flag is set.
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.flags.contains(FontFlags::BOLD)
    }

    /// Check if the italic flag is set.
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.flags.contains(FontFlags::ITALIC)
    }

    /// Check if the underline flag is set.
    #[inline]
    pub fn is_underline(&self) -> bool {
        self.flags.contains(FontFlags::UNDERLINE)
    }

    /// Verify the construction invariants before serialization.
    ///
    /// The parser and builder enforce these; direct field mutation can break
    /// them, and the serializers fail fast here instead of emitting malformed
    /// markup.
    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidStyleState("size must be greater than zero"));
        }
        if self.name.is_empty() {
            return Err(Error::InvalidStyleState("family name must not be empty"));
        }
        Ok(())
    }
}

// Charset and scheme are deliberately left out; see the type docs.
impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.flags == other.flags
            && self.size == other.size
            && self.color == other.color
            && self.name == other.name
    }
}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.flags.hash(state);
        self.size.hash(state);
        self.color.hash(state);
        self.name.hash(state);
    }
}

/// Builder for [`Font`].
///
/// Replaces fluent mutation on the finished record: optional attributes are
/// set here and [`build`](FontBuilder::build) validates the invariants, so a
/// successfully built `Font` can be shared and deduplicated safely.
///
/// # Examples
///
/// ```rust
/// use fontdesc::{color::Rgb, font_family, Font};
///
/// let font = Font::builder("Arial", 11)
///     .bold()
///     .color(Rgb::new(255, 0, 0))
///     .family(font_family::SWISS)
///     .build()?;
/// assert!(font.is_bold());
/// # Ok::<(), fontdesc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FontBuilder {
    font: Font,
}

impl FontBuilder {
    /// Set the font color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Replace the whole flag set.
    pub fn flags(mut self, flags: FontFlags) -> Self {
        self.font.flags = flags;
        self
    }

    /// Set the bold flag.
    pub fn bold(mut self) -> Self {
        self.font.flags |= FontFlags::BOLD;
        self
    }

    /// Set the italic flag.
    pub fn italic(mut self) -> Self {
        self.font.flags |= FontFlags::ITALIC;
        self
    }

    /// Set the underline flag.
    pub fn underline(mut self) -> Self {
        self.font.flags |= FontFlags::UNDERLINE;
        self
    }

    /// Set the family classification (see [`family`]).
    pub fn family(mut self, family: u8) -> Self {
        self.font.family = family;
        self
    }

    /// Set the character set.
    pub fn charset(mut self, charset: u32) -> Self {
        self.font.charset = charset;
        self
    }

    /// Set the theme scheme tag.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.font.scheme = scheme.into();
        self
    }

    /// Validate the invariants and return the finished font.
    ///
    /// Fails with [`Error::InvalidStyleState`] if the size is zero or the
    /// family name is empty.
    pub fn build(self) -> Result<Font> {
        self.font.ensure_valid()?;
        Ok(self.font)
    }
}

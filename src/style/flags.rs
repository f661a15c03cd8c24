//! Font decoration flags and the descriptor keyword table.

use bitflags::bitflags;
use phf::phf_map;

bitflags! {
    /// Decoration/weight/slant axes packed into a bitmask.
    ///
    /// The axes are orthogonal; combining flags is a bitwise OR and repeating
    /// a flag is idempotent. An empty set means normal text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontFlags: u8 {
        /// Underline decoration
        const UNDERLINE = 1;
        /// Bold weight
        const BOLD = 1 << 1;
        /// Italic slant
        const ITALIC = 1 << 2;
    }
}

// Keyword table for descriptor style tokens. Case-sensitive; both the
// lower-camel and upper-snake spellings are accepted, nothing else.
// `normal` maps to the empty set so ORing it in is a no-op.
static STYLE_KEYWORDS: phf::Map<&'static str, FontFlags> = phf_map! {
    "normal" => FontFlags::empty(),
    "NORMAL" => FontFlags::empty(),
    "italic" => FontFlags::ITALIC,
    "ITALIC" => FontFlags::ITALIC,
    "bold" => FontFlags::BOLD,
    "BOLD" => FontFlags::BOLD,
    "underLine" => FontFlags::UNDERLINE,
    "UNDERLINE" => FontFlags::UNDERLINE,
};

impl FontFlags {
    /// Look up a descriptor style keyword.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fontdesc::FontFlags;
    ///
    /// assert_eq!(FontFlags::from_keyword("bold"), Some(FontFlags::BOLD));
    /// assert_eq!(FontFlags::from_keyword("Bold"), None);
    /// ```
    #[inline]
    pub fn from_keyword(keyword: &str) -> Option<FontFlags> {
        STYLE_KEYWORDS.get(keyword).copied()
    }
}

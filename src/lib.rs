//! Fontdesc - bidirectional conversion between compact font descriptor
//! strings and OOXML-style `<font>` markup.
//!
//! A descriptor packs a spreadsheet font style into one string:
//! `[flags...] size family [color]`, delimited by `_` or by spaces, with
//! single quotes around family names containing spaces. Parsing produces a
//! canonical [`Font`] record; the record serializes deterministically into
//! either a plain indented `<font>` text block or a structured element stream
//! appended to a caller-owned [`quick_xml::Writer`], both with the same fixed
//! attribute ordering.
//!
//! # Example - parsing a descriptor
//!
//! ```
//! use fontdesc::{color::Rgb, Font, FontFlags};
//!
//! let font = Font::parse("bold_12_'Times New Roman'_red")?;
//! assert_eq!(font.size, 12);
//! assert_eq!(font.name, "Times New Roman");
//! assert_eq!(font.flags, FontFlags::BOLD);
//! assert_eq!(font.color, Some(Rgb::new(255, 0, 0)));
//! # Ok::<(), fontdesc::Error>(())
//! ```
//!
//! # Example - serializing to markup
//!
//! ```
//! use fontdesc::Font;
//!
//! let xml = Font::parse("italic_bold_12_Arial")?.to_xml_string()?;
//! assert_eq!(
//!     xml,
//!     "<font><sz val=\"12\"/><name val=\"Arial\"/><b/><i/></font>"
//! );
//! # Ok::<(), fontdesc::Error>(())
//! ```
//!
//! # Thread safety
//!
//! Parsing and serialization are pure functions over read-only static lookup
//! tables; [`Font`] is a plain value type. Calls from multiple threads need
//! no synchronization.

pub mod color;
pub mod error;
pub mod style;

pub use color::{ColorNameResolver, LegacyPalette, PaletteLookup, Rgb, SystemColors};
pub use error::{Error, Result};
pub use style::font::family as font_family;
pub use style::{Font, FontBuilder, FontFlags, LINE_SEPARATOR};

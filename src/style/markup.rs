//! Font markup serialization.
//!
//! Two output paths with one shared emission order: a plain indented
//! `<font>` text block for debugging and logs, and a structured event stream
//! appended to a caller-owned [`quick_xml::Writer`]. The order is fixed: sz,
//! color, name, u, b, i, family, charset, scheme. Optional attributes are
//! omitted when unset; the three flag markers are independent per-bit checks,
//! so all eight flag combinations serialize.

use crate::color::{LegacyPalette, PaletteLookup};
use crate::error::{Error, Result};
use crate::style::{Font, FontFlags};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io;

/// Platform line separator used by the plain-text form.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line separator used by the plain-text form.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

impl Font {
    /// Render the plain-text `<font>` block using the built-in
    /// [`LegacyPalette`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fontdesc::Font;
    ///
    /// let markup = Font::parse("bold_12_Arial")?.to_markup()?;
    /// assert!(markup.starts_with("<font>"));
    /// assert!(markup.contains("<sz val=\"12\"/>"));
    /// # Ok::<(), fontdesc::Error>(())
    /// ```
    pub fn to_markup(&self) -> Result<String> {
        self.to_markup_with(&LegacyPalette)
    }

    /// Render the plain-text `<font>` block, resolving palette indices
    /// through the given lookup.
    ///
    /// One indented child line per attribute, terminated by the platform
    /// [`LINE_SEPARATOR`]. Fails with [`Error::InvalidStyleState`] when the
    /// record violates its size/name invariants.
    pub fn to_markup_with(&self, palette: &impl PaletteLookup) -> Result<String> {
        self.ensure_valid()?;

        let mut buf = String::with_capacity(128);
        buf.push_str("<font>");
        buf.push_str(LINE_SEPARATOR);
        buf.push_str(&format!("    <sz val=\"{}\"/>{}", self.size, LINE_SEPARATOR));
        if let Some(rgb) = self.color {
            match palette.index_of(rgb) {
                Some(index) => {
                    buf.push_str(&format!(
                        "    <color indexed=\"{index}\"/>{LINE_SEPARATOR}"
                    ));
                }
                None => {
                    buf.push_str(&format!(
                        "    <color rgb=\"{}\"/>{}",
                        palette.to_argb(rgb),
                        LINE_SEPARATOR
                    ));
                }
            }
        }
        buf.push_str(&format!(
            "    <name val=\"{}\"/>{}",
            self.name, LINE_SEPARATOR
        ));
        if self.flags.contains(FontFlags::UNDERLINE) {
            buf.push_str("    <u/>");
            buf.push_str(LINE_SEPARATOR);
        }
        if self.flags.contains(FontFlags::BOLD) {
            buf.push_str("    <b/>");
            buf.push_str(LINE_SEPARATOR);
        }
        if self.flags.contains(FontFlags::ITALIC) {
            buf.push_str("    <i/>");
            buf.push_str(LINE_SEPARATOR);
        }
        if self.family > 0 {
            buf.push_str(&format!(
                "    <family val=\"{}\"/>{}",
                self.family, LINE_SEPARATOR
            ));
        }
        if self.charset > 0 {
            buf.push_str(&format!(
                "    <charset val=\"{}\"/>{}",
                self.charset, LINE_SEPARATOR
            ));
        }
        if !self.scheme.is_empty() {
            buf.push_str(&format!(
                "    <scheme val=\"{}\"/>{}",
                self.scheme, LINE_SEPARATOR
            ));
        }
        buf.push_str("</font>");
        Ok(buf)
    }

    /// Append a `<font>` element to the caller-owned writer using the
    /// built-in [`LegacyPalette`].
    pub fn to_xml<W: io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        self.to_xml_with(writer, &LegacyPalette)
    }

    /// Append a `<font>` element to the caller-owned writer, resolving
    /// palette indices through the given lookup.
    ///
    /// Attribute values are escaped by the writer. Fails with
    /// [`Error::InvalidStyleState`] when the record violates its size/name
    /// invariants; nothing is written in that case.
    pub fn to_xml_with<W: io::Write>(
        &self,
        writer: &mut Writer<W>,
        palette: &impl PaletteLookup,
    ) -> Result<()> {
        self.ensure_valid()?;

        let mut itoa = itoa::Buffer::new();
        writer.write_event(Event::Start(BytesStart::new("font")))?;

        let mut sz = BytesStart::new("sz");
        sz.push_attribute(("val", itoa.format(self.size)));
        writer.write_event(Event::Empty(sz))?;

        if let Some(rgb) = self.color {
            let argb;
            let mut color = BytesStart::new("color");
            match palette.index_of(rgb) {
                Some(index) => color.push_attribute(("indexed", itoa.format(index))),
                None => {
                    argb = palette.to_argb(rgb);
                    color.push_attribute(("rgb", argb.as_str()));
                }
            }
            writer.write_event(Event::Empty(color))?;
        }

        let mut name = BytesStart::new("name");
        name.push_attribute(("val", self.name.as_str()));
        writer.write_event(Event::Empty(name))?;

        if self.flags.contains(FontFlags::UNDERLINE) {
            writer.write_event(Event::Empty(BytesStart::new("u")))?;
        }
        if self.flags.contains(FontFlags::BOLD) {
            writer.write_event(Event::Empty(BytesStart::new("b")))?;
        }
        if self.flags.contains(FontFlags::ITALIC) {
            writer.write_event(Event::Empty(BytesStart::new("i")))?;
        }

        if self.family > 0 {
            let mut family = BytesStart::new("family");
            family.push_attribute(("val", itoa.format(self.family)));
            writer.write_event(Event::Empty(family))?;
        }
        if self.charset > 0 {
            let mut charset = BytesStart::new("charset");
            charset.push_attribute(("val", itoa.format(self.charset)));
            writer.write_event(Event::Empty(charset))?;
        }
        if !self.scheme.is_empty() {
            let mut scheme = BytesStart::new("scheme");
            scheme.push_attribute(("val", self.scheme.as_str()));
            writer.write_event(Event::Empty(scheme))?;
        }

        writer.write_event(Event::End(BytesEnd::new("font")))?;
        Ok(())
    }

    /// Render the structured form into a standalone string.
    ///
    /// Convenience over [`to_xml`](Font::to_xml) with an in-memory writer.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.to_xml(&mut writer)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

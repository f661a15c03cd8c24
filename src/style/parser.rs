//! Descriptor string tokenizer and parser.
//!
//! Grammar: `[flags...] size family [color]`, delimited by `_` throughout or
//! by single spaces throughout (mixed delimiters are not supported). Family
//! names containing spaces are single-quoted. Examples:
//!
//! - `italic_bold_12_Arial`
//! - `bold underLine 12 'Times New Roman' red`
//! - `12_Arial_#1A2B3C`
//!
//! The size/family pair is positionally locked: the token after a
//! successfully parsed positive integer is always consumed as the family
//! name, never reinterpreted. Tokens before the size are style keywords;
//! tokens after the family are color tokens.

use crate::color::{ColorNameResolver, Rgb, SystemColors};
use crate::error::{Error, Result};
use crate::style::{Font, FontFlags};
use memchr::memchr;
use std::borrow::Cow;

// Stand-in for spaces inside quoted segments so the family name survives
// token splitting as one token.
const SENTINEL: char = '+';

impl Font {
    /// Parse a font descriptor string using the built-in
    /// [`SystemColors`] name resolver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fontdesc::{color::Rgb, Font, FontFlags};
    ///
    /// let font = Font::parse("12_Arial_#1A2B3C")?;
    /// assert_eq!(font.size, 12);
    /// assert_eq!(font.name, "Arial");
    /// assert_eq!(font.color, Some(Rgb::new(0x1A, 0x2B, 0x3C)));
    /// # Ok::<(), fontdesc::Error>(())
    /// ```
    pub fn parse(descriptor: &str) -> Result<Font> {
        Self::parse_with(descriptor, &SystemColors)
    }

    /// Parse a font descriptor string, resolving named colors through the
    /// given resolver.
    ///
    /// A descriptor that never reaches a size/family pair fails with
    /// [`Error::MissingFamily`].
    pub fn parse_with(descriptor: &str, resolver: &impl ColorNameResolver) -> Result<Font> {
        let s = descriptor.trim();
        if s.is_empty() {
            return Err(Error::EmptyDescriptor);
        }
        let s = normalize_quotes(s)?;

        // Underscore-delimited descriptors take precedence; otherwise split
        // on single spaces.
        let tokens: Vec<&str> = if s.contains('_') {
            s.split('_').collect()
        } else {
            s.split(' ').collect()
        };

        let mut font = Font::new("", 0);
        let mut before_size = true;
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].trim();
            if before_size {
                match token.parse::<i32>() {
                    Ok(size) if size > 0 => {
                        font.size = size as u32;
                        i += 1;
                        match tokens.get(i) {
                            Some(name) => {
                                font.name = name.trim().replace(SENTINEL, " ");
                            }
                            None => return Err(Error::MissingFamily),
                        }
                        // A doubled or trailing delimiter yields an empty
                        // token; the family name must be non-empty.
                        if font.name.is_empty() {
                            return Err(Error::MissingFamily);
                        }
                        before_size = false;
                    }
                    Ok(size) => return Err(Error::InvalidSize(size as i64)),
                    Err(_) => {
                        let keyword = normalize_keyword(token);
                        match FontFlags::from_keyword(&keyword) {
                            Some(bits) => font.flags |= bits,
                            None => {
                                return Err(Error::UnknownStyleKeyword(keyword.into_owned()));
                            }
                        }
                    }
                }
            } else if token.starts_with('#') {
                font.color = Some(parse_hex_literal(token)?);
            } else {
                let rgb = resolver
                    .resolve(token)
                    .ok_or_else(|| Error::UnknownColorName(token.to_owned()))?;
                font.color = Some(rgb);
            }
            i += 1;
        }

        if before_size {
            return Err(Error::MissingFamily);
        }
        Ok(font)
    }
}

/// Replace spaces inside single-quoted segments with the sentinel and strip
/// the quotes. Supports multiple quoted segments; an unmatched opening quote
/// fails with [`Error::UnterminatedQuote`].
fn normalize_quotes(s: &str) -> Result<Cow<'_, str>> {
    let bytes = s.as_bytes();
    let Some(first) = memchr(b'\'', bytes) else {
        return Ok(Cow::Borrowed(s));
    };

    let mut out = String::with_capacity(s.len());
    let mut open = first;
    let mut start = 0;
    loop {
        out.push_str(&s[start..open]);
        let close = match memchr(b'\'', &bytes[open + 1..]) {
            Some(offset) => open + 1 + offset,
            None => return Err(Error::UnterminatedQuote),
        };
        for ch in s[open + 1..close].chars() {
            out.push(if ch == ' ' { SENTINEL } else { ch });
        }
        start = close + 1;
        match memchr(b'\'', &bytes[start..]) {
            Some(offset) => open = start + offset,
            None => {
                out.push_str(&s[start..]);
                return Ok(Cow::Owned(out));
            }
        }
    }
}

/// Normalize a keyword token that was originally a quoted multi-word phrase:
/// drop the first interior sentinel and capitalize the ASCII letter after it,
/// so `'under line'` matches `underLine`.
fn normalize_keyword(token: &str) -> Cow<'_, str> {
    match token.find(SENTINEL) {
        Some(n) if n > 0 => {
            let mut out = String::with_capacity(token.len() - 1);
            out.push_str(&token[..n]);
            let rest = &token[n + 1..];
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(token),
    }
}

/// Parse a `#`-prefixed hex RGB literal of 1-6 hex digits.
fn parse_hex_literal(token: &str) -> Result<Rgb> {
    let digits = &token[1..];
    if digits.is_empty()
        || digits.len() > 6
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(Error::InvalidColorLiteral(token.to_owned()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| Error::InvalidColorLiteral(token.to_owned()))?;
    Ok(Rgb::from_u32(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_size_and_family() {
        let font = Font::parse("12_Arial").unwrap();
        assert_eq!(font.size, 12);
        assert_eq!(font.name, "Arial");
        assert_eq!(font.flags, FontFlags::empty());
        assert_eq!(font.color, None);
    }

    #[test]
    fn test_quoted_family_with_spaces() {
        let font = Font::parse("bold_12_'Times New Roman'_red").unwrap();
        assert_eq!(font.size, 12);
        assert_eq!(font.name, "Times New Roman");
        assert_eq!(font.flags, FontFlags::BOLD);
        assert_eq!(font.color, Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_space_delimited() {
        let font = Font::parse("bold underLine 12 'Times New Roman' red").unwrap();
        assert_eq!(font.size, 12);
        assert_eq!(font.name, "Times New Roman");
        assert_eq!(font.flags, FontFlags::BOLD | FontFlags::UNDERLINE);
        assert_eq!(font.color, Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_hex_color_literal() {
        let font = Font::parse("12_Arial_#1A2B3C").unwrap();
        assert_eq!(font.color, Some(Rgb::new(0x1A, 0x2B, 0x3C)));
        // Short literals follow integer-decode semantics
        let font = Font::parse("12_Arial_#FF").unwrap();
        assert_eq!(font.color, Some(Rgb::new(0, 0, 0xFF)));
    }

    #[test]
    fn test_flag_order_is_commutative() {
        let expected = FontFlags::ITALIC | FontFlags::BOLD | FontFlags::UNDERLINE;
        for descriptor in [
            "italic_bold_underLine_12_Arial",
            "italic_underLine_bold_12_Arial",
            "bold_italic_underLine_12_Arial",
            "bold_underLine_italic_12_Arial",
            "underLine_italic_bold_12_Arial",
            "underLine_bold_italic_12_Arial",
        ] {
            let font = Font::parse(descriptor).unwrap();
            assert_eq!(font.flags, expected, "descriptor {descriptor:?}");
        }
    }

    #[test]
    fn test_repeated_flag_is_idempotent() {
        let font = Font::parse("bold_bold_12_Arial").unwrap();
        assert_eq!(font.flags, FontFlags::BOLD);
    }

    #[test]
    fn test_normal_keyword_is_noop() {
        let font = Font::parse("normal_12_Arial").unwrap();
        assert_eq!(font.flags, FontFlags::empty());
    }

    #[test]
    fn test_quoted_flag_phrase() {
        let font = Font::parse("'under line'_12_Arial").unwrap();
        assert_eq!(font.flags, FontFlags::UNDERLINE);
    }

    #[test]
    fn test_empty_descriptor() {
        assert!(matches!(Font::parse(""), Err(Error::EmptyDescriptor)));
        assert!(matches!(Font::parse("   "), Err(Error::EmptyDescriptor)));
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            Font::parse("12_'Times New Roman"),
            Err(Error::UnterminatedQuote)
        ));
    }

    #[test]
    fn test_zero_or_negative_size() {
        assert!(matches!(Font::parse("0_Arial"), Err(Error::InvalidSize(0))));
        assert!(matches!(
            Font::parse("-3_Arial"),
            Err(Error::InvalidSize(-3))
        ));
    }

    #[test]
    fn test_missing_family_after_size() {
        assert!(matches!(Font::parse("12"), Err(Error::MissingFamily)));
        assert!(matches!(Font::parse("bold_12"), Err(Error::MissingFamily)));
    }

    #[test]
    fn test_empty_family_token_rejected() {
        // Trailing or doubled delimiters must not yield an empty family name.
        assert!(matches!(Font::parse("bold_12_"), Err(Error::MissingFamily)));
        assert!(matches!(Font::parse("12__red"), Err(Error::MissingFamily)));
        assert!(matches!(Font::parse("12 "), Err(Error::MissingFamily)));
    }

    #[test]
    fn test_family_before_size_fails() {
        // Size-then-family order is mandatory; a leading family name is
        // mistaken for a style keyword.
        assert!(Font::parse("'Times New Roman'_12").is_err());
    }

    #[test]
    fn test_unknown_keyword_named_in_error() {
        match Font::parse("strike_12_Arial") {
            Err(Error::UnknownStyleKeyword(token)) => assert_eq!(token, "strike"),
            other => panic!("expected UnknownStyleKeyword, got {other:?}"),
        }
        // Keywords are case-sensitive
        assert!(matches!(
            Font::parse("Bold_12_Arial"),
            Err(Error::UnknownStyleKeyword(_))
        ));
    }

    #[test]
    fn test_bad_color_tokens() {
        assert!(matches!(
            Font::parse("12_Arial_#XYZ"),
            Err(Error::InvalidColorLiteral(_))
        ));
        assert!(matches!(
            Font::parse("12_Arial_#1234567"),
            Err(Error::InvalidColorLiteral(_))
        ));
        // Sign prefixes are not hex digits
        assert!(matches!(
            Font::parse("12_Arial_#+1A"),
            Err(Error::InvalidColorLiteral(_))
        ));
        assert!(matches!(
            Font::parse("12_Arial_#-1A"),
            Err(Error::InvalidColorLiteral(_))
        ));
        match Font::parse("12_Arial_crimson") {
            Err(Error::UnknownColorName(name)) => assert_eq!(name, "crimson"),
            other => panic!("expected UnknownColorName, got {other:?}"),
        }
    }

    #[test]
    fn test_last_color_token_wins() {
        let font = Font::parse("12_Arial_red_blue").unwrap();
        assert_eq!(font.color, Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_token_after_size_never_reinterpreted() {
        // "bold" after the size is the family name, not a flag.
        let font = Font::parse("12_bold").unwrap();
        assert_eq!(font.name, "bold");
        assert_eq!(font.flags, FontFlags::empty());
    }

    #[test]
    fn test_multiple_quoted_segments() {
        let font = Font::parse("'under line'_12_'MS Gothic'").unwrap();
        assert_eq!(font.flags, FontFlags::UNDERLINE);
        assert_eq!(font.name, "MS Gothic");
    }

    struct NoColors;
    impl ColorNameResolver for NoColors {
        fn resolve(&self, _name: &str) -> Option<Rgb> {
            None
        }
    }

    #[test]
    fn test_injected_resolver() {
        assert!(matches!(
            Font::parse_with("12_Arial_red", &NoColors),
            Err(Error::UnknownColorName(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_size_then_family(n in 1u32..=10_000, name in "[A-Za-z]{1,24}") {
            let font = Font::parse(&format!("{n}_{name}")).unwrap();
            prop_assert_eq!(font.size, n);
            prop_assert_eq!(font.name, name);
        }

        #[test]
        fn prop_hex_literal(value in 0u32..=0xFF_FFFF) {
            let font = Font::parse(&format!("12_Arial_#{value:06X}")).unwrap();
            prop_assert_eq!(font.color, Some(Rgb::from_u32(value)));
        }
    }
}

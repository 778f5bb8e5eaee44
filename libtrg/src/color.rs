use image::Rgba;
use nom::{
    bytes::complete::take_while_m_n,
    combinator::{eof, map_res},
    multi::count,
    sequence::terminated,
    IResult,
};
use strum::{Display, EnumString, IntoStaticStr};

/// Fully transparent black, the default background color
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The encodings a document may declare for its color literals
#[derive(EnumString, IntoStaticStr, Display, Debug, Default, Eq, PartialEq, Copy, Clone)]
pub enum ColorFormat {
    /// Eight hex digits, two per channel in R, G, B, A order
    #[default]
    #[strum(serialize = "hex-rgba")]
    HexRgba,
}

impl ColorFormat {
    /// The literal used for this format in the `color-format` property
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Into::<&'static str>::into(self)
    }
}

fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16)
    })(input)
}

/// Nom parser for an eight digit hex-rgba literal
pub(crate) fn hex_rgba(input: &str) -> IResult<&str, Rgba<u8>> {
    let (input, channels) = count(hex_channel, 4)(input)?;
    Ok((input, Rgba([channels[0], channels[1], channels[2], channels[3]])))
}

/// Parses an eight digit hex-rgba literal such as `ff8000c0`
///
/// Both upper and lower case digits are accepted. Returns [`None`] if `value` is not exactly
/// eight hex digits.
#[must_use]
pub fn parse_hex_rgba(value: &str) -> Option<Rgba<u8>> {
    terminated(hex_rgba, eof)(value).ok().map(|(_, rgba)| rgba)
}

/// Formats a color as a lowercase eight digit hex-rgba literal
#[must_use]
pub fn format_hex_rgba(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    format!("{r:02x}{g:02x}{b:02x}{a:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_mixed_case_literals() {
        assert_eq!(parse_hex_rgba("ff8000C0"), Some(Rgba([0xff, 0x80, 0x00, 0xc0])));
        assert_eq!(parse_hex_rgba("00000000"), Some(TRANSPARENT));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(parse_hex_rgba("ff8000"), None);
        assert_eq!(parse_hex_rgba("ff8000c0aa"), None);
        assert_eq!(parse_hex_rgba("gg8000c0"), None);
        assert_eq!(parse_hex_rgba("+f8000c0"), None);
        assert_eq!(parse_hex_rgba(""), None);
    }

    #[test]
    fn formats_lowercase_with_padding() {
        assert_eq!(format_hex_rgba(Rgba([1, 0xab, 0, 255])), "01ab00ff");
    }

    #[test]
    fn color_format_literal() {
        assert_eq!(ColorFormat::from_str("hex-rgba"), Ok(ColorFormat::HexRgba));
        assert!(ColorFormat::from_str("hex-rgb").is_err());
        assert_eq!(ColorFormat::HexRgba.as_str(), "hex-rgba");
        assert_eq!(ColorFormat::HexRgba.to_string(), "hex-rgba");
    }
}

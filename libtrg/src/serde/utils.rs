use std::str::FromStr;

use image::Rgba;
use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::{anychar, char, space0, space1},
    combinator::{eof, map_res, rest},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::{color::hex_rgba, FENCE};

use super::section::Section;

/// Runs `f` over a whole line, discarding the remaining input
pub(super) fn parse_line<'a, NomFunc, T>(f: NomFunc, input: &'a str) -> Option<T>
where
    NomFunc: FnOnce(&'a str) -> IResult<&'a str, T>,
{
    f(input).ok().map(|(_, value)| value)
}

/// `# <title>`
pub fn parse_title(input: &str) -> IResult<&str, &str> {
    let (input, title) = preceded(pair(char('#'), space1), rest)(input)?;
    Ok((input, title.trim_end()))
}

/// `## <section>`
pub fn parse_heading(input: &str) -> IResult<&str, Section> {
    preceded(
        tag("## "),
        map_res(rest, |name: &str| Section::from_str(name.trim_end())),
    )(input)
}

/// `- <key>: <value>`
///
/// The key runs up to the first colon. Both key and value are trimmed.
pub fn parse_property_entry(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = tuple((space0, char('-'), space1))(input)?;
    let (input, key) = terminated(take_till1(|c| c == ':'), char(':'))(input)?;
    let (input, value) = rest(input)?;
    Ok((input, (key.trim(), value.trim())))
}

/// `- <char>: <hex8>`
///
/// Exactly one character sits between the dash-space and the colon, so space and colon are
/// themselves valid keys.
pub fn parse_palette_entry(input: &str) -> IResult<&str, (char, Rgba<u8>)> {
    let (input, _) = pair(space0, tag("- "))(input)?;
    let (input, key) = terminated(anychar, char(':'))(input)?;
    let (input, color) = terminated(delimited(space0, hex_rgba, space0), eof)(input)?;
    Ok((input, (key, color)))
}

pub fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

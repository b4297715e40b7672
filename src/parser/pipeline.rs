// Pipeline parser for plot options

use super::lexer::{integer_literal, number_literal, string_literal, ws};
use crate::setting::{caption, height, lower, offset, upper, width, PlotOption};
use anyhow::{anyhow, Result};
use log::debug;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{eof, map, opt},
    multi::separated_list0,
    sequence::{delimited, preceded},
    IResult,
};

/// `name(arg)` with whitespace allowed around every token
fn call<'a, O, F>(name: &'static str, arg: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    preceded(
        ws(tag(name)),
        delimited(ws(char('(')), ws(arg), ws(char(')'))),
    )
}

/// Parse a single option
/// Format: width(INT) | height(INT) | lower(NUM) | upper(NUM) | offset(INT) | caption("TEXT")
pub fn parse_option(input: &str) -> IResult<&str, PlotOption> {
    alt((
        map(call("width", integer_literal), width),
        map(call("height", integer_literal), height),
        map(call("lower", number_literal), lower),
        map(call("upper", number_literal), upper),
        map(call("offset", integer_literal), offset),
        map(call("caption", string_literal), caption),
    ))(input)
}

/// Parse a complete pipeline
/// Format: option | option | ...
pub fn parse_pipeline(input: &str) -> IResult<&str, Vec<PlotOption>> {
    // If input starts with "|", consume it
    let (input, _) = opt(ws(tag("|")))(input)?;

    let (input, options) = separated_list0(ws(tag("|")), parse_option)(input)?;

    // Consume trailing whitespace and ensure end of input
    let (input, _) = ws(eof)(input)?;

    Ok((input, options))
}

/// Parse a pipeline string into options, rejecting any unparsed input
pub fn parse_options(input: &str) -> Result<Vec<PlotOption>> {
    match parse_pipeline(input) {
        Ok((_, options)) => {
            for option in &options {
                debug!("parsed {} option: {:?}", option.field(), option);
            }
            Ok(options)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(anyhow!(
            "Invalid option pipeline near '{}'",
            e.input.trim()
        )),
        Err(nom::Err::Incomplete(_)) => Err(anyhow!("Incomplete option pipeline")),
    }
}

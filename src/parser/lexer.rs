// Token-level parsers shared by the pipeline grammar

use nom::{
    bytes::complete::take_while,
    character::complete::{char, multispace0},
    combinator::map,
    number::complete::double,
    sequence::delimited,
    IResult,
};

/// Wrap a parser so surrounding whitespace is ignored
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Double-quoted text. Quotes cannot be escaped.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        |s: &str| s.to_string(),
    )(input)
}

/// Signed real number, exponent allowed
pub fn number_literal(input: &str) -> IResult<&str, f64> {
    double(input)
}

/// Signed integer
pub fn integer_literal(input: &str) -> IResult<&str, i64> {
    nom::character::complete::i64(input)
}

use std::num::ParseIntError;

use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use nom::{IResult, Parser};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Calories(u64),
    Delimiter,
}

// Only plain ASCII digits count: no sign, no decimal point, nothing trailing.
fn digits_only(input: &str) -> IResult<&str, &str> {
    all_consuming(digit1).parse(input)
}

/// Classifies one input line after trimming surrounding whitespace.
///
/// Anything that is not entirely decimal digits is a delimiter, including
/// blank lines and negative numbers. The only error is a digit-only line too
/// large for a `u64`.
pub fn classify_line(input: &str) -> Result<Line, ParseIntError> {
    match digits_only(input.trim()) {
        Ok((_, digits)) => digits.parse().map(Line::Calories),
        Err(_) => Ok(Line::Delimiter),
    }
}

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::error::ContextError;
use winnow::token::one_of;
use winnow::{Parser, Result};

/// Most digits accepted before the decimal point.
const MAX_INT_DIGITS: usize = 5;
/// Most digits accepted after the decimal point.
const MAX_FRAC_DIGITS: usize = 3;

/// Parses a plain decimal number, returning it in thousandths.
///
/// Scientific notation is not accepted, and neither is a bare or trailing
/// point (`".5"`, `"1."`). With at most five integer digits the result
/// always fits an `i32`.
///
/// - `"14"` -> `14000`
/// - `"+14.25"` -> `14250`
/// - `"-0.125"` -> `-125`
pub fn parse_thousandths<'s>(input: &mut &'s str) -> Result<i32> {
    let negative = opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)?;
    let whole = bounded_digits(MAX_INT_DIGITS).parse_next(input)?;
    let fraction = opt(preceded('.', bounded_digits(MAX_FRAC_DIGITS)))
        .map(|digits| digits.map_or(0, scale_fraction))
        .parse_next(input)?;

    let magnitude = digits_value(whole) * 1000 + fraction;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parses a plain decimal number as an `f32`.
///
/// Same grammar as [parse_thousandths].
pub fn parse_decimal<'s>(input: &mut &'s str) -> Result<f32> {
    parse_thousandths
        .map(|thousandths| thousandths as f32 / 1000.0)
        .parse_next(input)
}

/// One or more ASCII digits, but no more than `max`.
fn bounded_digits<'s>(max: usize) -> impl Parser<&'s str, &'s str, ContextError> {
    digit1.verify(move |digits: &str| digits.len() <= max)
}

/// Value of a string of ASCII digits already checked by [bounded_digits].
fn digits_value(digits: &str) -> i32 {
    digits
        .bytes()
        .fold(0, |acc, digit| acc * 10 + (digit - b'0') as i32)
}

/// Scales fractional digits to thousandths: `"5"` is 500, `"05"` is 50.
fn scale_fraction(digits: &str) -> i32 {
    digits_value(digits) * 10i32.pow((MAX_FRAC_DIGITS - digits.len()) as u32)
}

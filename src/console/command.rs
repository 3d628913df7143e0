use winnow::{
    ascii::{space0, space1},
    combinator::{alt, terminated},
    token::literal,
    Parser, Result,
};

use super::parse_number::parse_decimal;
use super::Error;

/// A command typed on the serial console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    /// `radius <cm>` or `r <cm>`.
    SetRadius(f32),
    /// `speed <rpm>` or `s <rpm>`.
    SetSpeed(f32),
    /// `status` or `?`.
    Status,
}
impl ConsoleCommand {
    /// Parses a whole line. Surrounding spaces are permitted.
    pub fn parse<'a>(
        input: &mut &'a str,
    ) -> core::result::Result<ConsoleCommand, Error> {
        let result = terminated(
            (
                space0,
                alt((
                    Self::parse_radius,
                    Self::parse_speed,
                    Self::parse_status,
                )),
            ),
            space0,
        )
        .map(|(_, command)| command)
        .parse(*input);

        match result {
            Ok(command) => {
                *input = "";
                Ok(command)
            }
            Err(_) => Err(Error::ParseError),
        }
    }

    fn parse_radius<'a>(input: &mut &'a str) -> Result<ConsoleCommand> {
        // "radius" must be tried before its own prefix "r".
        alt((literal("radius"), literal("r"))).parse_next(input)?;
        space1.parse_next(input)?;
        parse_decimal
            .map(ConsoleCommand::SetRadius)
            .parse_next(input)
    }

    fn parse_speed<'a>(input: &mut &'a str) -> Result<ConsoleCommand> {
        alt((literal("speed"), literal("s"))).parse_next(input)?;
        space1.parse_next(input)?;
        parse_decimal
            .map(ConsoleCommand::SetSpeed)
            .parse_next(input)
    }

    fn parse_status<'a>(input: &mut &'a str) -> Result<ConsoleCommand> {
        alt((literal("status"), literal("?")))
            .map(|_| ConsoleCommand::Status)
            .parse_next(input)
    }
}

mod command;
mod line_reader;
mod parse_number;

use ufmt_macros::uDebug;

pub use command::ConsoleCommand;
pub use line_reader::Error as ReadError;
pub use line_reader::LineReader;

use crate::{ConfigError, Configuration};

/// Result of a console command that succeeded.
#[derive(Debug, uDebug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// The configuration was changed.
    Ok,
    /// The caller should report the current status.
    Status,
}

/// Errors from a console line.
#[derive(Debug, uDebug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The line is not a command.
    ParseError,
    /// The command was understood but the value was refused.
    Config(ConfigError),
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Error::Config(error)
    }
}

/// Applies a console line to the configuration.
///
/// This is the writer side of [Configuration]. It runs on the polling loop
/// between sequencer ticks.
///
/// # Parameters
///
/// - `line`: One line of input, without its newline.
/// - `config`: Configuration to update.
pub fn handle(line: &str, config: &mut Configuration) -> Result<Reply, Error> {
    let mut input = line;
    let command = ConsoleCommand::parse(&mut input)?;
    match command {
        ConsoleCommand::SetRadius(cm) => {
            config.set_radius_cm(cm)?;
            Ok(Reply::Ok)
        }
        ConsoleCommand::SetSpeed(rpm) => {
            config.set_z_rpm(rpm)?;
            Ok(Reply::Ok)
        }
        ConsoleCommand::Status => Ok(Reply::Status),
    }
}

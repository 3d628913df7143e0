use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::Phase;
use crate::Point;

/// Clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Visual marker printed after homing. Never mistaken for a point line.
pub const SEPARATOR: &str = "======================================";

/// Something the sequencer wants the outside world to see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The carriage found the bottom limit; a fresh scan begins.
    Homed,
    /// A detection at the current slice and layer.
    Point(Point),
    /// The given phase overran its timeout and the scan stopped.
    Stalled(Phase),
}

/// Renders the serial text of an event, without the trailing newline.
impl uDisplay for Event {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Event::Homed => {
                f.write_str(CLEAR_SCREEN)?;
                f.write_str(SEPARATOR)
            }
            Event::Point(point) => point.fmt(f),
            Event::Stalled(phase) => {
                uwrite!(f, "ERROR: scan stalled in phase {:?}.", phase)
            }
        }
    }
}

use heapless::String;
use ufmt_macros::uDebug;

/// Non-blocking line assembler for serial input.
///
/// Feed it one byte at a time as bytes arrive; it never waits for more.
///
/// # Type Parameters
///
/// - `N`: Capacity of the line buffer, in bytes.
pub struct LineReader<const N: usize> {
    buffer: String<N>,
    complete: bool,
    overflowed: bool,
}

impl<const N: usize> LineReader<N> {
    /// Creates a new, empty line reader.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            complete: false,
            overflowed: false,
        }
    }

    /// Accepts one byte of input.
    ///
    /// `\r` is ignored. A line longer than the buffer is reported once, on
    /// the byte that overflows it, and the rest of it is discarded up to
    /// and including the next `\n`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(line))` when `byte` completes a line.
    /// - `Ok(None)` when more input is needed.
    /// - `Err(Error::BufferOverflow)` when the line is too long.
    pub fn push(&mut self, byte: u8) -> Result<Option<&str>, Error> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }

        match byte {
            b'\n' => {
                if self.overflowed {
                    self.overflowed = false;
                    self.buffer.clear();
                    Ok(None)
                } else {
                    self.complete = true;
                    Ok(Some(self.buffer.as_str()))
                }
            }
            b'\r' => Ok(None),
            _ if self.overflowed => Ok(None),
            _ => match self.buffer.push(byte as char) {
                Ok(()) => Ok(None),
                Err(()) => {
                    self.overflowed = true;
                    self.buffer.clear();
                    Err(Error::BufferOverflow)
                }
            },
        }
    }
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that might occur when reading.
#[derive(Debug, uDebug, PartialEq)]
pub enum Error {
    /// A buffer overflow error.
    BufferOverflow,
}

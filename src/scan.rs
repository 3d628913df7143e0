mod event;
mod point;
mod scan_state;
mod sequencer;

pub use event::Event;
pub use event::SEPARATOR;
pub use point::Point;
pub use scan_state::Phase;
pub use scan_state::ScanState;
pub use sequencer::ScannerIo;
pub use sequencer::Sequencer;

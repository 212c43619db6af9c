pub mod cursor;
pub mod engine;

pub use cursor::PollCursor;
pub use engine::{PollError, Poller, TickOutcome, NO_UPDATES_MESSAGE};

pub mod clipboard;
pub mod clock;

pub use clipboard::ClipboardService;
pub use clock::{Clock, FixedClock, LocalClock};

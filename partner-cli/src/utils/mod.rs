pub mod dates;
pub mod logging;
pub mod tui;

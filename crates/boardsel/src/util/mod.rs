pub mod format;
pub mod progress;

pub use format::{device_table, or_dash};
pub use progress::create_spinner;

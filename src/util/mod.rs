//! Small shared utilities.

pub mod time;

pub use time::relative_time;

//! Plain-text output helpers for the command surface.
//!
//! User-facing output goes through these, never through tracing.

use devreg_core::DeveloperRecord;

pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

pub fn blank_line() {
    println!();
}

/// The multi-line detail block for one record, framed by a blank line.
pub fn detail(record: &DeveloperRecord) {
    blank_line();
    info(record.to_string());
}

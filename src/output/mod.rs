//! Output module
//!
//! Styling, duration formatting, report layout and output sinks.

mod duration;
mod formatter;
mod sink;
mod style;

pub use duration::format_duration;
pub use formatter::ResultFormatter;
pub use sink::{OutputSink, ReportLine, Stream};
pub use style::{render, Color, Style, RESET};

//! Rendering is split by concern: colors, payload shapes, positional templates,
//! timestamps, and the `Format` trait that ties them into one line.

mod color;
mod format;
mod payload;
mod template;
mod timestamp;

pub use color::{Color, Palette, colorize};
pub use format::{DefaultFormat, Format, FormatResult, Record};
pub use payload::{FieldTag, Payload, split_tag};
pub use template::{Segment, Template};
pub use timestamp::{TIMESTAMP_LAYOUT, format_timestamp};

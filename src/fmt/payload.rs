//! What a caller hands to a severity method: free text, or an ordered list of fields
//! (status, latency, route, ...) that formats lay out as columns.

use super::color::Color;

/// Closed set of payload shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Fields(Vec<String>),
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for Payload {
    fn from(fields: Vec<String>) -> Self {
        Self::Fields(fields)
    }
}

impl From<&[&str]> for Payload {
    fn from(fields: &[&str]) -> Self {
        Self::Fields(fields.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Payload {
    fn from(fields: [&str; N]) -> Self {
        Self::Fields(fields.iter().map(ToString::to_string).collect())
    }
}

/// Color marker carried as a `-g`/`-r`/`-b`/`-y` suffix on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Green,
    Red,
    Blue,
    Yellow,
}

impl FieldTag {
    const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'g' => Some(Self::Green),
            b'r' => Some(Self::Red),
            b'b' => Some(Self::Blue),
            b'y' => Some(Self::Yellow),
            _ => None,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Green => Color::GREEN,
            Self::Red => Color::RED,
            Self::Blue => Color::BLUE,
            Self::Yellow => Color::YELLOW,
        }
    }
}

/// Splits a trailing color tag off a field. Only the four known letters count as a tag;
/// `200-x` or `-` stays plain text.
#[must_use]
pub fn split_tag(field: &str) -> (&str, Option<FieldTag>) {
    let bytes = field.as_bytes();
    if let [.., b'-', last] = bytes
        && let Some(tag) = FieldTag::from_byte(*last)
    {
        // both suffix bytes are ASCII, so this is a char boundary
        return (&field[..field.len() - 2], Some(tag));
    }
    (field, None)
}

//! The format pipeline: a record goes in, a template plus positional values (or a
//! suppress decision) comes out. The logger only renders and writes.

use super::color::{Color, Palette};
use super::payload::{Payload, split_tag};
use super::template::Template;
use super::timestamp::format_timestamp;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::io::IsTerminal;

/// Everything a format needs to render one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub payload: Payload,
    /// Taken from the logger's clock once per record, after the threshold check.
    pub time: DateTime<Local>,
}

/// Output of a [`Format`]. When `emit` is false the logger writes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    pub template: Template,
    pub values: Vec<String>,
    pub emit: bool,
}

impl FormatResult {
    #[must_use]
    pub const fn new(template: Template, values: Vec<String>) -> Self {
        Self {
            template,
            values,
            emit: true,
        }
    }

    /// The format declines the record; not an error.
    #[must_use]
    pub const fn suppressed() -> Self {
        Self {
            template: Template::new(),
            values: Vec::new(),
            emit: false,
        }
    }

    /// Substitutes the values into the template.
    #[must_use]
    pub fn render(&self) -> String {
        self.template.render(&self.values)
    }
}

/// `Send + Sync` so a logger holding a format can be shared across threads.
pub trait Format: Send + Sync {
    fn format(&self, record: &Record) -> FormatResult;
}

impl<F> Format for F
where
    F: Fn(&Record) -> FormatResult + Send + Sync,
{
    fn format(&self, record: &Record) -> FormatResult {
        self(record)
    }
}

/// Built-in layout: `[LEVEL   ] 2024/01/02 - 15:04:05.123 | field | field |`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFormat {
    colors: bool,
}

impl Default for DefaultFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultFormat {
    /// Colored badges for the level label and tagged fields.
    #[must_use]
    pub const fn new() -> Self {
        Self { colors: true }
    }

    /// No escape sequences at all; color tags are still stripped from fields.
    #[must_use]
    pub const fn plain() -> Self {
        Self { colors: false }
    }

    /// Colors only when stdout is a terminal.
    #[must_use]
    pub fn for_stdout() -> Self {
        Self {
            colors: std::io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    fn colored_slot(&self, template: Template, color: Option<Color>) -> Template {
        match color {
            Some(color) if self.colors => template
                .literal(&color.ansi())
                .slot()
                .literal(Color::RESET),
            _ => template.slot(),
        }
    }

    /// `[LEVEL] timestamp |`, shared by both payload shapes.
    fn head(&self, level: Level) -> Template {
        let template = Template::new().literal("[");
        let color = Palette::get().level(level);
        self.colored_slot(template, Some(color))
            .literal("] ")
            .slot()
            .literal(" |")
    }
}

impl Format for DefaultFormat {
    fn format(&self, record: &Record) -> FormatResult {
        let mut template = self.head(record.level);
        let mut values = vec![
            record.level.label().to_string(),
            format_timestamp(&record.time),
        ];

        match &record.payload {
            Payload::Text(text) => {
                template = template.literal(" ").slot().literal(" |");
                values.push(text.clone());
            }
            Payload::Fields(fields) => {
                values.reserve(fields.len());
                for field in fields {
                    let (text, tag) = split_tag(field);
                    template = self
                        .colored_slot(template.literal(" "), tag.map(|t| t.color()))
                        .literal(" |");
                    values.push(text.to_string());
                }
            }
        }

        FormatResult::new(template, values)
    }
}

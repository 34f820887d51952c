//! Positional templates keep the line layout apart from the values substituted into it.
//! Payload text only ever travels as a value, so a stray `{}` inside a message can never
//! be mistaken for a slot.

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Separators, brackets and escape sequences pass through untouched.
    Literal(String),
    /// Index into the positional values supplied at render time.
    Slot(usize),
}

/// Pre-parsed layout such as `[{}] {} | {} |`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    next_slot: usize,
}

impl Template {
    /// Empty template, to be filled with [`Template::literal`] and [`Template::slot`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            next_slot: 0,
        }
    }

    /// Parses `{}` (next positional slot) and `{N}` (explicit slot). `{{` and `}}` escape
    /// braces; any other `{name}` is kept as literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut out = Self::new();
        let chars: Vec<char> = template.chars().collect();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '{' if chars.get(i + 1) == Some(&'{') => {
                    current.push('{');
                    i += 2;
                }
                '}' if chars.get(i + 1) == Some(&'}') => {
                    current.push('}');
                    i += 2;
                }
                '{' => {
                    let Some(end) = chars[i..].iter().position(|&c| c == '}') else {
                        current.push('{');
                        i += 1;
                        continue;
                    };
                    let end = i + end;
                    let name: String = chars[i + 1..end].iter().collect();

                    let slot = if name.is_empty() {
                        let slot = out.next_slot;
                        out.next_slot += 1;
                        Some(slot)
                    } else {
                        name.parse::<usize>().ok()
                    };

                    match slot {
                        Some(index) => {
                            if !current.is_empty() {
                                out.segments.push(Segment::Literal(std::mem::take(&mut current)));
                            }
                            out.segments.push(Segment::Slot(index));
                        }
                        None => current.push_str(&format!("{{{name}}}")),
                    }
                    i = end + 1;
                }
                c => {
                    current.push(c);
                    i += 1;
                }
            }
        }

        if !current.is_empty() {
            out.segments.push(Segment::Literal(current));
        }
        out
    }

    /// Appends literal text, merging with a preceding literal.
    #[must_use]
    pub fn literal(mut self, text: &str) -> Self {
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else if !text.is_empty() {
            self.segments.push(Segment::Literal(text.to_string()));
        }
        self
    }

    /// Appends the next positional slot.
    #[must_use]
    pub fn slot(mut self) -> Self {
        self.segments.push(Segment::Slot(self.next_slot));
        self.next_slot += 1;
        self
    }

    /// Tests and custom formats need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of distinct values the template expects (highest slot index + 1).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(i) => Some(i + 1),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitutes values by position. Slots without a value render empty; surplus values
    /// are ignored.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Slot(i) => {
                    if let Some(value) = values.get(*i) {
                        result.push_str(value.as_ref());
                    }
                }
            }
        }
        result
    }
}

//! Prompt templates with `{{$variable}}` placeholders.

use crate::error::TemplateError;
use crate::variables::ContextVariables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Variable(String),
}

/// Immutable prompt text with variable placeholders.
///
/// Placeholders are written `{{$name}}`; whitespace inside the braces is
/// ignored, so `{{ $input }}` is equivalent to `{{$input}}`. Names consist of
/// ASCII letters, digits and underscores.
///
/// Rendering is a single literal pass: a substituted value is copied verbatim
/// and never scanned for placeholders itself.
///
/// ```
/// use jester_prompts::{ContextVariables, PromptTemplate};
///
/// let template = PromptTemplate::new("Who's there? {{$input}}.").unwrap();
/// let rendered = template.render(&ContextVariables::from_input("Boo")).unwrap();
/// assert_eq!(rendered, "Who's there? Boo.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if a block is unterminated, is not a
    /// `$variable` reference, or names an invalid variable.
    pub fn new(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let segments = parse(&source)?;
        Ok(Self { source, segments })
    }

    /// Returns the unparsed template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns referenced variable names in order of first use.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Variable(name) = segment
                && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }

    /// Renders the template with values from `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] for the first referenced
    /// variable that `variables` does not define.
    pub fn render(&self, variables: &ContextVariables) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => rendered.push_str(text),
                Segment::Variable(name) => {
                    let value = variables
                        .get(name)
                        .ok_or_else(|| TemplateError::missing_variable(name.as_str()))?;
                    rendered.push_str(value);
                }
            }
        }
        Ok(rendered)
    }
}

impl core::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.source)
    }
}

impl core::str::FromStr for PromptTemplate {
    type Err = TemplateError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::new(source)
    }
}

fn parse(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        if start > 0 {
            segments.push(Segment::Text(rest[..start].to_string()));
        }

        let body_start = start + OPEN.len();
        let end = rest[body_start..]
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated(offset + start))?;
        let body = rest[body_start..body_start + end].trim();
        segments.push(Segment::Variable(parse_variable(body)?));

        let consumed = body_start + end + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest.to_string()));
    }

    Ok(segments)
}

fn parse_variable(body: &str) -> Result<String, TemplateError> {
    let name = body
        .strip_prefix('$')
        .ok_or_else(|| TemplateError::UnsupportedBlock(body.to_string()))?;

    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(TemplateError::invalid_variable_name(name));
    }

    Ok(name.to_string())
}

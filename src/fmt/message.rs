//! Positional `{0}`, `{1}`, ... substitution for records that carry parameters.
//!
//! Unknown or out-of-range `{names}` pass through as literal text, so a message
//! that merely contains braces is never mangled.

/// One parsed piece of a message pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSegment {
    /// Text copied verbatim, including braces that aren't a valid index.
    Literal(String),
    /// Index into the record's parameter list, with the placeholder exactly
    /// as written so an unmatched one can be put back unchanged.
    Parameter { index: usize, text: String },
}

/// Parsed message pattern: parse once, render with any parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<MessageSegment>,
}

impl MessageTemplate {
    /// Splits `pattern` into literals and `{N}` placeholders.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            current.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find('}') else {
                current.push_str(&rest[open..]);
                rest = "";
                break;
            };

            let name = &after[..close];
            match name.parse::<usize>() {
                Ok(index) if !name.starts_with('+') => {
                    if !current.is_empty() {
                        segments.push(MessageSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(MessageSegment::Parameter {
                        index,
                        text: format!("{{{name}}}"),
                    });
                }
                _ => {
                    current.push('{');
                    current.push_str(name);
                    current.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(MessageSegment::Literal(current));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    /// Substitutes `params`; an index with no parameter keeps its placeholder text.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, params: &[S]) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                MessageSegment::Literal(s) => result.push_str(s),
                MessageSegment::Parameter { index, text } => match params.get(*index) {
                    Some(value) => result.push_str(value.as_ref()),
                    None => result.push_str(text),
                },
            }
        }

        result
    }
}

/// Resolves `message` against `params`; without parameters the message is
/// returned as-is, braces and all.
#[must_use]
pub fn resolve<S: AsRef<str>>(message: &str, params: &[S]) -> String {
    if params.is_empty() {
        return message.to_string();
    }
    MessageTemplate::parse(message).render(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_brace_is_literal() {
        let t = MessageTemplate::parse("value {0");
        assert_eq!(t.segments(), &[MessageSegment::Literal("value {0".into())]);
    }

    #[test]
    fn signed_index_is_literal() {
        assert_eq!(resolve("{+0}", &["x"]), "{+0}");
    }
}

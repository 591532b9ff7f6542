//! Fixed two-message prompt templates and their rendering.

mod templates;

pub use templates::{MODERATION_TEMPLATE, RESPONSE_TEMPLATE, TOPIC_TEMPLATE};

use crate::{Error, Result, llm::ChatMessage};

/// A system instruction plus a user instruction with `{name}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
}

impl PromptTemplate {
    /// Renders the template into `[system, user]` messages.
    ///
    /// Values are inserted verbatim in a single pass over the template, so
    /// braces inside a value are never expanded again.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<Vec<ChatMessage>> {
        Ok(vec![
            ChatMessage::system(fill(self.system, vars)?),
            ChatMessage::user(fill(self.user, vars)?),
        ])
    }
}

fn fill(template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('}') {
            Some(end) if is_placeholder(&after[..end]) => {
                let name = &after[..end];
                let value = vars
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| Error::prompt(format!("missing value for {{{name}}}")))?;
                out.push_str(value);
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

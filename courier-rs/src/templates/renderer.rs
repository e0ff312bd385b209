//! Template rendering with variable substitution and conditional blocks

use crate::templates::types::{EmailTemplate, Language};
use regex::Regex;
use std::collections::HashMap;

/// Variable values supplied by the caller, keyed by placeholder name
pub type TemplateData = HashMap<String, String>;

/// Final output of one render: subject plus both body formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders email templates by substituting variables
///
/// Rendering is a pure function of (template, language, variables): no I/O,
/// no hidden state, deterministic, safe to call concurrently.
///
/// Two passes, in this order:
///
/// 1. Conditional blocks: `{{#if flag}}...{{/if}}` is kept (delimiters
///    stripped) when `flag` maps to a truthy value, otherwise the whole
///    block is removed. Blocks do not nest.
/// 2. Variable substitution: every `{{name}}` token is replaced with the
///    mapped value; names absent from the map become the empty string,
///    never a literal `{{name}}` in the output and never an error.
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Render a template in the chosen language
    pub fn render(
        template: &EmailTemplate,
        language: Language,
        vars: &TemplateData,
    ) -> RenderedEmail {
        RenderedEmail {
            subject: Self::render_string(template.subject.get(language), vars),
            html: Self::render_string(template.body_html.get(language), vars),
            text: Self::render_string(template.body_text.get(language), vars),
        }
    }

    /// Render only a subject line
    pub fn render_subject(subject: &str, vars: &TemplateData) -> String {
        Self::render_string(subject, vars)
    }

    fn render_string(input: &str, vars: &TemplateData) -> String {
        let resolved = Self::apply_conditionals(input, vars);
        Self::substitute(&resolved, vars)
    }

    /// Resolve `{{#if name}}...{{/if}}` blocks in a single pass
    fn apply_conditionals(input: &str, vars: &TemplateData) -> String {
        let re = match Regex::new(r"(?s)\{\{#if\s+([A-Za-z0-9_]+)\s*\}\}(.*?)\{\{/if\}\}") {
            Ok(re) => re,
            Err(_) => return input.to_string(),
        };

        re.replace_all(input, |caps: &regex::Captures| {
            if Self::is_truthy(vars.get(&caps[1])) {
                caps[2].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
    }

    /// A variable counts as truthy when present, non-empty and not "0"
    fn is_truthy(value: Option<&String>) -> bool {
        match value {
            Some(v) => !v.is_empty() && v.as_str() != "0",
            None => false,
        }
    }

    /// Replace every `{{name}}` token with its value, or nothing
    fn substitute(input: &str, vars: &TemplateData) -> String {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '{' && chars.peek() == Some(&'{') {
                chars.next(); // consume second {

                let mut var_name = String::new();
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    if ch == '}' && chars.peek() == Some(&'}') {
                        chars.next(); // consume second }
                        closed = true;
                        break;
                    }
                    var_name.push(ch);
                }

                if closed {
                    if let Some(value) = vars.get(var_name.trim()) {
                        result.push_str(value);
                    }
                    // unknown names resolve to empty string
                } else {
                    // unterminated token, keep the literal text
                    result.push_str("{{");
                    result.push_str(&var_name);
                }
            } else {
                result.push(c);
            }
        }

        result
    }
}

//! Template registry with O(1) lookup and stable enumeration order

use crate::templates::catalog::builtin_templates;
use crate::templates::types::EmailTemplate;
use std::collections::HashMap;

/// Immutable mapping from identifier to template, built once at startup
///
/// Lookup never fails with an error; an unknown identifier yields `None`
/// and callers decide how to surface that. Enumeration preserves the order
/// templates were registered in, so UI pickers stay stable.
pub struct TemplateRegistry {
    templates: Vec<EmailTemplate>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Registry holding the built-in storefront template set
    pub fn builtin() -> Self {
        Self::from_templates(builtin_templates())
    }

    /// Build a registry from an explicit template list
    ///
    /// A duplicate identifier keeps the first registration; later ones are
    /// unreachable by lookup and dropped from enumeration.
    pub fn from_templates(templates: Vec<EmailTemplate>) -> Self {
        let mut registry = Self {
            templates: Vec::with_capacity(templates.len()),
            index: HashMap::with_capacity(templates.len()),
        };

        for template in templates {
            if registry.index.contains_key(&template.id) {
                continue;
            }
            registry
                .index
                .insert(template.id.clone(), registry.templates.len());
            registry.templates.push(template);
        }

        registry
    }

    /// Look up a template by identifier
    pub fn get(&self, id: &str) -> Option<&EmailTemplate> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// All templates, in registration order
    pub fn all(&self) -> &[EmailTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

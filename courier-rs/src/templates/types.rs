//! Template types and data structures

use serde::{Deserialize, Serialize};

/// Language a message is rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Vietnamese
    Vi,
}

impl Language {
    /// Two-letter language code
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// Parse from a two-letter code
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "vi" => Some(Language::Vi),
            _ => None,
        }
    }
}

/// A string carried in both supported languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub vi: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, vi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            vi: vi.into(),
        }
    }

    /// The variant for the given language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Vi => &self.vi,
        }
    }
}

/// Email template with bilingual subject and dual-format bodies
///
/// Templates are defined at process start and immutable afterwards. Every
/// template carries all four body variants (HTML/text x en/vi); the text
/// body is authored separately, never derived from the HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Unique identifier, also used as the type tag on recorded emails
    pub id: String,
    /// Display name for template pickers
    pub name: Localized,
    /// Subject line with template variables
    pub subject: Localized,
    /// HTML body with template variables
    pub body_html: Localized,
    /// Plain text body with template variables
    pub body_text: Localized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.as_code(), "en");
        assert_eq!(Language::Vi.as_code(), "vi");
        assert_eq!(Language::from_code("vi"), Some(Language::Vi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_localized_get() {
        let greeting = Localized::new("Hello", "Xin chào");
        assert_eq!(greeting.get(Language::En), "Hello");
        assert_eq!(greeting.get(Language::Vi), "Xin chào");
    }
}

//! Bilingual email templates
//!
//! A fixed registry of English/Vietnamese message templates with variable
//! substitution and conditional blocks.

pub mod catalog;
pub mod registry;
pub mod renderer;
pub mod types;

pub use registry::TemplateRegistry;
pub use renderer::{RenderedEmail, TemplateData, TemplateRenderer};
pub use types::{EmailTemplate, Language, Localized};

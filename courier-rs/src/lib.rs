//! courier-rs: customer correspondence engine for the storefront
//!
//! Templated, bilingual transactional email with conversation threading.
//!
//! # Features
//!
//! - **Templates**: Fixed registry of English/Vietnamese message templates,
//!   each with HTML and plain-text bodies
//! - **Rendering**: Pure variable substitution with `{{#if}}` conditional blocks
//! - **Threading**: One persistent conversation thread per customer inquiry,
//!   every sent message recorded against it
//! - **Transport**: SMTP relay client behind a swappable trait
//!
//! # Example
//!
//! ```no_run
//! use courier_rs::config::Config;
//! use courier_rs::dispatch::{EmailDispatcher, SmtpRelayTransport};
//! use courier_rs::templates::TemplateRegistry;
//! use courier_rs::threads::ThreadStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let pool = sqlx::SqlitePool::connect(&config.storage.database_url).await?;
//!
//!     let store = ThreadStore::new(pool);
//!     store.init_db().await?;
//!
//!     let transport = Arc::new(SmtpRelayTransport::from_config(&config.smtp));
//!     let _dispatcher = EmailDispatcher::new(
//!         Arc::new(TemplateRegistry::builtin()),
//!         store,
//!         transport,
//!         config.smtp.from_address.clone(),
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`templates`]: Template registry and renderer
//! - [`threads`]: Conversation threads and sent-message records
//! - [`dispatch`]: Transport and the threaded dispatcher

pub mod config;
pub mod dispatch;
pub mod error;
pub mod templates;
pub mod threads;

// Re-export commonly used types
pub use config::Config;
pub use error::{CourierError, Result};

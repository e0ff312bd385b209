//! Threaded email dispatch
//!
//! Orchestrates thread lookup, template rendering, transport dispatch and
//! persistence for every outgoing message.

pub mod dispatcher;
pub mod transport;
pub mod types;

pub use dispatcher::EmailDispatcher;
pub use transport::{validate_address, MailTransport, SmtpRelayTransport};
pub use types::{Contact, DispatchOutcome, Inquiry, OutgoingEmail, SendReceipt, SendRequest};

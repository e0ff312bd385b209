//! Thread and sent-message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The conversation tied to one originating inquiry
///
/// Created lazily on the first send for an inquiry and never deleted by
/// this subsystem. At most one thread exists per inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailThread {
    /// Unique identifier
    pub id: String,
    /// The originating inquiry; unique across threads
    pub inquiry_id: String,
    /// Customer's email address
    pub customer_email: String,
    /// Customer's display name
    pub customer_name: String,
    /// Subject the conversation opened with
    pub subject: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One message sent or received within a thread
///
/// Created on every successful send; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadEmail {
    /// Unique identifier
    pub id: String,
    /// Owning thread
    pub thread_id: String,
    /// Transport-level message identifier
    pub message_id: String,
    /// Sender address
    pub from_email: String,
    /// Recipient address
    pub to_email: String,
    /// Subject as sent
    pub subject: String,
    /// Rendered HTML body
    pub html_body: String,
    /// Rendered plain-text body, when one was sent
    pub text_body: Option<String>,
    /// Free-text tag (template id, "reply", ...)
    pub email_type: String,
    /// True for staff-originated messages, false for customer replies
    pub is_from_admin: bool,
    /// Send timestamp; conversation order sorts by this
    pub sent_at: DateTime<Utc>,
}

/// Fields needed to open a thread
#[derive(Debug, Clone)]
pub struct NewThread {
    pub inquiry_id: String,
    pub customer_email: String,
    pub customer_name: String,
    pub subject: String,
}

/// Fields needed to record a sent message
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub thread_id: String,
    pub message_id: String,
    pub from_email: String,
    pub to_email: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
    pub email_type: String,
    pub is_from_admin: bool,
}

/// A thread together with its messages in conversation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadWithEmails {
    pub thread: EmailThread,
    pub emails: Vec<ThreadEmail>,
}

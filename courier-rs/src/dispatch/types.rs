//! Dispatch request and result types

use crate::templates::{Language, TemplateData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the mail transport consumes for one delivery
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

/// What the transport hands back after a successful delivery
///
/// Not every transport supplies a message identifier; the dispatcher
/// generates a local fallback when this is `None`.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub message_id: Option<String>,
}

/// A templated send into an inquiry's thread
#[derive(Debug, Clone)]
pub struct SendRequest {
    /// Recipient address
    pub to: String,
    /// Subject as it goes on the wire; also opens the thread
    pub subject: String,
    /// Template to render
    pub template_id: String,
    /// Variable values for the template
    pub data: TemplateData,
    /// Language to render in
    pub language: Language,
    /// Inquiry this conversation belongs to
    pub inquiry_id: String,
    /// Customer fields used when the thread is first opened
    pub customer_email: String,
    pub customer_name: String,
    /// True for staff-originated messages
    pub is_from_admin: bool,
}

/// Result of a dispatched send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Thread the message was recorded on
    pub thread_id: String,
    /// Message identifier, transport-supplied or locally generated
    pub message_id: String,
}

/// The inquiry fields the acknowledgment email draws from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub item_count: u32,
    pub submitted_at: DateTime<Utc>,
    /// Language the customer browsed the storefront in
    pub language: Language,
}

/// The person the correspondence goes to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

//! Threaded email dispatcher
//!
//! Every outgoing message goes through one send: find or create the
//! inquiry's thread, render the template, hand the result to the transport,
//! and record the sent message on the thread.
//!
//! Ordering is deliberate: the record is written only after the transport
//! confirms the send. The inverse failure (sent, then the write fails) is
//! surfaced as [`CourierError::SentNotRecorded`] and never rolled back.

use crate::dispatch::transport::{validate_address, MailTransport};
use crate::dispatch::types::{Contact, DispatchOutcome, Inquiry, OutgoingEmail, SendRequest};
use crate::error::{CourierError, Result};
use crate::templates::{Language, TemplateData, TemplateRegistry, TemplateRenderer};
use crate::threads::{NewEmail, NewThread, ThreadStore, ThreadWithEmails};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Template used for the automatic inquiry acknowledgment
const ACKNOWLEDGMENT_TEMPLATE: &str = "inquiry_acknowledgment";

/// Orchestrates rendering, transport dispatch and thread persistence
pub struct EmailDispatcher {
    registry: Arc<TemplateRegistry>,
    store: ThreadStore,
    transport: Arc<dyn MailTransport>,
    from_address: String,
}

impl EmailDispatcher {
    /// Create a new dispatcher
    pub fn new(
        registry: Arc<TemplateRegistry>,
        store: ThreadStore,
        transport: Arc<dyn MailTransport>,
        from_address: String,
    ) -> Self {
        Self {
            registry,
            store,
            transport,
            from_address,
        }
    }

    /// Send a templated email inside the inquiry's thread
    ///
    /// The thread is created on the first send for an inquiry and reused on
    /// every later one. An unknown template id fails before anything is
    /// dispatched. A transport failure leaves no email record behind.
    pub async fn send_with_thread(&self, request: SendRequest) -> Result<DispatchOutcome> {
        validate_address(&request.to)?;

        let thread = self
            .store
            .find_or_create(NewThread {
                inquiry_id: request.inquiry_id.clone(),
                customer_email: request.customer_email.clone(),
                customer_name: request.customer_name.clone(),
                subject: request.subject.clone(),
            })
            .await?;

        let template = self.registry.get(&request.template_id).ok_or_else(|| {
            CourierError::TemplateNotFound(request.template_id.clone())
        })?;

        let rendered = TemplateRenderer::render(template, request.language, &request.data);

        let message_id = self
            .dispatch_and_record(
                &thread.id,
                &request.to,
                &request.subject,
                rendered.html,
                Some(rendered.text),
                &request.template_id,
                request.is_from_admin,
            )
            .await?;

        Ok(DispatchOutcome {
            thread_id: thread.id,
            message_id,
        })
    }

    /// Send pre-rendered content as a reply into an existing thread
    ///
    /// Fails with [`CourierError::ThreadNotFound`] when the thread id does
    /// not resolve; the subject gains a "Re: " prefix unless it already has
    /// one.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_reply(
        &self,
        thread_id: &str,
        to: &str,
        subject: &str,
        html_content: String,
        text_content: Option<String>,
        email_type: &str,
        is_from_admin: bool,
    ) -> Result<DispatchOutcome> {
        validate_address(to)?;

        let thread = self
            .store
            .get_thread(thread_id)
            .await?
            .ok_or_else(|| CourierError::ThreadNotFound(thread_id.to_string()))?;

        let subject = if subject.starts_with("Re:") {
            subject.to_string()
        } else {
            format!("Re: {}", subject)
        };

        let message_id = self
            .dispatch_and_record(
                &thread.id,
                to,
                &subject,
                html_content,
                text_content,
                email_type,
                is_from_admin,
            )
            .await?;

        Ok(DispatchOutcome {
            thread_id: thread.id,
            message_id,
        })
    }

    /// Acknowledge a newly submitted inquiry
    ///
    /// Derives the template variables from the inquiry and contact, renders
    /// in the inquiry's language and sends through
    /// [`send_with_thread`](Self::send_with_thread). Calling this twice for
    /// one inquiry reuses its thread; nothing deduplicates the message
    /// itself.
    pub async fn send_inquiry_acknowledgment(
        &self,
        inquiry: &Inquiry,
        contact: &Contact,
    ) -> Result<DispatchOutcome> {
        let template = self.registry.get(ACKNOWLEDGMENT_TEMPLATE).ok_or_else(|| {
            CourierError::TemplateNotFound(ACKNOWLEDGMENT_TEMPLATE.to_string())
        })?;

        let mut data = TemplateData::new();
        data.insert("customer_name".to_string(), contact.name.clone());
        data.insert("inquiry_id".to_string(), inquiry.id.clone());
        data.insert("item_count".to_string(), inquiry.item_count.to_string());
        data.insert(
            "submitted_date".to_string(),
            format_submission_date(inquiry.submitted_at, inquiry.language),
        );
        if let Some(company) = &inquiry.company {
            data.insert("company".to_string(), company.clone());
        }
        if let Some(message) = &inquiry.message {
            data.insert("message".to_string(), message.clone());
        }

        let subject =
            TemplateRenderer::render_subject(template.subject.get(inquiry.language), &data);

        self.send_with_thread(SendRequest {
            to: contact.email.clone(),
            subject,
            template_id: ACKNOWLEDGMENT_TEMPLATE.to_string(),
            data,
            language: inquiry.language,
            inquiry_id: inquiry.id.clone(),
            customer_email: contact.email.clone(),
            customer_name: contact.name.clone(),
            is_from_admin: true,
        })
        .await
    }

    /// The recorded conversation for an inquiry, if any
    pub async fn conversation(&self, inquiry_id: &str) -> Result<Option<ThreadWithEmails>> {
        self.store.get_thread_with_emails(inquiry_id).await
    }

    /// Dispatch through the transport, then record on the thread
    #[allow(clippy::too_many_arguments)]
    async fn dispatch_and_record(
        &self,
        thread_id: &str,
        to: &str,
        subject: &str,
        html_body: String,
        text_body: Option<String>,
        email_type: &str,
        is_from_admin: bool,
    ) -> Result<String> {
        let mail = OutgoingEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body,
            text_body,
        };

        let receipt = self.transport.send(&mail).await?;

        let message_id = receipt
            .message_id
            .unwrap_or_else(|| format!("<{}@courier.local>", Uuid::new_v4().simple()));

        let record = NewEmail {
            thread_id: thread_id.to_string(),
            message_id: message_id.clone(),
            from_email: self.from_address.clone(),
            to_email: mail.to,
            subject: mail.subject,
            html_body: mail.html_body,
            text_body: mail.text_body,
            email_type: email_type.to_string(),
            is_from_admin,
        };

        match self.store.record_email(record).await {
            Ok(_) => {
                info!(
                    "Sent {} email to {} on thread {}",
                    email_type, to, thread_id
                );
                Ok(message_id)
            }
            Err(e) => {
                // the customer has the email; only our record is missing
                error!(
                    "Email {} to {} was sent but could not be recorded on thread {}: {}",
                    message_id, to, thread_id, e
                );
                Err(CourierError::SentNotRecorded {
                    message_id,
                    source: Box::new(e),
                })
            }
        }
    }
}

/// Format the submission date the way each audience expects it
fn format_submission_date(timestamp: DateTime<Utc>, language: Language) -> String {
    match language {
        Language::En => timestamp.format("%B %-d, %Y").to_string(),
        Language::Vi => timestamp.format("%d/%m/%Y").to_string(),
    }
}

//! Integration tests for the threaded dispatcher
//!
//! The mail transport is replaced by in-process doubles; persistence runs
//! against an in-memory database.

use async_trait::async_trait;
use chrono::Utc;
use courier_rs::dispatch::{
    Contact, EmailDispatcher, Inquiry, MailTransport, OutgoingEmail, SendReceipt, SendRequest,
};
use courier_rs::error::CourierError;
use courier_rs::templates::{Language, TemplateData, TemplateRegistry};
use courier_rs::threads::ThreadStore;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};

/// Transport double that records what it was asked to deliver
struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
    supply_message_id: bool,
}

impl RecordingTransport {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            supply_message_id: true,
        }
    }

    fn without_message_ids() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            supply_message_id: false,
        }
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last_sent(&self) -> OutgoingEmail {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, mail: &OutgoingEmail) -> Result<SendReceipt, CourierError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(mail.clone());

        let message_id = self
            .supply_message_id
            .then(|| format!("<mock-{}@relay.test>", sent.len()));
        Ok(SendReceipt { message_id })
    }
}

/// Transport double that rejects every message
struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _mail: &OutgoingEmail) -> Result<SendReceipt, CourierError> {
        Err(CourierError::Transport(
            "relay rejected the message".to_string(),
        ))
    }
}

async fn test_pool() -> SqlitePool {
    // one connection: an in-memory database exists per connection
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

async fn setup(transport: Arc<dyn MailTransport>) -> (EmailDispatcher, ThreadStore, SqlitePool) {
    let pool = test_pool().await;
    let store = ThreadStore::new(pool.clone());
    store.init_db().await.unwrap();

    let dispatcher = EmailDispatcher::new(
        Arc::new(TemplateRegistry::builtin()),
        ThreadStore::new(pool.clone()),
        transport,
        "sales@storefront.example".to_string(),
    );

    (dispatcher, store, pool)
}

fn request(inquiry_id: &str, template_id: &str) -> SendRequest {
    let mut data = TemplateData::new();
    data.insert("customer_name".to_string(), "Jane Carter".to_string());
    data.insert("inquiry_id".to_string(), inquiry_id.to_string());
    data.insert("total_price".to_string(), "$1,495.00".to_string());

    SendRequest {
        to: "jane@example.com".to_string(),
        subject: format!("Your inquiry {}", inquiry_id),
        template_id: template_id.to_string(),
        data,
        language: Language::En,
        inquiry_id: inquiry_id.to_string(),
        customer_email: "jane@example.com".to_string(),
        customer_name: "Jane Carter".to_string(),
        is_from_admin: true,
    }
}

#[tokio::test]
async fn test_two_sends_share_one_thread() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, store, _pool) = setup(transport.clone()).await;

    let first = dispatcher
        .send_with_thread(request("abc123", "inquiry_acknowledgment"))
        .await
        .unwrap();
    let second = dispatcher
        .send_with_thread(request("abc123", "quote_ready"))
        .await
        .unwrap();

    assert_eq!(first.thread_id, second.thread_id);
    assert_ne!(first.message_id, second.message_id);
    assert_eq!(transport.sent_count(), 2);

    let conversation = store
        .get_thread_with_emails("abc123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conversation.emails.len(), 2);
    assert_eq!(conversation.emails[0].email_type, "inquiry_acknowledgment");
    assert_eq!(conversation.emails[1].email_type, "quote_ready");
    assert!(conversation.emails[0].sent_at <= conversation.emails[1].sent_at);
    assert_eq!(store.list_threads(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_template_sends_nothing() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, store, _pool) = setup(transport.clone()).await;

    let result = dispatcher
        .send_with_thread(request("abc123", "no_such_template"))
        .await;

    match result {
        Err(CourierError::TemplateNotFound(id)) => assert_eq!(id, "no_such_template"),
        other => panic!("expected TemplateNotFound, got {:?}", other.err()),
    }
    assert_eq!(transport.sent_count(), 0);

    // the thread may exist, but nothing was recorded on it
    if let Some(conversation) = store.get_thread_with_emails("abc123").await.unwrap() {
        assert!(conversation.emails.is_empty());
    }
}

#[tokio::test]
async fn test_transport_failure_leaves_no_record() {
    let (dispatcher, store, _pool) = setup(Arc::new(FailingTransport)).await;

    let result = dispatcher
        .send_with_thread(request("abc123", "quote_ready"))
        .await;

    match result {
        Err(CourierError::Transport(msg)) => assert!(msg.contains("rejected")),
        other => panic!("expected Transport failure, got {:?}", other.err()),
    }

    let conversation = store
        .get_thread_with_emails("abc123")
        .await
        .unwrap()
        .unwrap();
    assert!(conversation.emails.is_empty());
}

#[tokio::test]
async fn test_reply_lands_in_thread_with_re_prefix() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, store, _pool) = setup(transport.clone()).await;

    let outcome = dispatcher
        .send_with_thread(request("abc123", "inquiry_acknowledgment"))
        .await
        .unwrap();

    let reply = dispatcher
        .send_reply(
            &outcome.thread_id,
            "jane@example.com",
            "Your inquiry abc123",
            "<p>We can do the oak finish.</p>".to_string(),
            Some("We can do the oak finish.".to_string()),
            "reply",
            true,
        )
        .await
        .unwrap();

    assert_eq!(reply.thread_id, outcome.thread_id);
    assert!(transport.last_sent().subject.starts_with("Re: "));

    let emails = store.emails_for_thread(&outcome.thread_id).await.unwrap();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[1].email_type, "reply");
    assert!(emails[1].subject.starts_with("Re: "));

    // an existing prefix is not doubled
    let again = dispatcher
        .send_reply(
            &outcome.thread_id,
            "jane@example.com",
            "Re: Your inquiry abc123",
            "<p>One more thing.</p>".to_string(),
            None,
            "reply",
            true,
        )
        .await
        .unwrap();
    assert_eq!(again.thread_id, outcome.thread_id);
    assert!(!transport.last_sent().subject.starts_with("Re: Re:"));
}

#[tokio::test]
async fn test_reply_to_unknown_thread_sends_nothing() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, _store, _pool) = setup(transport.clone()).await;

    let result = dispatcher
        .send_reply(
            "no-such-thread",
            "jane@example.com",
            "Hello",
            "<p>hi</p>".to_string(),
            None,
            "reply",
            true,
        )
        .await;

    match result {
        Err(CourierError::ThreadNotFound(id)) => assert_eq!(id, "no-such-thread"),
        other => panic!("expected ThreadNotFound, got {:?}", other.err()),
    }
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_invalid_recipient_rejected_before_send() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, store, _pool) = setup(transport.clone()).await;

    let mut bad = request("abc123", "quote_ready");
    bad.to = "not-an-address".to_string();

    let result = dispatcher.send_with_thread(bad).await;

    assert!(matches!(result, Err(CourierError::InvalidEmail(_))));
    assert_eq!(transport.sent_count(), 0);
    assert!(store.find_by_inquiry("abc123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_transport_message_id_gets_fallback() {
    let transport = Arc::new(RecordingTransport::without_message_ids());
    let (dispatcher, store, _pool) = setup(transport).await;

    let outcome = dispatcher
        .send_with_thread(request("abc123", "quote_ready"))
        .await
        .unwrap();

    assert!(outcome.message_id.contains("@courier.local"));

    let emails = store.emails_for_thread(&outcome.thread_id).await.unwrap();
    assert_eq!(emails[0].message_id, outcome.message_id);
}

#[tokio::test]
async fn test_acknowledgment_derives_template_data() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, store, _pool) = setup(transport.clone()).await;

    let inquiry = Inquiry {
        id: "INQ-1001".to_string(),
        company: Some("Carter Interiors".to_string()),
        message: Some("Looking for a quote on the oak dining set.".to_string()),
        item_count: 3,
        submitted_at: Utc::now(),
        language: Language::En,
    };
    let contact = Contact {
        name: "Jane Carter".to_string(),
        email: "jane@example.com".to_string(),
    };

    let outcome = dispatcher
        .send_inquiry_acknowledgment(&inquiry, &contact)
        .await
        .unwrap();

    let mail = transport.last_sent();
    assert!(mail.subject.contains("INQ-1001"));
    assert!(mail.html_body.contains("Jane Carter"));
    assert!(mail.html_body.contains("Carter Interiors"));
    assert!(mail.html_body.contains("oak dining set"));
    assert!(!mail.html_body.contains("{{"));

    // a second acknowledgment reuses the thread instead of opening another
    let second = dispatcher
        .send_inquiry_acknowledgment(&inquiry, &contact)
        .await
        .unwrap();
    assert_eq!(second.thread_id, outcome.thread_id);

    let conversation = dispatcher.conversation("INQ-1001").await.unwrap().unwrap();
    assert_eq!(conversation.emails.len(), 2);
    assert_eq!(store.list_threads(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_acknowledgment_in_vietnamese() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, _store, _pool) = setup(transport.clone()).await;

    let inquiry = Inquiry {
        id: "INQ-2002".to_string(),
        company: None,
        message: None,
        item_count: 1,
        submitted_at: Utc::now(),
        language: Language::Vi,
    };
    let contact = Contact {
        name: "Trần Thu Hà".to_string(),
        email: "ha.tran@example.com".to_string(),
    };

    dispatcher
        .send_inquiry_acknowledgment(&inquiry, &contact)
        .await
        .unwrap();

    let mail = transport.last_sent();
    assert!(mail.subject.contains("INQ-2002"));
    assert!(mail.subject.contains("yêu cầu"));
    assert!(mail.html_body.contains("Kính gửi Trần Thu Hà"));
    // both conditional blocks are absent
    assert!(!mail.html_body.contains("công ty"));
    assert!(!mail.html_body.contains("{{"));
}

#[tokio::test]
async fn test_sent_but_not_recorded_is_surfaced() {
    let transport = Arc::new(RecordingTransport::new());
    let (dispatcher, _store, pool) = setup(transport.clone()).await;

    // break persistence while leaving thread lookup intact
    sqlx::query("DROP TABLE thread_emails")
        .execute(&pool)
        .await
        .unwrap();

    let result = dispatcher
        .send_with_thread(request("abc123", "quote_ready"))
        .await;

    match result {
        Err(CourierError::SentNotRecorded { message_id, .. }) => {
            assert!(!message_id.is_empty());
        }
        other => panic!("expected SentNotRecorded, got {:?}", other.err()),
    }

    // the message really went out; only the record is missing
    assert_eq!(transport.sent_count(), 1);
}

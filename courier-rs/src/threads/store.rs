//! Thread store - persistence for threads and sent-message records

use crate::error::CourierError;
use crate::threads::types::{EmailThread, NewEmail, NewThread, ThreadEmail, ThreadWithEmails};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

/// Manages conversation threads with database persistence
pub struct ThreadStore {
    db: SqlitePool,
}

impl ThreadStore {
    /// Create a new thread store
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize the thread tables
    ///
    /// The UNIQUE constraint on inquiry_id is what enforces one thread per
    /// inquiry; [`find_or_create`](Self::find_or_create) relies on it.
    pub async fn init_db(&self) -> Result<(), CourierError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS email_threads (
                id TEXT PRIMARY KEY,
                inquiry_id TEXT NOT NULL UNIQUE,
                customer_email TEXT NOT NULL,
                customer_name TEXT NOT NULL,
                subject TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS thread_emails (
                id TEXT PRIMARY KEY,
                thread_id TEXT NOT NULL,
                message_id TEXT NOT NULL,
                from_email TEXT NOT NULL,
                to_email TEXT NOT NULL,
                subject TEXT NOT NULL,
                html_body TEXT NOT NULL,
                text_body TEXT,
                email_type TEXT NOT NULL,
                is_from_admin BOOLEAN NOT NULL DEFAULT 0,
                sent_at TEXT NOT NULL,
                FOREIGN KEY (thread_id) REFERENCES email_threads(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_thread_emails_conversation
             ON thread_emails(thread_id, sent_at)",
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Find the thread for an inquiry, if one exists
    pub async fn find_by_inquiry(
        &self,
        inquiry_id: &str,
    ) -> Result<Option<EmailThread>, CourierError> {
        let row = sqlx::query(
            r#"
            SELECT id, inquiry_id, customer_email, customer_name, subject, created_at
            FROM email_threads
            WHERE inquiry_id = ?
            "#,
        )
        .bind(inquiry_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(row) = row {
            Ok(Some(self.row_to_thread(row)?))
        } else {
            Ok(None)
        }
    }

    /// Get a thread by its identifier
    pub async fn get_thread(&self, thread_id: &str) -> Result<Option<EmailThread>, CourierError> {
        let row = sqlx::query(
            r#"
            SELECT id, inquiry_id, customer_email, customer_name, subject, created_at
            FROM email_threads
            WHERE id = ?
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(row) = row {
            Ok(Some(self.row_to_thread(row)?))
        } else {
            Ok(None)
        }
    }

    /// Create a thread for an inquiry
    ///
    /// Fails with a database error if a thread already exists for the
    /// inquiry; most callers want [`find_or_create`](Self::find_or_create).
    pub async fn create_thread(&self, request: NewThread) -> Result<EmailThread, CourierError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO email_threads (
                id, inquiry_id, customer_email, customer_name, subject, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.inquiry_id)
        .bind(&request.customer_email)
        .bind(&request.customer_name)
        .bind(&request.subject)
        .bind(created_at.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(EmailThread {
            id,
            inquiry_id: request.inquiry_id,
            customer_email: request.customer_email,
            customer_name: request.customer_name,
            subject: request.subject,
            created_at,
        })
    }

    /// Return the thread for an inquiry, creating it if missing
    ///
    /// Two concurrent first-sends race on the insert; the UNIQUE constraint
    /// rejects the loser, which then re-fetches the surviving row instead of
    /// surfacing the constraint violation.
    pub async fn find_or_create(&self, request: NewThread) -> Result<EmailThread, CourierError> {
        if let Some(thread) = self.find_by_inquiry(&request.inquiry_id).await? {
            return Ok(thread);
        }

        let inquiry_id = request.inquiry_id.clone();
        match self.create_thread(request).await {
            Ok(thread) => Ok(thread),
            Err(CourierError::Database(e)) if is_unique_violation(&e) => {
                debug!("Lost thread-creation race for inquiry {}, re-fetching", inquiry_id);
                self.find_by_inquiry(&inquiry_id).await?.ok_or_else(|| {
                    CourierError::Storage(format!(
                        "Thread for inquiry {} vanished after create conflict",
                        inquiry_id
                    ))
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Record a sent message against its thread
    pub async fn record_email(&self, request: NewEmail) -> Result<ThreadEmail, CourierError> {
        let id = Uuid::new_v4().to_string();
        let sent_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO thread_emails (
                id, thread_id, message_id, from_email, to_email, subject,
                html_body, text_body, email_type, is_from_admin, sent_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.thread_id)
        .bind(&request.message_id)
        .bind(&request.from_email)
        .bind(&request.to_email)
        .bind(&request.subject)
        .bind(&request.html_body)
        .bind(&request.text_body)
        .bind(&request.email_type)
        .bind(request.is_from_admin)
        .bind(sent_at.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(ThreadEmail {
            id,
            thread_id: request.thread_id,
            message_id: request.message_id,
            from_email: request.from_email,
            to_email: request.to_email,
            subject: request.subject,
            html_body: request.html_body,
            text_body: request.text_body,
            email_type: request.email_type,
            is_from_admin: request.is_from_admin,
            sent_at,
        })
    }

    /// All messages in a thread, in conversation order
    ///
    /// Order is by send timestamp; two messages recorded in the same instant
    /// have no defined relative order.
    pub async fn emails_for_thread(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadEmail>, CourierError> {
        let rows = sqlx::query(
            r#"
            SELECT id, thread_id, message_id, from_email, to_email, subject,
                   html_body, text_body, email_type, is_from_admin, sent_at
            FROM thread_emails
            WHERE thread_id = ?
            ORDER BY sent_at
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(|row| self.row_to_email(row)).collect()
    }

    /// The whole conversation for an inquiry, if a thread exists
    pub async fn get_thread_with_emails(
        &self,
        inquiry_id: &str,
    ) -> Result<Option<ThreadWithEmails>, CourierError> {
        let thread = match self.find_by_inquiry(inquiry_id).await? {
            Some(t) => t,
            None => return Ok(None),
        };

        let emails = self.emails_for_thread(&thread.id).await?;
        Ok(Some(ThreadWithEmails { thread, emails }))
    }

    /// Most recently opened threads, for the admin overview
    pub async fn list_threads(&self, limit: i64) -> Result<Vec<EmailThread>, CourierError> {
        let rows = sqlx::query(
            r#"
            SELECT id, inquiry_id, customer_email, customer_name, subject, created_at
            FROM email_threads
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(|row| self.row_to_thread(row)).collect()
    }

    /// Convert database row to EmailThread
    fn row_to_thread(&self, row: sqlx::sqlite::SqliteRow) -> Result<EmailThread, CourierError> {
        use sqlx::Row;

        let created_at_str: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| CourierError::Parse(format!("Invalid created_at date: {}", e)))?
            .with_timezone(&Utc);

        Ok(EmailThread {
            id: row.try_get("id")?,
            inquiry_id: row.try_get("inquiry_id")?,
            customer_email: row.try_get("customer_email")?,
            customer_name: row.try_get("customer_name")?,
            subject: row.try_get("subject")?,
            created_at,
        })
    }

    /// Convert database row to ThreadEmail
    fn row_to_email(&self, row: sqlx::sqlite::SqliteRow) -> Result<ThreadEmail, CourierError> {
        use sqlx::Row;

        let sent_at_str: String = row.try_get("sent_at")?;
        let sent_at = DateTime::parse_from_rfc3339(&sent_at_str)
            .map_err(|e| CourierError::Parse(format!("Invalid sent_at date: {}", e)))?
            .with_timezone(&Utc);

        Ok(ThreadEmail {
            id: row.try_get("id")?,
            thread_id: row.try_get("thread_id")?,
            message_id: row.try_get("message_id")?,
            from_email: row.try_get("from_email")?,
            to_email: row.try_get("to_email")?,
            subject: row.try_get("subject")?,
            html_body: row.try_get("html_body")?,
            text_body: row.try_get("text_body")?,
            email_type: row.try_get("email_type")?,
            is_from_admin: row.try_get("is_from_admin")?,
            sent_at,
        })
    }
}

/// True when a database error is a UNIQUE constraint rejection
fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_store() -> ThreadStore {
        // one connection: an in-memory database exists per connection
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = ThreadStore::new(pool);
        store.init_db().await.unwrap();
        store
    }

    fn new_thread(inquiry_id: &str) -> NewThread {
        NewThread {
            inquiry_id: inquiry_id.to_string(),
            customer_email: "customer@example.com".to_string(),
            customer_name: "Pham Thu Ha".to_string(),
            subject: "Your inquiry".to_string(),
        }
    }

    fn new_email(thread_id: &str, email_type: &str) -> NewEmail {
        NewEmail {
            thread_id: thread_id.to_string(),
            message_id: format!("<{}@test>", Uuid::new_v4()),
            from_email: "sales@example.com".to_string(),
            to_email: "customer@example.com".to_string(),
            subject: "Your inquiry".to_string(),
            html_body: "<p>body</p>".to_string(),
            text_body: Some("body".to_string()),
            email_type: email_type.to_string(),
            is_from_admin: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_thread() {
        let store = setup_test_store().await;

        let created = store.create_thread(new_thread("inq-1")).await.unwrap();
        assert_eq!(created.inquiry_id, "inq-1");

        let found = store.find_by_inquiry("inq-1").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.customer_name, "Pham Thu Ha");

        assert!(store.find_by_inquiry("inq-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected_by_constraint() {
        let store = setup_test_store().await;

        store.create_thread(new_thread("inq-1")).await.unwrap();
        let result = store.create_thread(new_thread("inq-1")).await;

        match result {
            Err(CourierError::Database(e)) => assert!(is_unique_violation(&e)),
            other => panic!("expected unique violation, got {:?}", other.map(|t| t.id)),
        }
    }

    #[tokio::test]
    async fn test_find_or_create_reuses_existing() {
        let store = setup_test_store().await;

        let first = store.find_or_create(new_thread("inq-1")).await.unwrap();
        let second = store.find_or_create(new_thread("inq-1")).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.list_threads(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_record_and_list_emails_in_order() {
        let store = setup_test_store().await;
        let thread = store.create_thread(new_thread("inq-1")).await.unwrap();

        store
            .record_email(new_email(&thread.id, "inquiry_acknowledgment"))
            .await
            .unwrap();
        store
            .record_email(new_email(&thread.id, "quote_ready"))
            .await
            .unwrap();

        let emails = store.emails_for_thread(&thread.id).await.unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].email_type, "inquiry_acknowledgment");
        assert_eq!(emails[1].email_type, "quote_ready");
        assert!(emails[0].sent_at <= emails[1].sent_at);
    }

    #[tokio::test]
    async fn test_get_thread_with_emails() {
        let store = setup_test_store().await;
        let thread = store.create_thread(new_thread("inq-1")).await.unwrap();
        store
            .record_email(new_email(&thread.id, "follow_up"))
            .await
            .unwrap();

        let conversation = store
            .get_thread_with_emails("inq-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(conversation.thread.id, thread.id);
        assert_eq!(conversation.emails.len(), 1);

        assert!(store
            .get_thread_with_emails("missing")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_concurrent_find_or_create_single_thread() {
        use std::sync::Arc;

        let store = Arc::new(setup_test_store().await);

        let mut handles = vec![];
        for _ in 0..5 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.find_or_create(new_thread("inq-race")).await.unwrap()
            }));
        }

        let mut ids = vec![];
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.dedup();
        assert_eq!(ids.len(), 1);
        assert_eq!(store.list_threads(10).await.unwrap().len(), 1);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SMTP protocol error: {0}")]
    SmtpProtocol(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Transport timed out: {0}")]
    TransportTimeout(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    /// The message reached the transport but the record write failed.
    /// The send cannot be undone; callers must treat this as
    /// "sent but not recorded" and reconcile manually.
    #[error("email sent (message id {message_id}) but not recorded: {source}")]
    SentNotRecorded {
        message_id: String,
        #[source]
        source: Box<CourierError>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CourierError>;

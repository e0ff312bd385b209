//! Mail transport - SMTP relay client for outgoing messages
//!
//! The dispatcher talks to the outside world through the [`MailTransport`]
//! trait; the production implementation speaks SMTP (RFC 5321) to a
//! configured relay.
//!
//! # Features
//! - multipart/alternative messages carrying both body formats
//! - generated Message-ID returned to the caller as the receipt
//! - hard timeout on the whole transaction

use crate::config::SmtpConfig;
use crate::dispatch::types::{OutgoingEmail, SendReceipt};
use crate::error::{CourierError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Basic recipient address validation, applied before any I/O
pub fn validate_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(CourierError::InvalidEmail("Address is empty".to_string()));
    }

    let mut parts = address.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if parts.next().is_some() {
        return Err(CourierError::InvalidEmail(format!(
            "More than one @ in {}",
            address
        )));
    }

    if local.is_empty() || domain.is_empty() {
        return Err(CourierError::InvalidEmail(format!(
            "Missing local part or domain in {}",
            address
        )));
    }

    if !domain.contains('.') {
        return Err(CourierError::InvalidEmail(format!(
            "Domain without a dot in {}",
            address
        )));
    }

    Ok(())
}

/// Anything that can deliver one email and report a message id
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver the message, returning the transport's receipt
    ///
    /// Any error return counts as a failed send; the dispatcher does not
    /// distinguish reported failure from thrown failure.
    async fn send(&self, mail: &OutgoingEmail) -> Result<SendReceipt>;
}

/// SMTP client that relays outgoing mail through a fixed server
pub struct SmtpRelayTransport {
    relay_addr: String,
    from_address: String,
    from_name: String,
    timeout: Duration,
}

impl SmtpRelayTransport {
    /// Create a new relay transport
    pub fn new(
        relay_addr: String,
        from_address: String,
        from_name: String,
        timeout: Duration,
    ) -> Self {
        Self {
            relay_addr,
            from_address,
            from_name,
            timeout,
        }
    }

    /// Build a transport from the smtp config section
    pub fn from_config(config: &SmtpConfig) -> Self {
        Self::new(
            config.relay_addr.clone(),
            config.from_address.clone(),
            config.from_name.clone(),
            Duration::from_secs(config.send_timeout_secs),
        )
    }

    /// Generate a Message-ID under the sender's domain
    fn generate_message_id(&self) -> String {
        let domain = self
            .from_address
            .split('@')
            .nth(1)
            .unwrap_or("localhost");
        format!("<{}@{}>", Uuid::new_v4().simple(), domain)
    }

    /// Build an RFC 5322 message with both body formats
    fn build_message(&self, mail: &OutgoingEmail, message_id: &str) -> String {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S +0000");

        let mut message = format!(
            "From: {} <{}>\r\n\
             To: <{}>\r\n\
             Subject: {}\r\n\
             Date: {}\r\n\
             Message-ID: {}\r\n\
             MIME-Version: 1.0\r\n",
            self.from_name, self.from_address, mail.to, mail.subject, date, message_id
        );

        match &mail.text_body {
            Some(text) => {
                let boundary = format!("----=_Part_{}", Uuid::new_v4().simple());
                message.push_str(&format!(
                    "Content-Type: multipart/alternative; boundary=\"{}\"\r\n\
                     \r\n\
                     --{}\r\n\
                     Content-Type: text/plain; charset=\"UTF-8\"\r\n\
                     Content-Transfer-Encoding: 8bit\r\n\
                     \r\n\
                     {}\r\n\
                     --{}\r\n\
                     Content-Type: text/html; charset=\"UTF-8\"\r\n\
                     Content-Transfer-Encoding: 8bit\r\n\
                     \r\n\
                     {}\r\n\
                     --{}--",
                    boundary, boundary, text, boundary, mail.html_body, boundary
                ));
            }
            None => {
                message.push_str(&format!(
                    "Content-Type: text/html; charset=\"UTF-8\"\r\n\
                     Content-Transfer-Encoding: 8bit\r\n\
                     \r\n\
                     {}",
                    mail.html_body
                ));
            }
        }

        message
    }

    /// Run the SMTP transaction against the relay
    async fn deliver(&self, mail: &OutgoingEmail, message: &str) -> Result<()> {
        let stream = TcpStream::connect(&self.relay_addr).await?;
        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);

        let greeting = self.read_line(&mut reader).await?;
        if !greeting.starts_with("220") {
            error!("Invalid greeting from {}: {}", self.relay_addr, greeting);
            return Err(CourierError::SmtpProtocol(format!(
                "Invalid greeting: {}",
                greeting
            )));
        }
        debug!("Received greeting: {}", greeting.trim());

        self.write_line(&mut writer, &format!("EHLO {}", self.get_hostname()))
            .await?;
        self.read_response(&mut reader, "250").await?;

        self.write_line(&mut writer, &format!("MAIL FROM:<{}>", self.from_address))
            .await?;
        self.read_response(&mut reader, "250").await?;

        self.write_line(&mut writer, &format!("RCPT TO:<{}>", mail.to))
            .await?;
        self.read_response(&mut reader, "250").await?;

        self.write_line(&mut writer, "DATA").await?;
        self.read_response(&mut reader, "354").await?;

        writer.write_all(message.as_bytes()).await?;
        writer.write_all(b"\r\n.\r\n").await?;
        self.read_response(&mut reader, "250").await?;

        self.write_line(&mut writer, "QUIT").await?;
        let _response = self.read_line(&mut reader).await?;

        Ok(())
    }

    /// Read a line from the stream
    async fn read_line<R>(&self, reader: &mut BufReader<R>) -> Result<String>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut line = String::new();
        reader.read_line(&mut line).await?;
        Ok(line)
    }

    /// Read response and verify it starts with expected code
    async fn read_response<R>(&self, reader: &mut BufReader<R>, expected: &str) -> Result<String>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut full_response = String::new();

        loop {
            let line = self.read_line(reader).await?;
            debug!("< {}", line.trim());

            full_response.push_str(&line);

            // last line has a space after the code instead of a dash
            if line.len() >= 4 && &line[3..4] == " " {
                break;
            }
        }

        if !full_response.starts_with(expected) {
            error!("Unexpected response: {}", full_response);
            return Err(CourierError::SmtpProtocol(format!(
                "Expected {}, got: {}",
                expected, full_response
            )));
        }

        Ok(full_response)
    }

    /// Write a line to the stream
    async fn write_line<W>(&self, writer: &mut W, line: &str) -> Result<()>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        debug!("> {}", line);
        writer.write_all(format!("{}\r\n", line).as_bytes()).await?;
        Ok(())
    }

    /// Get local hostname for EHLO
    fn get_hostname(&self) -> String {
        gethostname::gethostname().to_string_lossy().to_string()
    }
}

#[async_trait]
impl MailTransport for SmtpRelayTransport {
    async fn send(&self, mail: &OutgoingEmail) -> Result<SendReceipt> {
        let message_id = self.generate_message_id();
        let message = self.build_message(mail, &message_id);

        info!(
            "Sending mail to {} via {} ({})",
            mail.to, self.relay_addr, message_id
        );

        match tokio::time::timeout(self.timeout, self.deliver(mail, &message)).await {
            Ok(result) => {
                result?;
                info!("Mail sent successfully to {}", mail.to);
                Ok(SendReceipt {
                    message_id: Some(message_id),
                })
            }
            Err(_) => Err(CourierError::TransportTimeout(format!(
                "No response from {} within {:?}",
                self.relay_addr, self.timeout
            ))),
        }
    }
}

//! Outbound Mail
//!
//! SMTP implementation of the notification boundary. The rest of the
//! application only sees the `NotificationSender` trait: an address,
//! a subject, and a body, with success or failure per send.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpSettings;

/// Errors raised while building or sending a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Boundary trait for sending one notification to one address.
///
/// Implementations must not block sibling sends; failures are reported
/// per address and never escalate beyond the caller's dispatch report.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// SMTP-backed notification sender (STARTTLS relay).
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build a notifier from SMTP settings.
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotifyError> {
        let creds = Credentials::new(settings.username.clone(), settings.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .credentials(creds)
            .build();

        let from: Mailbox = settings.from.parse()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl NotificationSender for SmtpNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(email).await?;

        Ok(())
    }
}

//! RSVP Service
//!
//! Orchestrates one accepted submission: the transactional write and
//! the confirmation-mail batch run in parallel and do not order each
//! other. A mail failure never rolls back the transaction; a write
//! failure never suppresses the attempted mail.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::request::SubmitRequest;
use crate::application::services::notification::{self, DispatchReport};
use crate::domain::{Guest, NewGuest, Party};
use crate::infrastructure::email::NotificationSender;
use crate::infrastructure::repositories::RsvpRepository;
use crate::shared::error::AppError;

/// A validated submission: a non-empty ordered sequence of guests.
///
/// Only constructed from a `SubmitRequest` that passed validation, so
/// the non-empty invariant holds by construction.
#[derive(Debug, Clone)]
pub struct Submission {
    pub guests: Vec<NewGuest>,
}

impl From<SubmitRequest> for Submission {
    fn from(request: SubmitRequest) -> Self {
        Self {
            guests: request.guests.into_iter().map(NewGuest::from).collect(),
        }
    }
}

/// RSVP service errors
#[derive(Debug, thiserror::Error)]
pub enum RsvpError {
    #[error(transparent)]
    Persistence(#[from] AppError),

    #[error("{failed} of {total} confirmation emails failed")]
    Notification { failed: usize, total: usize },
}

/// RSVP service trait for dependency injection
#[async_trait]
pub trait RsvpService: Send + Sync {
    /// Persist a submission and dispatch confirmation mail.
    async fn submit(&self, submission: Submission) -> Result<Party, RsvpError>;

    /// Fetch the full guest list for the admin view.
    async fn list_guests(&self) -> Result<Vec<Guest>, RsvpError>;
}

/// RsvpService implementation
pub struct RsvpServiceImpl<R>
where
    R: RsvpRepository,
{
    repo: Arc<R>,
    notifier: Arc<dyn NotificationSender>,
}

impl<R> RsvpServiceImpl<R>
where
    R: RsvpRepository,
{
    /// Create a new RsvpServiceImpl
    pub fn new(repo: Arc<R>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { repo, notifier }
    }

    fn log_dispatch(&self, report: &DispatchReport) {
        for failure in &report.failures {
            tracing::warn!(
                email = %failure.email,
                reason = %failure.reason,
                "Confirmation email failed"
            );
        }
    }
}

#[async_trait]
impl<R> RsvpService for RsvpServiceImpl<R>
where
    R: RsvpRepository,
{
    async fn submit(&self, submission: Submission) -> Result<Party, RsvpError> {
        let guests = &submission.guests;

        // The write and the mail batch intentionally race.
        let (persisted, report) = tokio::join!(
            self.repo.create_party_with_guests(guests),
            notification::dispatch_confirmations(self.notifier.as_ref(), guests),
        );

        self.log_dispatch(&report);

        // A persistence failure wins over any mail outcome.
        let party = persisted?;
        tracing::info!(
            party_id = party.id,
            guests = guests.len(),
            "OSA submission stored"
        );

        if !report.all_sent() {
            return Err(RsvpError::Notification {
                failed: report.failures.len(),
                total: guests.len(),
            });
        }

        Ok(party)
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, RsvpError> {
        Ok(self.repo.list_guests().await?)
    }
}

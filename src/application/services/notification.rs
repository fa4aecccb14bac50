//! Confirmation Mail Dispatch
//!
//! Renders the per-guest confirmation template and sends the batch as
//! independent concurrent tasks. Individual failures end up in the
//! dispatch report; they never cancel sibling sends.

use futures::future::join_all;

use crate::domain::NewGuest;
use crate::infrastructure::email::NotificationSender;

/// Subject line of every confirmation mail
pub const CONFIRMATION_SUBJECT: &str = "Tack för din OSA!";

/// One failed send within a batch
#[derive(Debug, Clone)]
pub struct DispatchFailure {
    pub email: String,
    pub reason: String,
}

/// Outcome of one dispatch batch
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub sent: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    /// True when every send in the batch succeeded.
    pub fn all_sent(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Send a confirmation mail to every guest in the submission.
///
/// Sends run concurrently; the report records which addresses failed.
pub async fn dispatch_confirmations(
    sender: &dyn NotificationSender,
    guests: &[NewGuest],
) -> DispatchReport {
    let sends = guests.iter().map(|guest| async move {
        let body = confirmation_body(guest);
        sender
            .send(&guest.email, CONFIRMATION_SUBJECT, &body)
            .await
            .map_err(|e| DispatchFailure {
                email: guest.email.clone(),
                reason: e.to_string(),
            })
    });

    let mut report = DispatchReport::default();
    for result in join_all(sends).await {
        match result {
            Ok(()) => report.sent += 1,
            Err(failure) => report.failures.push(failure),
        }
    }
    report
}

/// Render the confirmation body with the guest's submitted values.
pub fn confirmation_body(guest: &NewGuest) -> String {
    let yes_no = |flag: bool| if flag { "Ja" } else { "Nej" };
    let or_dash = |value: &Option<String>| match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => "-".to_string(),
    };

    format!(
        r#"Hej {} {}!

Vi har tagit emot din OSA med följande uppgifter:

  Vigsel:        {}
  Middag fredag: {}
  Specialkost:   {}
  Övrigt:        {}

Hör av dig till brudparet om något inte stämmer.
"#,
        guest.name,
        guest.last_name,
        yes_no(guest.attending_wedding),
        yes_no(guest.attending_dinner),
        or_dash(&guest.special_food),
        or_dash(&guest.misc),
    )
}

use crate::domain::model::{FormSubmission, OutboundEmail, RelayResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Outbound email dispatch. Implemented by the SMTP adapter; tests swap in
/// a recording double to count and inspect dispatches.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

/// Client-side path to the relay endpoint. `Ok` carries any parseable
/// relay response (including logical failures); `Err` means the request
/// never produced one.
#[async_trait]
pub trait RelayGateway: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<RelayResponse>;
}

/// Source of the current calendar day for the no-past-dates rule.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

use crate::core::controller::{Event, PresentationController, SubmitOutcome};
use crate::core::effects::Effect;
use crate::core::forms::FormDraft;
use crate::domain::model::FormSubmission;
use crate::domain::ports::{Clock, RelayGateway};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Drives one form submission end to end: validation and guard through
/// the controller, the network call through the gateway, then the
/// settle event. The controller lock is held only around the two
/// synchronous handle calls, never across the request, so a concurrent
/// submit attempt observes the guard immediately.
pub struct FormSubmitter<G: RelayGateway, C: Clock> {
    gateway: G,
    controller: Arc<Mutex<PresentationController<C>>>,
}

impl<G: RelayGateway, C: Clock> FormSubmitter<G, C> {
    pub fn new(gateway: G, controller: Arc<Mutex<PresentationController<C>>>) -> Self {
        Self {
            gateway,
            controller,
        }
    }

    pub fn controller(&self) -> Arc<Mutex<PresentationController<C>>> {
        Arc::clone(&self.controller)
    }

    pub async fn submit(&self, draft: FormDraft) -> Vec<Effect> {
        let form = draft.kind();
        let mut effects = {
            let mut controller = self.controller.lock().await;
            controller.handle(Event::SubmitRequested(draft))
        };

        let Some(submission) = take_dispatch(&mut effects) else {
            // guarded or invalid; nothing left the controller
            return effects;
        };

        let outcome = match self.gateway.submit(&submission).await {
            Ok(response) => SubmitOutcome::Response(response),
            Err(e) => {
                tracing::warn!("Form submission request failed: {}", e);
                SubmitOutcome::NetworkError
            }
        };

        let mut controller = self.controller.lock().await;
        effects.extend(controller.handle(Event::SubmissionSettled { form, outcome }));
        effects
    }
}

/// Removes the dispatch effect so the host never double-sends.
fn take_dispatch(effects: &mut Vec<Effect>) -> Option<FormSubmission> {
    let index = effects
        .iter()
        .position(|e| matches!(e, Effect::Dispatch { .. }))?;
    match effects.remove(index) {
        Effect::Dispatch { submission } => Some(submission),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::PresentationController;
    use crate::core::effects::DomPatch;
    use crate::core::forms::ReservationDraft;
    use crate::core::locale::PageModel;
    use crate::domain::model::{FormKind, RelayResponse};
    use crate::domain::ports::Clock;
    use crate::utils::error::{Result, SiteError};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
        }
    }

    #[derive(Default)]
    struct ScriptedGateway {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl RelayGateway for ScriptedGateway {
        async fn submit(&self, _submission: &FormSubmission) -> Result<RelayResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SiteError::ValidationError {
                    message: "connection reset".to_string(),
                });
            }
            Ok(RelayResponse::accepted("ok"))
        }
    }

    fn submitter(fail: bool) -> (FormSubmitter<ScriptedGateway, FixedClock>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = ScriptedGateway {
            calls: Arc::clone(&calls),
            fail,
        };
        let controller = Arc::new(Mutex::new(PresentationController::new(
            PageModel::default(),
            FixedClock,
        )));
        (FormSubmitter::new(gateway, controller), calls)
    }

    fn draft() -> FormDraft {
        FormDraft::Reservation(ReservationDraft {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555-0100".to_string(),
            date: "2026-08-07".to_string(),
            service: "consultation".to_string(),
            doctor: String::new(),
            notes: String::new(),
            terms_accepted: true,
        })
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let (submitter, calls) = submitter(false);
        let effects = submitter.submit(draft()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!effects.iter().any(|e| matches!(e, Effect::Dispatch { .. })));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Dom(DomPatch::ResetForm { form: FormKind::Reservation })
        )));
    }

    #[tokio::test]
    async fn test_gateway_error_becomes_network_feedback() {
        let (submitter, calls) = submitter(true);
        let effects = submitter.submit(draft()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let feedback = effects
            .iter()
            .find_map(|e| match e {
                Effect::Dom(DomPatch::ShowFeedback { message, .. }) => Some(message.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(feedback.heading, "خطأ في الاتصال");
        // guard released for retry
        let controller = submitter.controller();
        assert!(!controller.lock().await.is_in_flight(FormKind::Reservation));
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_gateway() {
        let (submitter, calls) = submitter(false);
        let mut invalid = match draft() {
            FormDraft::Reservation(d) => d,
            _ => unreachable!(),
        };
        invalid.email = "nope".to_string();

        let effects = submitter.submit(FormDraft::Reservation(invalid)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Dom(DomPatch::FocusField { field }) if field == "email"
        )));
    }
}

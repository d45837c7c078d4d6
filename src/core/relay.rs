use crate::config::RelayConfig;
use crate::core::fields::FormFields;
use crate::core::templates;
use crate::domain::model::{
    InterestForm, MailAddress, OutboundEmail, RelayResponse, ReservationForm,
};
use crate::domain::ports::Mailer;
use crate::utils::error::{Result, SiteError};
use lettre::Address;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will contact you soon.";

const RESERVATION_FIELDS_REQUIRED: &str = "All reservation fields are required.";
const INTEREST_FIELDS_REQUIRED: &str = "Please provide name, email and at least one interest.";

/// Stateless submission handler: validate, render, dispatch operator
/// notification then submitter confirmation. Any dispatch failure aborts
/// the whole request; there is no retry and no partial success.
pub struct SubmissionRelay<M: Mailer> {
    mailer: M,
    config: RelayConfig,
}

impl<M: Mailer> SubmissionRelay<M> {
    pub fn new(mailer: M, config: RelayConfig) -> Self {
        Self { mailer, config }
    }

    pub async fn handle(&self, fields: FormFields) -> Result<RelayResponse> {
        let form_type = match fields.get("formType") {
            "interest" => "interest",
            // reservation is the default branch for absent or unknown values
            _ => "reservation",
        };
        tracing::info!(form_type, "Handling form submission");

        let (subject, body, submitter_name, submitter_email) = if form_type == "interest" {
            let full_name = fields.get("fullName").to_string();
            let email = fields.get("email").to_string();
            let message = fields.get("message").to_string();
            let interests = fields.interests().to_vec();

            if full_name.is_empty() || email.is_empty() || interests.is_empty() {
                return Err(SiteError::ValidationError {
                    message: INTEREST_FIELDS_REQUIRED.to_string(),
                });
            }

            let form = InterestForm {
                full_name: full_name.clone(),
                email: email.clone(),
                interests,
                message,
            };
            (
                format!("{} - New Interest Submission", self.config.company_name),
                templates::interest_notification(&form),
                full_name,
                email,
            )
        } else {
            let full_name = fields.get("fullName").to_string();
            let email = fields.get("email").to_string();
            let phone = fields.get("phone").to_string();
            let date = fields.get("date").to_string();
            let service = fields.get("interest").to_string();

            if full_name.is_empty()
                || email.is_empty()
                || phone.is_empty()
                || date.is_empty()
                || service.is_empty()
            {
                return Err(SiteError::ValidationError {
                    message: RESERVATION_FIELDS_REQUIRED.to_string(),
                });
            }

            let form = ReservationForm {
                full_name: full_name.clone(),
                email: email.clone(),
                phone,
                date,
                service,
                doctor: fields.get("doctor").to_string(),
                notes: fields.get("notes").to_string(),
            };
            (
                format!("{} - New Reservation", self.config.company_name),
                templates::reservation_notification(&form),
                full_name,
                email,
            )
        };

        // stricter RFC-oriented check, independent of the client-side shape test
        submitter_email.parse::<Address>()?;

        let operator = OutboundEmail {
            from: MailAddress::named(
                self.config.smtp_email.clone(),
                format!("Contact Form - {}", self.config.company_name),
            ),
            to: self
                .config
                .recipients
                .iter()
                .map(|r| MailAddress::new(r.clone()))
                .collect(),
            reply_to: Some(MailAddress::named(
                submitter_email.clone(),
                submitter_name.clone(),
            )),
            subject,
            html_body: body.html,
            text_body: body.text,
        };
        self.mailer.send(&operator).await?;
        tracing::debug!("Operator notification dispatched");

        let confirmation_body = templates::confirmation(
            &submitter_name,
            &self.config.company_name,
            self.config.website_url.as_deref(),
        );
        let confirmation = OutboundEmail {
            from: MailAddress::named(
                self.config.company_email.clone(),
                self.config.company_name.clone(),
            ),
            to: vec![MailAddress::named(submitter_email, submitter_name)],
            reply_to: None,
            subject: format!("Thank you for contacting {}!", self.config.company_name),
            html_body: confirmation_body.html,
            text_body: confirmation_body.text,
        };
        self.mailer.send(&confirmation).await?;
        tracing::debug!("Submitter confirmation dispatched");

        Ok(RelayResponse::accepted(THANK_YOU_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<OutboundEmail>>>,
        fail_from: Option<usize>,
    }

    impl RecordingMailer {
        fn failing_from(n: usize) -> Self {
            Self {
                sent: Arc::default(),
                fail_from: Some(n),
            }
        }

        async fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<()> {
            let mut sent = self.sent.lock().await;
            if let Some(n) = self.fail_from {
                if sent.len() >= n {
                    return Err(SiteError::MailDispatchError {
                        message: "connection refused".to_string(),
                    });
                }
            }
            sent.push(email.clone());
            Ok(())
        }
    }

    fn config() -> RelayConfig {
        RelayConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_email: "forms@example.com".to_string(),
            smtp_password: "app-password".to_string(),
            recipients: vec!["ops@example.com".to_string(), "desk@example.com".to_string()],
            company_name: "Pash Medical Solutions".to_string(),
            company_email: "info@example.com".to_string(),
            website_url: Some("https://example.com".to_string()),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    fn reservation_fields() -> FormFields {
        let mut fields = FormFields::new();
        fields.insert("formType", "reservation".to_string());
        fields.insert("fullName", "Jane Doe".to_string());
        fields.insert("email", "jane@example.com".to_string());
        fields.insert("phone", "+1 555-0100".to_string());
        fields.insert("date", "2026-09-01".to_string());
        fields.insert("interest", "consultation".to_string());
        fields
    }

    #[tokio::test]
    async fn test_valid_reservation_dispatches_two_emails() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let response = relay.handle(reservation_fields()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some(THANK_YOU_MESSAGE));

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 2);

        // operator notification first, to every recipient, reply-to submitter
        let operator = &sent[0];
        assert_eq!(operator.subject, "Pash Medical Solutions - New Reservation");
        assert_eq!(operator.to.len(), 2);
        assert_eq!(
            operator.reply_to.as_ref().unwrap().email,
            "jane@example.com"
        );
        assert!(operator.html_body.contains("Jane Doe"));

        // then the confirmation to the submitter
        let confirmation = &sent[1];
        assert_eq!(confirmation.to.len(), 1);
        assert_eq!(confirmation.to[0].email, "jane@example.com");
        assert_eq!(
            confirmation.subject,
            "Thank you for contacting Pash Medical Solutions!"
        );
    }

    #[tokio::test]
    async fn test_missing_phone_rejected_with_no_dispatch() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = reservation_fields();
        fields.insert("phone", String::new());
        let err = relay.handle(fields).await.unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "All reservation fields are required.");
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_by_strict_check() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = reservation_fields();
        fields.insert("email", "not-an-email".to_string());
        let err = relay.handle(fields).await.unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid email address.");
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_short_but_valid_email_accepted() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = reservation_fields();
        fields.insert("email", "a@b.co".to_string());
        assert!(relay.handle(fields).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_operator_dispatch_failure_aborts_before_confirmation() {
        let mailer = RecordingMailer::failing_from(0);
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let err = relay.handle(reservation_fields()).await.unwrap_err();
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("Failed to send email:"));
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_confirmation_dispatch_failure_is_still_an_error() {
        let mailer = RecordingMailer::failing_from(1);
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let err = relay.handle(reservation_fields()).await.unwrap_err();
        assert!(!err.is_client_error());
        assert_eq!(mailer.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn test_interest_branch_builds_interest_notification() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = FormFields::new();
        fields.insert("formType", "interest".to_string());
        fields.insert("fullName", "Jane Doe".to_string());
        fields.insert("email", "jane@example.com".to_string());
        fields.insert("interests[]", "training".to_string());
        fields.insert("interests[]", "nursing".to_string());

        let response = relay.handle(fields).await.unwrap();
        assert!(response.success);

        let sent = mailer.sent().await;
        assert_eq!(
            sent[0].subject,
            "Pash Medical Solutions - New Interest Submission"
        );
        assert!(sent[0].html_body.contains("training, nursing"));
    }

    #[tokio::test]
    async fn test_interest_requires_at_least_one_interest() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = FormFields::new();
        fields.insert("formType", "interest".to_string());
        fields.insert("fullName", "Jane Doe".to_string());
        fields.insert("email", "jane@example.com".to_string());

        let err = relay.handle(fields).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide name, email and at least one interest."
        );
        assert!(mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_form_type_falls_back_to_reservation() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        // an empty body with an unknown type hits the reservation rules
        let mut empty = FormFields::new();
        empty.insert("formType", "something-else".to_string());
        let err = relay.handle(empty).await.unwrap_err();
        assert_eq!(err.to_string(), "All reservation fields are required.");

        // with full reservation fields the unknown type still succeeds
        let mut fields = reservation_fields();
        fields.insert("formType", "something-else".to_string());
        assert!(relay.handle(fields).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_user_markup_is_escaped_in_notification() {
        let mailer = RecordingMailer::default();
        let relay = SubmissionRelay::new(mailer.clone(), config());

        let mut fields = reservation_fields();
        fields.insert("notes", "<img src=x onerror=alert(1)>\nsecond line".to_string());
        relay.handle(fields).await.unwrap();

        let sent = mailer.sent().await;
        assert!(!sent[0].html_body.contains("<img src=x"));
        assert!(sent[0].html_body.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(sent[0].html_body.contains("<br>"));
    }
}

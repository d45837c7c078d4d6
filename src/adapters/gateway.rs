use crate::domain::model::{FormSubmission, RelayResponse};
use crate::domain::ports::RelayGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Form-encoded POST to the relay endpoint. Any response with a
/// parseable JSON body — success or logical failure — comes back as
/// `Ok`; transport problems surface as errors and the caller shows the
/// connectivity message.
pub struct HttpRelayGateway {
    client: Client,
    endpoint: String,
}

impl HttpRelayGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RelayGateway for HttpRelayGateway {
    async fn submit(&self, submission: &FormSubmission) -> Result<RelayResponse> {
        tracing::debug!(endpoint = %self.endpoint, "Posting form submission");
        let response = self
            .client
            .post(&self.endpoint)
            .form(&submission.form_pairs())
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Relay responded");
        let body = response.json::<RelayResponse>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{InterestForm, ReservationForm};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_submit_posts_form_encoded_pairs() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send-email")
                .body_contains("formType=reservation")
                .body_contains("fullName=Jane+Doe")
                .body_contains("interest=consultation");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"success": true, "message": "ok"}));
        });

        let gateway = HttpRelayGateway::new(server.url("/send-email"));
        let submission = FormSubmission::Reservation(ReservationForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555-0100".to_string(),
            date: "2026-09-01".to_string(),
            service: "consultation".to_string(),
            doctor: String::new(),
            notes: String::new(),
        });

        let response = gateway.submit(&submission).await.unwrap();
        mock.assert();
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_logical_failure_status_still_parses() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send-email");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"success": false, "message": "Invalid email address."}));
        });

        let gateway = HttpRelayGateway::new(server.url("/send-email"));
        let submission = FormSubmission::Interest(InterestForm {
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            interests: vec!["training".to_string()],
            message: String::new(),
        });

        let response = gateway.submit(&submission).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid email address."));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // nothing listens on this port
        let gateway = HttpRelayGateway::new("http://127.0.0.1:9/send-email");
        let submission = FormSubmission::Interest(InterestForm {
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            interests: vec!["training".to_string()],
            message: String::new(),
        });
        assert!(gateway.submit(&submission).await.is_err());
    }
}

use crate::core::fields::FormFields;
use crate::core::relay::SubmissionRelay;
use crate::domain::model::RelayResponse;
use crate::domain::ports::Mailer;
use crate::utils::error::{Result, SiteError};
use axum::body::to_bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

const MAX_FORM_BYTES: usize = 64 * 1024;

pub fn router<M: Mailer + 'static>(relay: Arc<SubmissionRelay<M>>) -> Router {
    Router::new()
        .route("/send-email", post(send_email::<M>))
        .route("/healthz", get(healthz))
        .with_state(relay)
}

async fn healthz() -> &'static str {
    "ok"
}

/// One submission per request. Client errors come back as 400 with the
/// relay's message, dispatch failures as 500; both use the same JSON
/// envelope the site scripts read.
async fn send_email<M: Mailer + 'static>(
    State(relay): State<Arc<SubmissionRelay<M>>>,
    request: Request,
) -> (StatusCode, Json<RelayResponse>) {
    let fields = match read_fields(request).await {
        Ok(fields) => fields,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(RelayResponse::rejected(e.to_string())),
            )
        }
    };

    match relay.handle(fields).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!("Form dispatch failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(RelayResponse::rejected(e.to_string())))
        }
    }
}

/// The site posts either urlencoded bodies or file-free multipart
/// (`FormData`); both collapse into the same field map.
async fn read_fields(request: Request) -> Result<FormFields> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(malformed)?;
        let mut fields = FormFields::new();
        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field.text().await.map_err(malformed)?;
            fields.insert(&name, value);
        }
        Ok(fields)
    } else {
        let body = to_bytes(request.into_body(), MAX_FORM_BYTES)
            .await
            .map_err(|e| SiteError::ValidationError {
                message: format!("Unreadable request body: {}", e),
            })?;
        Ok(FormFields::parse(&body))
    }
}

fn malformed<E: std::fmt::Display>(e: E) -> SiteError {
    SiteError::ValidationError {
        message: format!("Malformed form data: {}", e),
    }
}

pub mod controller;
pub mod coverage;
pub mod effects;
pub mod fields;
pub mod forms;
pub mod i18n;
pub mod locale;
pub mod relay;
pub mod submit;
pub mod templates;
pub mod typing;

pub use crate::domain::model::{
    FeedbackKind, FeedbackMessage, FormKind, FormSubmission, Locale, RelayResponse,
};
pub use crate::domain::ports::{Clock, Mailer, RelayGateway, SystemClock};
pub use crate::utils::error::Result;

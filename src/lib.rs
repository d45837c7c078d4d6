pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::{HttpRelayGateway, SmtpMailer};
pub use crate::config::RelayConfig;
pub use crate::core::controller::PresentationController;
pub use crate::core::relay::SubmissionRelay;
pub use crate::core::submit::FormSubmitter;
pub use crate::utils::error::{Result, SiteError};

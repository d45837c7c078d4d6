// Adapters layer: concrete implementations for external systems (SMTP, relay endpoint).

pub mod gateway;
pub mod smtp;

pub use gateway::HttpRelayGateway;
pub use smtp::SmtpMailer;

pub mod cli;
pub mod relay;

pub use cli::ServerCli;
pub use relay::RelayConfig;

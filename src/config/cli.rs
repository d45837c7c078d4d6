use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "careform")]
#[command(about = "Contact and reservation form relay for the care site")]
pub struct ServerCli {
    /// TOML config file; the environment is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub json_logs: bool,
}

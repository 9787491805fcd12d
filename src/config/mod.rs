#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "crowdfund-view")]
#[command(about = "Render crowdfunding project rows into display-ready cards")]
pub struct CliArgs {
    #[arg(long, help = "TOML file with [format] and [translations] sections")]
    pub config: Option<String>,

    #[arg(
        long,
        help = "Override the configured locale (de-DE, de-AT, en-US, en-GB, fr-FR, es-ES, it-IT, nl-NL)"
    )]
    pub locale: Option<String>,

    #[arg(long, help = "TOML translation catalog; replaces the config's [translations]")]
    pub translations: Option<String>,

    #[arg(long, default_value = "-", help = "JSON array of project rows, '-' for stdin")]
    pub input: String,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Log as JSON instead of compact text")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

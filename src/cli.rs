use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kit", version, about = "Kit command line interface")]
pub struct Cli {
    #[arg(long, global = true, help = "Profile to scope configuration to")]
    pub profile: Option<String>,
    #[arg(
        long = "config",
        global = true,
        value_name = "DIR",
        help = "Configuration home (overrides KITOPS_HOME)"
    )]
    pub config_home: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set(SetArgs),
    /// Print a configuration value
    Get(GetArgs),
    /// Print every configuration value
    List,
    /// Restore default configuration values
    Reset,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(help = "Configuration key")]
    pub key: String,
    #[arg(help = "Value to store")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Configuration key")]
    pub key: String,
}

// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Command-line front end

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, info};

use prosegur_smart::{AuthConfig, Country, Installation, SmartAuth};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "prosegur")]
#[command(about = "Query and control a Prosegur Smart alarm installation")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print contract and alarm status
    Status {
        /// Index of the installation in the account
        #[arg(long, default_value_t = 0)]
        installation: usize,
    },
    /// Arm the alarm
    Arm {
        #[arg(long, default_value_t = 0)]
        installation: usize,
    },
    /// Disarm the alarm
    Disarm {
        #[arg(long, default_value_t = 0)]
        installation: usize,
    },
}

impl Command {
    fn installation(&self) -> usize {
        match self {
            Command::Status { installation }
            | Command::Arm { installation }
            | Command::Disarm { installation } => *installation,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Config {
    account: AccountToml,
}

#[derive(Debug, Deserialize)]
struct AccountToml {
    user: String,
    password: String,
    #[serde(default = "default_country")]
    country: String,
    #[serde(default)]
    base_url: Option<String>,
}

fn default_country() -> String {
    "PT".to_string()
}

fn build_auth_config(toml: &AccountToml) -> Result<AuthConfig> {
    let country: Country = toml.country.parse()?;
    let mut builder = AuthConfig::builder()
        .user(&toml.user)
        .password(&toml.password)
        .country(country);
    if let Some(url) = &toml.base_url {
        builder = builder.base_url(url);
    }
    Ok(builder.build())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity (e.g. RUST_LOG=prosegur_smart=debug). Default: info.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // systemd journal already adds timestamps, so omit them when running under systemd
    if std::env::var_os("JOURNAL_STREAM").is_some() {
        tracing_subscriber::fmt().without_time().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let cli = Cli::parse();

    let config_text =
        std::fs::read_to_string(&cli.config).context("Failed to read config file")?;
    let config: Config = toml::from_str(&config_text).context("Failed to parse config file")?;
    let auth = SmartAuth::new(build_auth_config(&config.account)?);
    debug!("Using {:?}", auth.config());
    let number = cli.command.installation();
    let installation = Installation::retrieve(&auth, number)
        .await
        .context("Failed to retrieve installation")?
        .context("No installation available")?;
    info!("Installation {} ({})", number, installation.installation_id());

    match cli.command {
        Command::Status { .. } => {
            println!("contract: {}", installation.contract()?);
            println!("status:   {}", installation.status()?);
        }
        Command::Arm { .. } => report(installation.arm(&auth).await?),
        Command::Disarm { .. } => report(installation.disarm(&auth).await?),
    }

    Ok(())
}

fn report(accepted: bool) {
    if accepted {
        println!("ok");
    } else {
        println!("rejected");
    }
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use modechat::cli::commands::{chat, configure, profiles, remote};
use modechat::cli::{Args, Command};
use modechat::config::{ResolveOptions, load_resolved};
use modechat::output::{self, OutputConfig};

fn init_logging() {
    // Logs go to stderr so they never mix with transcript output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(!output::is_no_color())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    init_logging();

    let options = ResolveOptions {
        server: args.server,
    };

    let succeeded = match args.command.unwrap_or(Command::Chat) {
        Command::Configure { show } => {
            configure::run_configure(show)?;
            true
        }
        Command::Chat => {
            chat::run_chat(load_resolved(&options)?).await?;
            true
        }
        Command::State => remote::run_state(&load_resolved(&options)?).await?,
        Command::Send { message } => {
            remote::run_send(&load_resolved(&options)?, &message.join(" ")).await?
        }
        Command::Profile { name } => remote::run_profile(&load_resolved(&options)?, &name).await?,
        Command::Auto { state } => {
            remote::run_auto(&load_resolved(&options)?, state.enabled()).await?
        }
        Command::Profiles => {
            profiles::run_profiles(&load_resolved(&options)?);
            true
        }
    };

    if !succeeded {
        std::process::exit(exitcode::UNAVAILABLE);
    }

    Ok(())
}

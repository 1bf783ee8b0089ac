//! sshprep - Prepare SSH access and a git identity for CI jobs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sshprep::cli::output;
use sshprep::cli::{execute, Cli};
use sshprep::core::constants::LOG_ENV;
use sshprep::error::Error;

fn main() {
    let cli = Cli::parse();

    // Advisories are already printed by the CLI; logs stay quiet by default
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sshprep=debug")
        } else {
            EnvFilter::new("sshprep=error")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Error::Validation(v) = &e {
            output::hint(&format!("check the {} input", v.field()));
        }
        std::process::exit(1);
    }
}

use checkcors::utils::{logger, validation::Validate};
use checkcors::config::normalize_args;
use checkcors::CliConfig;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    // Exits with status 2 and usage text when a required flag is missing.
    let config = CliConfig::parse_from(normalize_args(std::env::args_os()));

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!(err = %e, "failed");
        std::process::exit(1);
    }

    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("interrupted, cancelling in-flight checks");
                interrupt.cancel();
            }
            Err(err) => tracing::error!(err = %err, "unable to listen for interrupt signal"),
        }
    });

    if let Err(e) = checkcors::run(&config, &token).await {
        tracing::error!(err = %e, "failed");
        std::process::exit(1);
    }
}

use pwgen::{cli::CLI, error::PwgenError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pwgen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = CLI::from_args().run() {
        // the alert has already been shown
        if !matches!(error, PwgenError::NoCharacterClassSelected) {
            eprintln!("{}", error);
        }
        std::process::exit(1);
    }
}

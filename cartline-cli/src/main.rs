use anyhow::Context;
use cartline_cli::{Config, Console, ExitReason, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // stdout belongs to the menu, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = config.catalog().context("Invalid catalog configuration")?;
    tracing::info!("Starting cartline with {} products", catalog.len());

    let session = Session::new(catalog, config.session.clone());
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    let (_, reason) = session.run(&mut console).context("Session aborted")?;
    match reason {
        ExitReason::UserQuit => tracing::info!("Session ended by user"),
        ExitReason::CheckoutCompleted(event) => {
            tracing::info!("Session ended with checkout {}", event.checkout_id)
        }
        ExitReason::InputClosed => tracing::info!("Input closed, ending session"),
    }

    Ok(())
}

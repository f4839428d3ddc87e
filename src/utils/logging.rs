use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "BRANCH_SWEEP_LOG";

pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "branch_sweep=warn",
        1 => "branch_sweep=info",
        2 => "branch_sweep=debug",
        _ => "branch_sweep=trace",
    }
}

/// Logs go to stderr so stdout stays clean for reports and JSON.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

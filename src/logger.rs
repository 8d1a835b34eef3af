use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "ctxpack=error"
    } else if verbose {
        "ctxpack=debug"
    } else {
        "ctxpack=warn"
    }
}

/// Install the global stderr subscriber. `RUST_LOG` wins over the flags.
pub fn initialize_logger(verbose: bool, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed (e.g. under a test harness).
    let _ = tracing::subscriber::set_global_default(subscriber);
}

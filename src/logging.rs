use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or info-level
/// session events with `verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "hall_booking_rs=info"
    } else {
        "hall_booking_rs=warn"
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the interactive binary.
///
/// `RUST_LOG` always wins. Otherwise `level` (from the TOML config) applies to
/// this crate, falling back to `info`, or `debug` when `verbose` is set.
/// Output goes to stderr so it never interleaves with the menu on stdout.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose, level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::new(default_directive(verbose, level))
}

fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "contact_book=debug,info".to_string(),
        (false, Some(level)) => format!("contact_book={}", level),
        (false, None) => "contact_book=info".to_string(),
    }
}

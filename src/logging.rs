use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.  `RUST_LOG` wins over `--verbose`.
/// Returns false when a global subscriber was already installed.
pub fn init(verbose: bool) -> bool {
	let default = if verbose { "epic_cli=debug,info" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.is_ok();
	if !installed {
		tracing::debug!("log subscriber already installed; keeping it");
	}
	installed
}

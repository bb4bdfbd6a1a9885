use std::process::ExitCode;

use clap::Parser;

use epic_cli::cli::Cli;
use epic_cli::{commands, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			// --help and --version are "errors" that go to stdout.
			return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	logging::init(cli.verbose);

	let mut stdout = std::io::stdout();
	match commands::dispatch(&cli, &mut stdout).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("ERROR: {e:#}");
			ExitCode::FAILURE
		}
	}
}

#![allow(clippy::needless_return)]
#![warn(clippy::implicit_return)]

#[macro_use]
extern crate log;

use colored::{
	Color,
	Colorize,
};
use libytmp3::Error;

mod clap_conf;
mod commands;
mod logger;
mod state;
mod utils;

use clap_conf::{
	CliDerive,
	SubCommands,
};

/// Main
fn main() {
	let res = run();

	if let Err(err) = res {
		eprintln!("{}: {}", "ERROR".color(Color::Red), err);
		debug!("Error Backtrace:\n{}", err.get_backtrace());
		std::process::exit(1);
	}
}

/// Parse the arguments, setup the logger and run the requested subcommand
fn run() -> Result<(), Error> {
	let mut logger_handle = logger::setup_logger()?;

	let cli_matches = match CliDerive::custom_parse() {
		Ok(v) => v,
		Err(err) => {
			// "--help" and "--version" are also "errors", but should not exit with a error code
			let code = i32::from(err.use_stderr());
			// ignore the result, because there is nothing left to do if printing fails
			let _ = err.print();
			std::process::exit(code);
		},
	};

	colored::control::set_override(cli_matches.enable_colors());

	// without "-v" the level from "RUST_LOG" (or the default) stays in place
	if cli_matches.verbosity > 0 {
		logger::apply_verbosity(&mut logger_handle, cli_matches.verbosity)?;
	}
	info!("CLI Verbosity is {}", cli_matches.verbosity);

	match &cli_matches.subcommands {
		SubCommands::Download(v) => commands::download::command_download(&cli_matches, v),
		SubCommands::Playlist(v) => commands::playlist::command_playlist(&cli_matches, v),
		SubCommands::Completions(v) => commands::completions::command_completions(&cli_matches, v),
	}?;

	return Ok(());
}

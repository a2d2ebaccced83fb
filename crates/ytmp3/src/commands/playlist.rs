//! Module for the "playlist" subcommand

use libytmp3::main::{
	fetch::YtdlFetcher,
	orchestrator::DownloadOrchestrator,
	tag::LoftyWriter,
};

use super::{
	ProgressPrinter,
	download_progressbar,
};
use crate::{
	clap_conf::{
		CliDerive,
		CommandPlaylist,
	},
	state::{
		self,
		InteractiveBatchControl,
	},
	utils,
};

/// Handler function for the "playlist" subcommand
/// This function is mainly to keep the code structured and sorted
#[inline]
pub fn command_playlist(main_args: &CliDerive, sub_args: &CommandPlaylist) -> Result<(), crate::Error> {
	utils::require_ytdl_installed()?;

	let config = state::config_from_args(&sub_args.options).with_batch_size(sub_args.batch_size);
	let orchestrator = DownloadOrchestrator::new(config, YtdlFetcher, LoftyWriter)?;

	let pgbar = download_progressbar(main_args);
	let mut printer = ProgressPrinter::new(&pgbar);
	let mut control = InteractiveBatchControl::new(&pgbar, sub_args.auto_confirm);

	println!("Looking up playlist \"{}\"", sub_args.url);

	let summary = orchestrator.run_playlist(&sub_args.url, &mut control, |event| {
		printer.handle(event);
	})?;

	info!("Finished playlist run with {} failed jobs", summary.failed());

	return Ok(());
}

//! Module for the "download" subcommand

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
		CommandDownload,
	},
	state,
	utils,
};

/// Handler function for the "download" subcommand
/// This function is mainly to keep the code structured and sorted
///
/// Failed urls do not make this function fail, only setup errors do
#[inline]
pub fn command_download(main_args: &CliDerive, sub_args: &CommandDownload) -> Result<(), crate::Error> {
	utils::require_ytdl_installed()?;

	let config = state::config_from_args(&sub_args.options);
	let orchestrator = DownloadOrchestrator::new(config, YtdlFetcher, LoftyWriter)?;

	let pgbar = download_progressbar(main_args);
	let mut printer = ProgressPrinter::new(&pgbar);

	let summary = orchestrator.run_urls(&sub_args.urls, |event| {
		printer.handle(event);
	});

	info!("Finished download run with {} failed jobs", summary.failed());

	return Ok(());
}

//! Module for State Structs for all download commands

use std::io::{
	BufRead,
	StdinLock,
};

use indicatif::ProgressBar;
use libytmp3::{
	config::{
		AUTO_IMPORT_DIR_NAME,
		DownloaderConfig,
		default_music_dir,
	},
	data::{
		batch::PlaylistBatch,
		media::PlaylistEntry,
	},
	traits::batch_control::BatchControl,
};

use crate::{
	clap_conf::DownloadArgs,
	utils,
};

/// Create a [`DownloaderConfig`] from the shared download arguments
/// Paths that are not set fall back to the current user's music directory
pub fn config_from_args(args: &DownloadArgs) -> DownloaderConfig {
	let music_dir = default_music_dir();

	return DownloaderConfig::default()
		.with_destination(args.destination.into())
		.with_audio_format(args.audio_format.as_str())
		.with_quality_kbps(args.quality)
		.with_retries(args.retries)
		.with_staging_path(args.staging_path.clone())
		.with_auto_import_path(
			args.auto_import_path
				.clone()
				.unwrap_or_else(|| return music_dir.join(AUTO_IMPORT_DIR_NAME)),
		)
		.with_library_path(args.library_path.clone().unwrap_or(music_dir))
		.with_print_command_log(args.print_youtubedl_log);
}

/// Format the numbered listing of the entries in `batch`, numbers are 1-based over the whole playlist
pub fn format_batch_listing(batch: &PlaylistBatch, entries: &[PlaylistEntry]) -> String {
	let mut out = format!(
		"Batch {}-{} of {}:\n",
		batch.start() + 1,
		batch.end(),
		batch.total()
	);
	// pad the numbers to the widest number in the playlist
	let width = batch.total().to_string().len();

	for (offset, entry) in entries.iter().enumerate() {
		out.push_str(&format!(
			"  {:>width$}. {}\n",
			batch.start() + offset + 1,
			entry.display_title()
		));
	}

	return out;
}

/// [`BatchControl`] asking the user, answers are read from `R` (STDIN outside of tests)
///
/// All prompts suspend the progressbar, so that it does not draw over the prompt
/// Answers are read even when not running in a terminal, so that piped answers are honored
pub struct InteractiveBatchControl<'a, R: BufRead = StdinLock<'static>> {
	/// The progressbar to suspend while prompting
	pgbar:        &'a ProgressBar,
	/// Confirm every batch without asking and keep the current batch size
	auto_confirm: bool,
	/// Where answers are read from
	reader:       R,
}

impl<'a> InteractiveBatchControl<'a> {
	/// Create a new instance reading answers from STDIN
	pub fn new(pgbar: &'a ProgressBar, auto_confirm: bool) -> Self {
		return Self::with_reader(pgbar, auto_confirm, std::io::stdin().lock());
	}
}

impl<'a, R: BufRead> InteractiveBatchControl<'a, R> {
	/// Create a new instance reading answers from `reader`
	pub fn with_reader(pgbar: &'a ProgressBar, auto_confirm: bool, reader: R) -> Self {
		return Self {
			pgbar,
			auto_confirm,
			reader,
		};
	}
}

impl<R: BufRead> BatchControl for InteractiveBatchControl<'_, R> {
	fn confirm_batch(&mut self, batch: &PlaylistBatch, entries: &[PlaylistEntry]) -> Result<bool, libytmp3::Error> {
		let listing = format_batch_listing(batch, entries);
		let pgbar = self.pgbar;

		return pgbar.suspend(|| {
			print!("{listing}");

			if self.auto_confirm {
				println!("Batch confirmed automatically");
				return Ok(true);
			}

			let input = utils::get_input(&mut self.reader, "Download this batch?", &["y", "N"], "n")?;

			return Ok(input == "y");
		});
	}

	fn next_batch_size(&mut self, remaining: usize, current: usize) -> Result<usize, libytmp3::Error> {
		if self.auto_confirm {
			return Ok(current);
		}

		let pgbar = self.pgbar;

		return pgbar.suspend(|| {
			return utils::get_number_input(
				&mut self.reader,
				&format!("{remaining} entries remaining, size of the next batch?"),
				current,
			);
		});
	}
}

#[cfg(test)]
mod test {
	use std::{
		io::Cursor,
		path::{
			Path,
			PathBuf,
		},
	};

	use libytmp3::main::destination::DestinationConvention;

	use super::*;
	use crate::clap_conf::DestinationArg;

	#[test]
	fn test_config_from_args() {
		let args = DownloadArgs {
			destination:         DestinationArg::Library,
			audio_format:        "opus".to_owned(),
			quality:             128,
			retries:             3,
			staging_path:        PathBuf::from("/tmp/staging"),
			auto_import_path:    Some(PathBuf::from("/tmp/import")),
			library_path:        None,
			print_youtubedl_log: true,
		};

		let config = config_from_args(&args);

		assert_eq!(DestinationConvention::ArtistFolderedLibrary, config.destination());
		assert_eq!("opus", config.audio_format());
		assert_eq!(128, config.quality_kbps());
		assert_eq!(3, config.retries());
		assert_eq!(Path::new("/tmp/staging"), config.staging_path());
		assert!(config.print_command_log());
	}

	#[test]
	fn test_batch_listing() {
		let entries = vec![
			PlaylistEntry::new("a", "Artist - First", "https://some.url/a"),
			PlaylistEntry::new("b", "Artist - Second", "https://some.url/b"),
		];
		let batch = PlaylistBatch::first(12, 10)
			.expect("Expected first batch")
			.next(2)
			.expect("Expected second batch");

		assert_eq!(
			"Batch 11-12 of 12:\n  11. Artist - First\n  12. Artist - Second\n",
			format_batch_listing(&batch, &entries)
		);
	}

	#[test]
	fn test_auto_confirm() {
		let pgbar = ProgressBar::hidden();
		let mut control = InteractiveBatchControl::new(&pgbar, true);
		let batch = PlaylistBatch::first(3, 2).expect("Expected first batch");

		assert_eq!(Ok(true), control.confirm_batch(&batch, &[]));
		assert_eq!(Ok(2), control.next_batch_size(1, 2));
	}

	#[test]
	fn test_piped_decline() {
		let pgbar = ProgressBar::hidden();
		let mut control = InteractiveBatchControl::with_reader(&pgbar, false, Cursor::new("n\n"));
		let batch = PlaylistBatch::first(3, 2).expect("Expected first batch");

		assert_eq!(Ok(false), control.confirm_batch(&batch, &[]));
	}

	#[test]
	fn test_piped_confirm_and_size() {
		let pgbar = ProgressBar::hidden();
		let mut control = InteractiveBatchControl::with_reader(&pgbar, false, Cursor::new("y\n3\n"));
		let batch = PlaylistBatch::first(10, 2).expect("Expected first batch");

		assert_eq!(Ok(true), control.confirm_batch(&batch, &[]));
		assert_eq!(Ok(3), control.next_batch_size(8, 2));
	}

	#[test]
	fn test_closed_input_declines() {
		let pgbar = ProgressBar::hidden();
		let mut control = InteractiveBatchControl::with_reader(&pgbar, false, Cursor::new(""));
		let batch = PlaylistBatch::first(3, 2).expect("Expected first batch");

		assert_eq!(Ok(false), control.confirm_batch(&batch, &[]));
		assert_eq!(Ok(2), control.next_batch_size(1, 2));
	}
}

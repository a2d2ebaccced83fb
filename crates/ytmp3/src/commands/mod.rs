//! Module for all (longer) commands

use std::{
	sync::LazyLock,
	time::Duration,
};

use colored::{
	Color,
	Colorize,
};
use indicatif::{
	ProgressBar,
	ProgressStyle,
};
use libytmp3::main::orchestrator::{
	DownloadProgress,
	JobOutcome,
};

pub mod completions;
pub mod download;
pub mod playlist;

/// Static for easily referencing the 100% length for a progressbar
const PG_PERCENT_100: u64 = 100;
/// Static size the Download Progress Style will take (plus some spacers)
/// currently accounts for `[00/??] [00:00:00] ### `
const STYLE_STATIC_SIZE: usize = 23;

/// ProgressBar Style for download, will look like `[0/0] [00:00:00] [#>-] CustomMsg`
static DOWNLOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
	return ProgressStyle::default_bar()
		.template("{prefix:.dim} [{elapsed_precise}] {wide_bar:.cyan/blue} {msg}")
		.expect("Expected ProgressStyle template to be valid")
		.progress_chars("#>-");
});

/// Color used for "WARN" prefixes
const WARN_COLOR: Color = Color::TrueColor { r: 255, g: 135, b: 0 };

/// Create the progressbar used for downloading, only drawn in interactive mode
pub fn download_progressbar(main_args: &crate::clap_conf::CliDerive) -> ProgressBar {
	let pgbar = ProgressBar::hidden().with_style(DOWNLOAD_STYLE.clone());
	pgbar.set_length(PG_PERCENT_100);
	crate::utils::set_progressbar(&pgbar, main_args);

	return pgbar;
}

/// Truncate the given message to a lower size so that the progressbar does not do new-lines
/// truncation is required because indicatif would do new-lines, and adding truncation would only work with a (static) maximum size
fn truncate_message_term_width<M>(msg: &M) -> String
where
	M: AsRef<str>,
{
	let display_width_available = terminal_size::terminal_size().map(|(w, _h)| {
		return (w.0 as usize).saturating_sub(STYLE_STATIC_SIZE);
	});

	let Some(display_width_available) = display_width_available else {
		return msg.as_ref().into();
	};

	return crate::utils::truncate_message_display_pos(msg.as_ref(), display_width_available, true).to_string();
}

/// Format the status line for a finished job, `index` is 0-based
fn status_line(index: usize, total: usize, title: &str, outcome: &JobOutcome) -> String {
	let prefix = format!("[{}/{}]", index + 1, total);

	return match outcome {
		JobOutcome::Placed(path) => format!("{prefix} Finished \"{title}\" -> \"{}\"", path.display()),
		JobOutcome::Failed(reason, msg) => format!("{prefix} Failed \"{title}\" ({reason}): {msg}"),
	};
}

/// Format the final line of a run
fn summary_line(summary: &libytmp3::data::job::RunSummary) -> String {
	return format!("Download complete. Success: {summary}");
}

/// Handles [`DownloadProgress`] events by updating the progressbar and printing status lines
pub struct ProgressPrinter<'a> {
	/// The progressbar to update
	pgbar: &'a ProgressBar,
	/// Total amount of jobs of the current run (or playlist)
	total: usize,
	/// The title of the current job, the url until the title is known
	title: String,
}

impl<'a> ProgressPrinter<'a> {
	/// Create a new instance
	pub fn new(pgbar: &'a ProgressBar) -> Self {
		return Self {
			pgbar,
			total: 0,
			title: String::new(),
		};
	}

	/// Print a line without the progressbar drawing over it
	/// [`ProgressBar::println`] is not used, because it does not print anything when the progressbar is hidden
	fn println<S: std::fmt::Display>(&self, line: S) {
		self.pgbar.suspend(|| {
			println!("{line}");
		});
	}

	/// Handle a single event
	pub fn handle(&mut self, event: DownloadProgress) {
		match event {
			DownloadProgress::JobStarting(index, total, url) => {
				self.total = total;
				self.title = url;

				self.pgbar.reset();
				self.pgbar.set_length(PG_PERCENT_100);
				self.pgbar.set_prefix(format!("[{}/{}]", index + 1, total));
				// steady-ticks have to be re-done after every "pgbar.finish" because the ticker will exit once it notices the state is "finished"
				self.pgbar.enable_steady_tick(Duration::from_secs(1));
				self.pgbar.set_message(truncate_message_term_width(&self.title));
			},
			DownloadProgress::JobTitle(title) => {
				self.title = title;
				self.pgbar.set_message(truncate_message_term_width(&self.title));
				self.println(format!("Downloading: {}", self.title));
			},
			DownloadProgress::JobProgress(percent) => {
				self.pgbar.set_position(percent.into());
			},
			DownloadProgress::TagWriteFailed(msg) => {
				self.println(format!(
					"{} Could not write tags for \"{}\": {msg}",
					"WARN".color(WARN_COLOR),
					self.title
				));
			},
			DownloadProgress::JobFinished(index, outcome) => {
				self.pgbar.finish_and_clear();
				let line = status_line(index, self.total, &self.title, &outcome);

				match outcome {
					JobOutcome::Placed(_) => self.println(line.color(Color::Green)),
					JobOutcome::Failed(..) => self.println(line.color(Color::Red)),
				}
			},
			DownloadProgress::BatchDeclined => {
				self.println("Batch declined, not downloading the remaining entries");
			},
			DownloadProgress::RunFinished(summary) => {
				self.pgbar.finish_and_clear();
				self.println(summary_line(&summary));
			},
		}
	}
}

//! Module containing [`DownloadJob`] and its state machine

use std::path::{
	Path,
	PathBuf,
};

use super::{
	media::MediaMetadata,
	title::ArtistTitle,
};

/// Reason a [`DownloadJob`] ended up in [`JobState::Failed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
	/// The fetch failed or did not produce the expected output file
	DownloadFailed,
	/// The destination directory could not be created
	DirectoryUnavailable,
	/// The destination file already existed, the file was left in staging
	PlacementConflict,
}

impl std::fmt::Display for FailureReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		return f.write_str(match self {
			Self::DownloadFailed => "download-failed",
			Self::DirectoryUnavailable => "directory-unavailable",
			Self::PlacementConflict => "placement-conflict",
		});
	}
}

/// States a [`DownloadJob`] goes through, in order
/// `Pending -> Fetched -> Tagged -> Placed`, with `Failed` reachable from every non-terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
	/// Nothing has been done yet
	Pending,
	/// The media has been downloaded and transcoded to a local file
	Fetched,
	/// Tagging has been attempted (tagging is best-effort, so this is also reached when it failed)
	Tagged,
	/// The file is at its final destination
	Placed,
	/// The job failed and will not advance anymore
	Failed(FailureReason),
}

impl JobState {
	/// Get if the state will not change anymore
	#[must_use]
	pub fn is_terminal(&self) -> bool {
		return matches!(self, Self::Placed | Self::Failed(_));
	}
}

/// A single URL and everything derived while processing it
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadJob {
	/// The URL this job is for
	url:       String,
	/// Current state of the job
	state:     JobState,
	/// The metadata from probing the url
	metadata:  Option<MediaMetadata>,
	/// The local file, first the staging file and after placement the final file
	file:      Option<PathBuf>,
	/// The artist and song derived from the title
	tags:      Option<ArtistTitle>,
	/// Set if tagging was attempted but failed
	tag_error: Option<String>,
}

impl DownloadJob {
	/// Create a new [`JobState::Pending`] job for `url`
	pub fn new<U: Into<String>>(url: U) -> Self {
		return Self {
			url:       url.into(),
			state:     JobState::Pending,
			metadata:  None,
			file:      None,
			tags:      None,
			tag_error: None,
		};
	}

	/// Transition `Pending -> Fetched`
	pub fn fetched(&mut self, metadata: MediaMetadata, file: PathBuf) {
		debug_assert_eq!(JobState::Pending, self.state, "fetched is only valid from Pending");
		self.metadata = Some(metadata);
		self.file = Some(file);
		self.state = JobState::Fetched;
	}

	/// Transition `Fetched -> Tagged`, `tag_error` is set when writing the tags failed
	pub fn tagged(&mut self, tags: ArtistTitle, tag_error: Option<String>) {
		debug_assert_eq!(JobState::Fetched, self.state, "tagged is only valid from Fetched");
		self.tags = Some(tags);
		self.tag_error = tag_error;
		self.state = JobState::Tagged;
	}

	/// Transition `Tagged -> Placed`, with the final path of the file
	pub fn placed(&mut self, final_file: PathBuf) {
		debug_assert_eq!(JobState::Tagged, self.state, "placed is only valid from Tagged");
		self.file = Some(final_file);
		self.state = JobState::Placed;
	}

	/// Transition into [`JobState::Failed`], ignored if the job is already in a terminal state
	pub fn fail(&mut self, reason: FailureReason) {
		if self.state.is_terminal() {
			warn!("Tried to fail job for \"{}\" which is already {:?}", self.url, self.state);
			return;
		}

		self.state = JobState::Failed(reason);
	}

	/// The URL this job is for
	#[must_use]
	pub fn url(&self) -> &str {
		return &self.url;
	}

	/// The current state
	#[must_use]
	pub fn state(&self) -> JobState {
		return self.state;
	}

	/// The metadata, available from [`JobState::Fetched`] on
	#[must_use]
	pub fn metadata(&self) -> Option<&MediaMetadata> {
		return self.metadata.as_ref();
	}

	/// The current local file of the job
	#[must_use]
	pub fn file(&self) -> Option<&Path> {
		return self.file.as_deref();
	}

	/// The derived artist and song, available from [`JobState::Tagged`] on
	#[must_use]
	pub fn tags(&self) -> Option<&ArtistTitle> {
		return self.tags.as_ref();
	}

	/// The error message if writing tags failed
	#[must_use]
	pub fn tag_error(&self) -> Option<&str> {
		return self.tag_error.as_deref();
	}
}

/// Aggregate result of a run, only the counts survive a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
	/// Amount of jobs that reached [`JobState::Placed`]
	pub placed: usize,
	/// Amount of jobs that were attempted
	pub total:  usize,
}

impl RunSummary {
	/// Count a finished job into this summary
	pub fn record(&mut self, state: JobState) {
		self.total += 1;
		if state == JobState::Placed {
			self.placed += 1;
		}
	}

	/// Amount of jobs that did not get placed
	#[must_use]
	pub fn failed(&self) -> usize {
		return self.total - self.placed;
	}
}

impl std::fmt::Display for RunSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		return write!(f, "{}/{}", self.placed, self.total);
	}
}

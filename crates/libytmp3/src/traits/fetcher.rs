//! Module for the [`MediaFetcher`] trait

use std::path::{
	Path,
	PathBuf,
};

use crate::data::media::MediaMetadata;

/// Everything a [`MediaFetcher`] needs to download and transcode a single media
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest<'a> {
	/// The URL of the media
	pub url:               &'a str,
	/// The directory the output file is written to
	pub output_dir:        &'a Path,
	/// The filename template relative to `output_dir`, in youtube-dl output template syntax
	pub filename_template: &'a str,
	/// The audio format to transcode to, like "mp3"
	pub audio_format:      &'a str,
	/// The audio quality in kbps
	pub quality_kbps:      u16,
	/// Retries for downloads and fragments
	pub retries:           u32,
	/// Print the output of the fetch as trace logs
	pub print_command_log: bool,
}

/// Trait for the external tool that resolves and downloads media
pub trait MediaFetcher {
	/// Get the metadata of `url` without downloading it
	///
	/// If `playlist` is `true`, a URL that references both a media and a playlist is resolved as the playlist
	fn probe(&self, url: &str, playlist: bool) -> Result<MediaMetadata, crate::Error>;

	/// Download and transcode the media of the request, returning the path of the output file
	///
	/// `progress` is called with the download percentage whenever it changes.
	/// Fails with [`crate::error::ErrorInner::FetchFailed`] when no output file was produced.
	fn fetch_and_transcode(
		&self,
		request: &FetchRequest<'_>,
		progress: &mut dyn FnMut(u8),
	) -> Result<PathBuf, crate::Error>;
}

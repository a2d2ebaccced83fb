//! Module for [`DownloaderConfig`], the configuration passed into the orchestrator

use std::path::{
	Path,
	PathBuf,
};

use crate::main::destination::{
	DestinationConvention,
	DestinationResolver,
};

/// Default audio format to transcode to
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";
/// Default audio quality in kbps
pub const DEFAULT_QUALITY_KBPS: u16 = 192;
/// Default amount of playlist entries per batch
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Default amount of retries youtube-dl should do for downloads and fragments
pub const DEFAULT_RETRIES: u32 = 10;
/// Default staging directory, relative to the working directory
pub const DEFAULT_STAGING_DIR: &str = "downloads";
/// Name of the folder media-library software conventionally watches for automatic import
pub const AUTO_IMPORT_DIR_NAME: &str = "Automatically Add to Music";
/// Default output template for youtube-dl, named by the media id so that titles do not need escaping
pub const DEFAULT_FILENAME_TEMPLATE: &str = "%(id)s.%(ext)s";

/// Get the music directory of the current user
/// Uses [`dirs::audio_dir`] and falls back to `~/Music`
#[must_use]
pub fn default_music_dir() -> PathBuf {
	if let Some(dir) = dirs::audio_dir() {
		return dir;
	}

	return dirs::home_dir()
		.unwrap_or_else(|| return PathBuf::from("."))
		.join("Music");
}

/// Configuration for [`crate::main::orchestrator::DownloadOrchestrator`]
///
/// Created with [`Default`] and changed with the builder functions
#[derive(Debug, Clone, PartialEq)]
pub struct DownloaderConfig {
	/// Where finished files are placed
	destination:       DestinationConvention,
	/// The audio format to transcode to
	audio_format:      String,
	/// The audio quality in kbps
	quality_kbps:      u16,
	/// Default amount of playlist entries per batch
	batch_size:        usize,
	/// Retries for downloads and fragments
	retries:           u32,
	/// Directory where files are downloaded to before placement
	staging_path:      PathBuf,
	/// Directory watched by media-library software
	auto_import_path:  PathBuf,
	/// Root of the artist-foldered library
	library_path:      PathBuf,
	/// Output template for youtube-dl, relative to the staging directory
	filename_template: String,
	/// Print youtube-dl stdout as trace logs
	print_command_log: bool,
}

impl Default for DownloaderConfig {
	fn default() -> Self {
		let music_dir = default_music_dir();

		return Self {
			destination:       DestinationConvention::AutoImport,
			audio_format:      DEFAULT_AUDIO_FORMAT.to_owned(),
			quality_kbps:      DEFAULT_QUALITY_KBPS,
			batch_size:        DEFAULT_BATCH_SIZE,
			retries:           DEFAULT_RETRIES,
			staging_path:      PathBuf::from(DEFAULT_STAGING_DIR),
			auto_import_path:  music_dir.join(AUTO_IMPORT_DIR_NAME),
			library_path:      music_dir,
			filename_template: DEFAULT_FILENAME_TEMPLATE.to_owned(),
			print_command_log: false,
		};
	}
}

impl DownloaderConfig {
	/// Builder function to set the destination convention
	#[must_use]
	pub fn with_destination(mut self, destination: DestinationConvention) -> Self {
		self.destination = destination;

		return self;
	}

	/// Builder function to set the audio format
	#[must_use]
	pub fn with_audio_format<S: Into<String>>(mut self, audio_format: S) -> Self {
		self.audio_format = audio_format.into();

		return self;
	}

	/// Builder function to set the audio quality in kbps
	#[must_use]
	pub fn with_quality_kbps(mut self, quality_kbps: u16) -> Self {
		self.quality_kbps = quality_kbps;

		return self;
	}

	/// Builder function to set the default batch size, a size of 0 is treated as 1
	#[must_use]
	pub fn with_batch_size(mut self, batch_size: usize) -> Self {
		self.batch_size = batch_size.max(1);

		return self;
	}

	/// Builder function to set the retry count
	#[must_use]
	pub fn with_retries(mut self, retries: u32) -> Self {
		self.retries = retries;

		return self;
	}

	/// Builder function to set the staging directory
	#[must_use]
	pub fn with_staging_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
		self.staging_path = path.into();

		return self;
	}

	/// Builder function to set the auto-import directory
	#[must_use]
	pub fn with_auto_import_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
		self.auto_import_path = path.into();

		return self;
	}

	/// Builder function to set the library root directory
	#[must_use]
	pub fn with_library_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
		self.library_path = path.into();

		return self;
	}

	/// Builder function to set the youtube-dl output template
	#[must_use]
	pub fn with_filename_template<S: Into<String>>(mut self, template: S) -> Self {
		self.filename_template = template.into();

		return self;
	}

	/// Builder function to set whether to print youtube-dl stdout
	#[must_use]
	pub fn with_print_command_log(mut self, print_command_log: bool) -> Self {
		self.print_command_log = print_command_log;

		return self;
	}

	/// Where finished files are placed
	#[must_use]
	pub fn destination(&self) -> DestinationConvention {
		return self.destination;
	}

	/// The audio format to transcode to
	#[must_use]
	pub fn audio_format(&self) -> &str {
		return &self.audio_format;
	}

	/// The audio quality in kbps
	#[must_use]
	pub fn quality_kbps(&self) -> u16 {
		return self.quality_kbps;
	}

	/// Default amount of playlist entries per batch
	#[must_use]
	pub fn batch_size(&self) -> usize {
		return self.batch_size;
	}

	/// Retries for downloads and fragments
	#[must_use]
	pub fn retries(&self) -> u32 {
		return self.retries;
	}

	/// Directory where files are downloaded to before placement
	#[must_use]
	pub fn staging_path(&self) -> &Path {
		return &self.staging_path;
	}

	/// Output template for youtube-dl
	#[must_use]
	pub fn filename_template(&self) -> &str {
		return &self.filename_template;
	}

	/// Print youtube-dl stdout as trace logs
	#[must_use]
	pub fn print_command_log(&self) -> bool {
		return self.print_command_log;
	}

	/// Create a [`DestinationResolver`] for the configured directories
	pub fn resolver(&self) -> Result<DestinationResolver, crate::Error> {
		return DestinationResolver::new(&self.auto_import_path, &self.library_path, &self.staging_path);
	}
}

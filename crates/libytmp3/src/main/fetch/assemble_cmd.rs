//! Module for assembling the youtube-dl arguments

use std::ffi::OsString;

use crate::traits::fetcher::FetchRequest;

/// Print format that is emitted after the final file has been moved into place
/// includes "extractor" and "id" for identifying which media the filepath is for
pub const MOVE_PRINT_FORMAT: &str = "after_move:MOVE '%(extractor)s' '%(id)s' %(filepath)s";

/// Internal Struct for easily adding various types that resolve to [`OsString`] and output a [`Vec<OsString>`]
/// exists because [std::process::Command] is too overkill to use for a argument collection for having to use [duct] later
#[derive(Debug)]
struct ArgsHelper(Vec<OsString>);
impl ArgsHelper {
	/// Create a new instance of ArgsHelper
	pub fn new() -> Self {
		return Self(Vec::default());
	}

	/// Add a new Argument to the list, added at the end and converted to a [`OsString`]
	/// Returns the input reference to "self" for chaining
	pub fn arg<U>(&mut self, arg: U) -> &mut Self
	where
		U: Into<OsString>,
	{
		self.0.push(arg.into());

		return self;
	}

	/// Convert Self to the inner value
	/// Consumes self
	pub fn into_inner(self) -> Vec<OsString> {
		return self.0;
	}
}

impl From<ArgsHelper> for Vec<OsString> {
	fn from(v: ArgsHelper) -> Self {
		return v.into_inner();
	}
}

/// Assemble the arguments to probe `url` for its metadata, without downloading
#[must_use]
pub fn assemble_probe_command(url: &str, playlist: bool) -> Vec<OsString> {
	let mut ytdl_args = ArgsHelper::new();

	// dump everything as a single json object
	ytdl_args.arg("-J");
	// dont resolve every playlist entry, only the id, title and url are needed
	ytdl_args.arg("--flat-playlist");

	if playlist {
		ytdl_args.arg("--yes-playlist");
	} else {
		ytdl_args.arg("--no-playlist");
	}

	// warnings would otherwise be mixed into the json
	ytdl_args.arg("--no-warnings");

	ytdl_args.arg(url);

	return ytdl_args.into();
}

/// Assemble the arguments to download and transcode a single media
#[must_use]
pub fn assemble_ytdl_command(request: &FetchRequest<'_>) -> Vec<OsString> {
	let mut ytdl_args = ArgsHelper::new();

	debug!("YTDL Output dir is \"{}\"", request.output_dir.display());

	// set the format that should be downloaded
	ytdl_args.arg("-f").arg("bestaudio/best");
	// set ytdl to always extract the audio, if it is not already audio-only
	ytdl_args.arg("-x");
	// set the output audio format
	ytdl_args.arg("--audio-format").arg(request.audio_format);
	ytdl_args
		.arg("--audio-quality")
		.arg(format!("{}K", request.quality_kbps));

	// a single url is always a single media, playlists are resolved beforehand
	ytdl_args.arg("--no-playlist");

	ytdl_args.arg("--retries").arg(request.retries.to_string());
	ytdl_args.arg("--fragment-retries").arg(request.retries.to_string());

	// print after move to get the filepath of the final output file
	ytdl_args.arg("--print").arg(MOVE_PRINT_FORMAT);

	// ensure ytdl is printing progress reports
	ytdl_args.arg("--progress");
	// ensure ytdl prints the progress reports on a new line
	ytdl_args.arg("--newline");

	// ensure it is not in simulate mode, "--print" implies it
	ytdl_args.arg("--no-simulate");

	ytdl_args
		.arg("-o")
		.arg(request.output_dir.join(request.filename_template));

	// apply the url to download as the last argument
	ytdl_args.arg(request.url);

	return ytdl_args.into();
}

//! Module that contains all logic for checking the "ffmpeg" command
//! ffmpeg is never spawned directly, youtube-dl uses it for transcoding
use std::{
	process::Command,
	sync::LazyLock,
};

use regex::Regex;

/// Binary name of ffmpeg
pub const FFMPEG_BIN_NAME: &str = "ffmpeg";

/// Regex to parse the version from a "ffmpeg -version" output
/// cap1: version
static FFMPEG_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	return Regex::new(r"(?mi)^ffmpeg version ([a-z0-9.-]+) Copyright").unwrap();
});

/// Test if ffmpeg is installed and reachable and return the version found
pub fn require_ffmpeg_installed() -> Result<String, crate::Error> {
	return match ffmpeg_version() {
		Ok(v) => Ok(v),
		Err(err) => {
			error!("Could not start or find ffmpeg! Error: {}", err);

			return Err(crate::Error::custom_ioerror_location(
				std::io::ErrorKind::NotFound,
				"FFmpeg Version could not be determined, is it installed and reachable?",
				format!("{} in PATH", FFMPEG_BIN_NAME),
			));
		},
	};
}

/// Get Version of `ffmpeg`
#[inline]
pub fn ffmpeg_version() -> Result<String, crate::Error> {
	let mut cmd = Command::new(FFMPEG_BIN_NAME);
	// explicitly disable interactive mode
	cmd.arg("-nostdin").arg("-version");

	let as_string = super::version_output(cmd, FFMPEG_BIN_NAME)?;

	return ffmpeg_parse_version(&as_string);
}

/// Internal Function to parse the input to a ffmpeg version with regex
#[inline]
fn ffmpeg_parse_version(input: &str) -> Result<String, crate::Error> {
	return Ok(FFMPEG_VERSION_REGEX
		.captures_iter(input)
		.next()
		.ok_or_else(|| return crate::Error::no_captures("FFMPEG Version could not be determined"))?[1]
		.to_owned());
}

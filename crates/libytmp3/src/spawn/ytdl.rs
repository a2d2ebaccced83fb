//! Module that contains all logic for checking the "youtube-dl" command
use std::{
	process::Command,
	sync::LazyLock,
};

use regex::Regex;

use super::ffmpeg::require_ffmpeg_installed;

/// Binary name to spawn for the youtube-dl process
pub const YTDL_BIN_NAME: &str = "yt-dlp";

/// The minimal youtube-dl(p) version that is expected to be used.
///
/// Older versions may work, but do not support "--print after_move:"
pub const MINIMAL_YTDL_VERSION: chrono::NaiveDate = chrono::NaiveDate::from_ymd_opt(2023, 3, 3).unwrap();

/// Test if ytdl is installed and reachable, including required dependencies like ffmpeg and return the version found.
///
/// This function is not automatically called in the library, it is recommended to run this in any binary using libytmp3.
pub fn require_ytdl_installed() -> Result<String, crate::Error> {
	require_ffmpeg_installed()?;

	return match ytdl_version() {
		Ok(v) => Ok(v),
		Err(err) => {
			error!("Could not start or find youtube-dl! Error: {}", err);

			return Err(crate::Error::custom_ioerror_location(
				std::io::ErrorKind::NotFound,
				"Youtube-DL(p) Version could not be determined, is it installed and reachable?",
				format!("{} in PATH", YTDL_BIN_NAME),
			));
		},
	};
}

/// Regex to parse the version from a "youtube-dl --version" output
/// cap1: version (date)
static YTDL_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	return Regex::new(r"(?mi)^(\d{4}\.\d{1,2}\.\d{1,2})").unwrap();
});

/// Get Version of `youtube-dl`
#[inline]
pub fn ytdl_version() -> Result<String, crate::Error> {
	let mut cmd = Command::new(YTDL_BIN_NAME);
	cmd.arg("--version");

	let as_string = super::version_output(cmd, YTDL_BIN_NAME)?;

	return ytdl_parse_version(&as_string);
}

/// Internal Function to parse the input to a ytdl version with regex
#[inline]
fn ytdl_parse_version(input: &str) -> Result<String, crate::Error> {
	return Ok(YTDL_VERSION_REGEX
		.captures_iter(input)
		.next()
		.ok_or_else(|| return crate::Error::no_captures("YTDL Version could not be determined"))?[1]
		.to_owned());
}

/// Try to parse a given `input`, which is a youtube-dl(p) version, as a [NaiveDate](chrono::NaiveDate).
pub fn ytdl_parse_version_naivedate(input: &str) -> Result<chrono::NaiveDate, crate::Error> {
	let version = ytdl_parse_version(input)?;

	let date = chrono::NaiveDate::parse_from_str(&version, "%Y.%m.%d").map_err(|err| {
		return crate::Error::other(format!("Could not parse \"{version}\" as a date: {err}"));
	})?;

	return Ok(date);
}

/// Warn if `version` is older than [`MINIMAL_YTDL_VERSION`]
/// Returns `true` if a warning was logged
pub fn warn_minimal_version(version: &str) -> bool {
	let date = match ytdl_parse_version_naivedate(version) {
		Ok(v) => v,
		Err(err) => {
			warn!("Could not determine youtube-dl version properly: {err}");
			return false;
		},
	};

	if date < MINIMAL_YTDL_VERSION {
		warn!(
			"Used {} version ({}) is lower than the recommended minimal {}",
			YTDL_BIN_NAME,
			date.format("%Y.%m.%d"),
			MINIMAL_YTDL_VERSION.format("%Y.%m.%d"),
		);

		return true;
	}

	return false;
}

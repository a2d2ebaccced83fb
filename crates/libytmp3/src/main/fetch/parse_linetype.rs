//! Module for classifying youtube-dl output lines

use std::{
	path::PathBuf,
	sync::LazyLock,
};

use regex::Regex;

/// A parsed "MOVE" line, printed once the final file of a media is in place
#[derive(Debug, PartialEq, Clone)]
pub struct MovedFile {
	/// The extractor (provider) the media is from, like "youtube"
	pub provider: String,
	/// The id of the media
	pub id:       String,
	/// The path of the final file
	pub path:     PathBuf,
}

/// Line type for a ytdl output line
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LineType {
	/// Variant for FFmpeg processing lines
	Ffmpeg,
	/// Variant for the audio extraction postprocessor lines
	ExtractAudio,
	/// Variant for ytdl download progress lines
	Download,
	/// Variant for provider specific lines (like youtube counting website)
	ProviderSpecific,
	/// Variant for generic lines (like "Deleting original file")
	Generic,
	/// Variant for lines that are from "--print"
	Custom,
	/// Variant for lines that start with "ERROR:"
	Error,
	/// Variant for lines that start with "WARNING:"
	Warning,
}

impl LineType {
	/// Try to get the correct Variant for a input line
	/// Will return [`None`] if no type has been found
	pub fn try_from_line(input: &str) -> Option<Self> {
		/// basic regex to test if the line is "[something] something", and if it is, return what is inside "[]"
		static BASIC_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
			return Regex::new(r"(?mi)^\[([\da-z:_]*)\]").unwrap();
		});
		/// regex to check for generic lines
		static GENERIC_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
			return Regex::new(r"(?mi)^deleting original file").unwrap();
		});

		// check if the line is from a provider-like output
		if let Some(cap) = BASIC_TYPE_REGEX.captures(input) {
			let name = &cap[1];

			// this case is first, because it is the most common case
			if name == "download" {
				return Some(Self::Download);
			}

			if name == "ffmpeg" {
				return Some(Self::Ffmpeg);
			}

			if name == "ExtractAudio" {
				return Some(Self::ExtractAudio);
			}

			// everything that is not specially handled before, will get treated as being a provider
			return Some(Self::ProviderSpecific);
		}

		if input.starts_with("MOVE") {
			return Some(Self::Custom);
		}

		// check for Generic lines that dont have a prefix
		if GENERIC_TYPE_REGEX.is_match(input) {
			return Some(Self::Generic);
		}

		if input.starts_with("ERROR:") {
			return Some(Self::Error);
		}

		if input.starts_with("youtube-dl: error:") || input.starts_with("yt-dlp: error:") {
			return Some(Self::Error);
		}

		if input.starts_with("WARNING:") {
			return Some(Self::Warning);
		}

		// if nothing above matches, return None, because no type has been found
		return None;
	}

	/// Try to get the download precent from input
	/// Returns [`None`] if not being of variant [`LineType::Download`] or if not percentage can be found or could not be parsed
	pub fn try_get_download_percent<I: AsRef<str>>(&self, input: I) -> Option<u8> {
		// this function only works with Download lines
		if self != &Self::Download {
			return None;
		}

		/// Regex to parse the download percentage from a line
		/// cap1: precentage(not decimal)
		static DOWNLOAD_PERCENTAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
			return Regex::new(r"(?mi)^\[download\]\s+(\d{1,3})(?:\.\d)?%").unwrap();
		});

		let cap = DOWNLOAD_PERCENTAGE_REGEX.captures(input.as_ref())?;

		// a value above 255 fails to parse and is treated as no percentage
		return cap[1].parse::<u8>().ok().filter(|v| return *v <= 100);
	}

	/// Try to parse the "MOVE" print helper
	/// Returns [`None`] if not being of variant [`LineType::Custom`] or if the line does not match
	pub fn try_get_moved_file<I: AsRef<str>>(&self, input: I) -> Option<MovedFile> {
		// this function only works with Custom lines
		if self != &Self::Custom {
			return None;
		}

		/// Regex to get all information from the Parsing helper "MOVE"
		/// cap1: provider, cap2: id, cap3: path
		static PARSE_MOVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
			return Regex::new(r"(?mi)^MOVE '([^']+)' '([^']+)' (.+)$").unwrap();
		});

		let cap = PARSE_MOVE_REGEX.captures(input.as_ref())?;

		return Some(MovedFile {
			provider: cap[1].to_owned(),
			id:       cap[2].to_owned(),
			path:     PathBuf::from(&cap[3]),
		});
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_try_from_line() {
		let input = "[download] Destination: /tmp/staging/dQw4w9WgXcQ.webm";
		assert_eq!(Some(LineType::Download), LineType::try_from_line(input));

		let input = "[download]   0.0% of 3.32MiB at 160.90KiB/s ETA 00:29";
		assert_eq!(Some(LineType::Download), LineType::try_from_line(input));

		let input = "[youtube] dQw4w9WgXcQ: Downloading webpage";
		assert_eq!(Some(LineType::ProviderSpecific), LineType::try_from_line(input));

		let input = "[ExtractAudio] Destination: /tmp/staging/dQw4w9WgXcQ.mp3";
		assert_eq!(Some(LineType::ExtractAudio), LineType::try_from_line(input));

		let input = "[ffmpeg] Merging formats into \"/tmp/staging/x.webm\"";
		assert_eq!(Some(LineType::Ffmpeg), LineType::try_from_line(input));

		let input = "Deleting original file /tmp/staging/dQw4w9WgXcQ.webm (pass -k to keep)";
		assert_eq!(Some(LineType::Generic), LineType::try_from_line(input));

		let input = "MOVE 'youtube' 'dQw4w9WgXcQ' /tmp/staging/dQw4w9WgXcQ.mp3";
		assert_eq!(Some(LineType::Custom), LineType::try_from_line(input));

		let input = "ERROR: [youtube] dQw4w9WgXcQ: Video unavailable";
		assert_eq!(Some(LineType::Error), LineType::try_from_line(input));

		let input = "yt-dlp: error: no such option: --something";
		assert_eq!(Some(LineType::Error), LineType::try_from_line(input));

		let input = "WARNING: [youtube] Falling back to generic n function search";
		assert_eq!(Some(LineType::Warning), LineType::try_from_line(input));

		let input = "Something unexpected";
		assert_eq!(None, LineType::try_from_line(input));
	}

	#[test]
	fn test_try_get_download_percent() {
		// should try to apply the regex, but would not find anything
		let input = "[download] Destination: /tmp/staging/dQw4w9WgXcQ.webm";
		assert_eq!(None, LineType::Download.try_get_download_percent(input));

		let input = "[download]   0.0% of   3.34MiB at  Unknown B/s ETA Unknown";
		assert_eq!(Some(0), LineType::Download.try_get_download_percent(input));

		let input = "[download]   1.1% of  290.41MiB at  568.08KiB/s ETA 08:37";
		assert_eq!(Some(1), LineType::Download.try_get_download_percent(input));

		let input = "[download]  75.6% of 51.32MiB at  2.32MiB/s ETA 00:05";
		assert_eq!(Some(75), LineType::Download.try_get_download_percent(input));

		let input = "[download] 100% of 2.16MiB in 00:00";
		assert_eq!(Some(100), LineType::Download.try_get_download_percent(input));

		// should early-return because not correct variant
		assert_eq!(None, LineType::Generic.try_get_download_percent(input));

		// out of range values are ignored
		let input = "[download] 256% of 2.16MiB in 00:00";
		assert_eq!(None, LineType::Download.try_get_download_percent(input));
		let input = "[download] 101% of 2.16MiB in 00:00";
		assert_eq!(None, LineType::Download.try_get_download_percent(input));
	}

	#[test]
	fn test_try_get_moved_file() {
		let input = "MOVE 'youtube' 'dQw4w9WgXcQ' /tmp/staging dir/dQw4w9WgXcQ.mp3";
		assert_eq!(
			Some(MovedFile {
				provider: "youtube".to_owned(),
				id:       "dQw4w9WgXcQ".to_owned(),
				path:     PathBuf::from("/tmp/staging dir/dQw4w9WgXcQ.mp3"),
			}),
			LineType::Custom.try_get_moved_file(input)
		);

		// should early-return because of not being the correct variant
		assert_eq!(None, LineType::Download.try_get_moved_file(input));

		// should not match the regex
		assert_eq!(None, LineType::Custom.try_get_moved_file("MOVE"));
	}
}

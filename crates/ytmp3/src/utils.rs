//! Utils for the `ytmp3` binary

use std::{
	borrow::Cow,
	io::{
		BufRead,
		Write,
	},
};

use indicatif::{
	ProgressBar,
	ProgressDrawTarget,
};
use libytmp3::{
	error::IOErrorToError,
	spawn::ytdl::warn_minimal_version,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::clap_conf::CliDerive;

/// Helper function to set the progressbar to a draw target if mode is interactive
pub fn set_progressbar(bar: &ProgressBar, main_args: &CliDerive) {
	if main_args.is_interactive() {
		bar.set_draw_target(ProgressDrawTarget::stderr());
	}
}

/// Test if Youtube-DL(p) is installed and reachable, including required dependencies like ffmpeg
/// Returns the found version, a outdated version is only warned about
pub fn require_ytdl_installed() -> Result<String, crate::Error> {
	let version = libytmp3::spawn::ytdl::require_ytdl_installed()?;

	debug!("Found youtube-dl version {version}");
	warn_minimal_version(&version);

	return Ok(version);
}

/// Print `msg` and read a line from `reader`
/// Returns [`None`] if `reader` has reached EOF
fn read_line<R: BufRead>(reader: &mut R, msg: &str) -> Result<Option<String>, crate::Error> {
	print!("{msg}");
	// ensure the message is printed before reading
	std::io::stdout().flush().attach_location_err("stdout flush")?;

	let mut input = String::new();
	let read = reader
		.read_line(&mut input)
		.attach_location_err("stdin read_line")?;

	if read == 0 {
		return Ok(None);
	}

	return Ok(Some(input.trim().to_owned()));
}

/// Get input from `reader` (commonly STDIN) with "possible" or "default"
/// if using "default", remember to set a character in "possible" to upper-case
/// On EOF, "default" is returned (or a error if there is no default)
pub fn get_input<R: BufRead>(
	reader: &mut R,
	msg: &str,
	possible: &[&'static str],
	default: &'static str,
) -> Result<String, crate::Error> {
	let possible_converted = possible.iter().map(|v| return v.to_lowercase()).collect::<Vec<String>>();
	// dont use "possible_converted" for "possible_converted_string", because otherwise the default will not be shown anymore
	let possible_converted_string = possible.join("/");
	loop {
		let Some(input) = read_line(reader, &format!("{msg} [{possible_converted_string}]: "))? else {
			// print a newline so that following output does not continue the prompt line
			println!();

			if default.is_empty() {
				return Err(crate::Error::other("STDIN closed without a answer"));
			}

			return Ok(default.to_owned());
		};

		let input = input.to_lowercase();

		// return default if empty and default is set
		if input.is_empty() {
			if !default.is_empty() {
				return Ok(default.to_owned());
			}

			// special case when empty, to more emphasize that its empty
			println!("... Invalid Input: (Empty)");
			continue;
		}

		if possible_converted.contains(&input) {
			return Ok(input);
		}

		println!("... Invalid Input: \"{input}\"");
	}
}

/// Get a positive number from `reader` (commonly STDIN), returning "default" on empty input or EOF
pub fn get_number_input<R: BufRead>(reader: &mut R, msg: &str, default: usize) -> Result<usize, crate::Error> {
	loop {
		let Some(input) = read_line(reader, &format!("{msg} [{default}]: "))? else {
			println!();
			return Ok(default);
		};

		if input.is_empty() {
			return Ok(default);
		}

		match input.parse::<usize>() {
			Ok(0) => println!("... Invalid Input: has to be at least 1"),
			Ok(v) => return Ok(v),
			Err(_) => println!("... Invalid Input: \"{input}\" is not a number"),
		}
	}
}

/// Get the display width of a single grapheme cluster
fn cluster_width(cluster: &str) -> usize {
	#[allow(unused_mut)] // mut is only used with "workaround_fe0f"
	let mut width = unicode_width::UnicodeWidthStr::width(cluster);

	#[cfg(feature = "workaround_fe0f")]
	{
		// some terminals display emoji-style clusters as 2 wide, while unicode-width counts them as 1
		if width == 1 && cluster.contains('\u{fe0f}') {
			width = 2;
		}
	}

	return width;
}

/// Truncation indicator added when truncating a message
const TRUNCATE_INDICATOR: &str = "...";

/// Truncate `msg` to fit into `display_pos` display positions, without splitting a grapheme cluster
/// If `with_dots` is set, the truncated message ends with "..." (which counts into `display_pos`)
pub fn truncate_message_display_pos<'a, M>(msg: &'a M, display_pos: usize, with_dots: bool) -> Cow<'a, str>
where
	M: AsRef<str> + ?Sized,
{
	let msg = msg.as_ref();

	let total_width: usize = msg.graphemes(true).map(|v| return cluster_width(v)).sum();

	if total_width <= display_pos {
		return Cow::Borrowed(msg);
	}

	let available = if with_dots {
		display_pos.saturating_sub(TRUNCATE_INDICATOR.len())
	} else {
		display_pos
	};

	let mut used = 0;
	let mut end_byte = 0;

	for (index, cluster) in msg.grapheme_indices(true) {
		let width = cluster_width(cluster);
		if used + width > available {
			break;
		}
		used += width;
		end_byte = index + cluster.len();
	}

	if with_dots {
		// dont output the indicator alone if it does not fit
		if display_pos < TRUNCATE_INDICATOR.len() {
			return Cow::Borrowed(&msg[..end_byte]);
		}

		return Cow::Owned(format!("{}{TRUNCATE_INDICATOR}", &msg[..end_byte]));
	}

	return Cow::Borrowed(&msg[..end_byte]);
}

//! Module for [`YtdlFetcher`], the [`MediaFetcher`] implementation using youtube-dl(p)

use std::{
	io::{
		BufRead,
		BufReader,
	},
	path::PathBuf,
	process::ExitStatus,
	time::Duration,
};

use assemble_cmd::{
	assemble_probe_command,
	assemble_ytdl_command,
};
use parse_linetype::LineType;

use crate::{
	data::media::MediaMetadata,
	error::IOErrorToError,
	spawn::ytdl::YTDL_BIN_NAME,
	traits::fetcher::{
		FetchRequest,
		MediaFetcher,
	},
};

mod assemble_cmd;
mod parse_linetype;

/// [`MediaFetcher`] that spawns youtube-dl(p), which uses ffmpeg for transcoding
/// Assumes ytdl and ffmpeg have already been checked to exist and work (like using [`crate::spawn::ytdl::require_ytdl_installed`])
#[derive(Debug, Clone, Copy, Default)]
pub struct YtdlFetcher;

impl MediaFetcher for YtdlFetcher {
	fn probe(&self, url: &str, playlist: bool) -> Result<MediaMetadata, crate::Error> {
		let args = assemble_probe_command(url, playlist);

		let output = duct::cmd(YTDL_BIN_NAME, args)
			.stdout_capture()
			.stderr_capture()
			.unchecked()
			.run()
			.map_err(|err| {
				return crate::Error::fetch_failed(format!("Could not spawn {YTDL_BIN_NAME}: {err}"));
			})?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			let message = last_error_line(&stderr).unwrap_or("no error message");

			return Err(crate::Error::fetch_failed(format!(
				"Probing \"{url}\" failed ({}): {message}",
				output.status
			)));
		}

		return MediaMetadata::from_json(&String::from_utf8(output.stdout)?);
	}

	fn fetch_and_transcode(
		&self,
		request: &FetchRequest<'_>,
		progress: &mut dyn FnMut(u8),
	) -> Result<PathBuf, crate::Error> {
		std::fs::create_dir_all(request.output_dir).attach_path_err(request.output_dir)?;

		let ytdl_child = {
			let args = assemble_ytdl_command(request);

			// merge stderr into stdout, the exit status is checked manually
			duct::cmd(YTDL_BIN_NAME, args)
				.stderr_to_stdout()
				.unchecked()
				.reader()
				.map_err(|err| {
					return crate::Error::fetch_failed(format!("Could not spawn {YTDL_BIN_NAME}: {err}"));
				})?
		};

		let stdout_reader = BufReader::new(&ytdl_child);

		let result = handle_stdout(request.print_command_log, progress, stdout_reader);

		let status: Option<ExitStatus> = loop {
			// wait loop, because a "ReaderHandle" does not implement "wait", only "try_wait", but have to wait for it to exit here
			match ytdl_child.try_wait() {
				Ok(Some(output)) => break Some(output.status),
				Ok(None) => (),
				Err(err) => {
					warn!("Waiting for youtube-dl failed: {err}");
					break None;
				},
			}

			std::thread::sleep(Duration::from_millis(100)); // sleep to save some time between the next wait (to not cause constant cpu spike)
		};

		if let Some(last_error) = result.last_error {
			return Err(crate::Error::fetch_failed(last_error));
		}

		if let Some(status) = status {
			if !status.success() {
				return Err(crate::Error::fetch_failed(format!(
					"{YTDL_BIN_NAME} exited unsuccessfully: {status}"
				)));
			}
		}

		let Some(file) = result.moved_file else {
			return Err(crate::Error::fetch_failed(format!(
				"{YTDL_BIN_NAME} did not report a output file for \"{}\"",
				request.url
			)));
		};

		// youtube-dl reports the path as given in the output template, which is already absolute, but just in case
		let file = if file.is_relative() {
			request.output_dir.join(file)
		} else {
			file
		};

		if !file.exists() {
			return Err(crate::Error::fetch_failed(format!(
				"Reported output file \"{}\" does not exist",
				file.display()
			)));
		}

		return Ok(file);
	}
}

/// Get the last error line of a youtube-dl output
fn last_error_line(output: &str) -> Option<&str> {
	return output
		.lines()
		.rev()
		.find(|line| return LineType::try_from_line(line) == Some(LineType::Error));
}

/// What was found while reading the output of a youtube-dl download
#[derive(Debug, Default, PartialEq)]
struct StdoutResult {
	/// The path of the final file, from the "MOVE" print
	moved_file: Option<PathBuf>,
	/// The last error line encountered
	last_error: Option<String>,
}

/// Helper function to handle the output from a spawned ytdl command
#[inline]
fn handle_stdout<R: BufRead>(print_stdout: bool, progress: &mut dyn FnMut(u8), reader: R) -> StdoutResult {
	let mut result = StdoutResult::default();

	for line in reader.lines() {
		let line = match line {
			Ok(v) => v,
			Err(err) => {
				debug!("duct lines reader errored: {}", err);
				break;
			},
		};

		// only print STDOUT to output when requested
		if print_stdout {
			trace!("ytdl [STDOUT]: \"{}\"", line);
		}

		let Some(linetype) = LineType::try_from_line(&line) else {
			if !line.is_empty() {
				info!("No type has been found for line \"{}\"", line);
			}
			continue;
		};

		match linetype {
			// currently there is nothing that needs to be done with these lines
			LineType::Ffmpeg | LineType::ExtractAudio | LineType::ProviderSpecific | LineType::Generic => (),
			LineType::Download => {
				if let Some(percent) = linetype.try_get_download_percent(&line) {
					progress(percent);
				}
			},
			LineType::Custom => {
				if let Some(moved) = linetype.try_get_moved_file(&line) {
					debug!(
						"Found MOVE: \"{}\" \"{}\" \"{}\"",
						moved.provider,
						moved.id,
						moved.path.display()
					);
					if result.moved_file.is_some() {
						warn!("Found MOVE, but already had a output file, using the newer one");
					}
					result.moved_file = Some(moved.path);
				}
			},
			LineType::Error => {
				// the following is using debug printing, because the line may include escape characters, which would mess-up the printing, but is still good to know when reading
				warn!("Encountered youtube-dl error: {:#?}", line);
				result.last_error = Some(line);
			},
			LineType::Warning => {
				// ytdl warnings are non-fatal, but should still be logged
				warn!("youtube-dl: {:#?}", line);
			},
		}
	}

	return result;
}

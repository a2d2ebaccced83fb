//! Module for spawning and checking the external tools

pub mod ffmpeg;
pub mod ytdl;

use std::process::{
	Command,
	Output,
	Stdio,
};

use crate::error::IOErrorToError;

/// Run `cmd` to completion and return its stdout as a string
/// `name` is used for error messages
fn version_output(mut cmd: Command, name: &str) -> Result<String, crate::Error> {
	let command_output: Output = cmd
		.stderr(Stdio::null())
		.stdout(Stdio::piped())
		.stdin(Stdio::null())
		.spawn()
		.attach_location_err(format!("{name} spawn"))?
		.wait_with_output()
		.attach_location_err(format!("{name} wait_with_output"))?;

	if !command_output.status.success() {
		return Err(crate::Error::command_unsuccessful(format!(
			"{name} did not successfully exit!"
		)));
	}

	return Ok(String::from_utf8(command_output.stdout)?);
}

//! Module for utility functions, that may be used in various other modules

use std::path::{
	Path,
	PathBuf,
};

use path_absolutize::Absolutize;

/// Simple helper to resolve "~" to the Home directory
/// System agnostic as long as [`dirs::home_dir`] support's it
pub fn expand_tidle<I: AsRef<Path>>(input: I) -> Option<PathBuf> {
	let path = input.as_ref();

	if !path.starts_with("~") {
		return Some(path.to_owned());
	}
	if path == Path::new("~") {
		return dirs::home_dir();
	}

	let rest = path.strip_prefix("~/").ok()?;

	return dirs::home_dir().map(|mut v| {
		// handle case where "home_dir" might be set to the root POSIX directory
		return if v == Path::new("/") {
			Path::new("/").join(rest)
		} else {
			v.push(rest);
			v
		};
	});
}

/// Convert input path to a absolute path, without hitting the filesystem.
/// This function handles `~`(home)
///
/// If the start is not absolute, CWD will be used.
///
/// This functions behavior:
/// - `/path/to/inner/../somewhere` -> `/path/to/somewhere`
/// - `relative/to/somewhere` -> `CWD/relative/to/somewhere`
/// - `./somewhere/./path` -> `CWD/somewhere/path`
/// - `~/somewhere/in/home` -> `HOME/somewhere/in/home`
pub fn to_absolute<P: AsRef<Path>>(input: P) -> std::io::Result<PathBuf> {
	let Some(converted) = expand_tidle(input) else {
		return Err(std::io::Error::new(
			std::io::ErrorKind::InvalidInput,
			"Could not resolve \"~\"",
		));
	};

	return converted.absolutize().map(|v| return v.to_path_buf());
}

/// Characters that are replaced when a string is used as a single path component
const UNSAFE_PATH_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Make a string safe to be used as a single path component (a file or directory name)
///
/// Replaces path separators and characters not allowed on common filesystems with `_`,
/// trims surrounding whitespace and dots, and returns `None` if nothing usable is left
#[must_use]
pub fn sanitize_path_component<S: AsRef<str>>(input: S) -> Option<String> {
	let replaced: String = input
		.as_ref()
		.chars()
		.map(|c| {
			if UNSAFE_PATH_CHARS.contains(&c) || c.is_control() {
				return '_';
			}
			return c;
		})
		.collect();

	let trimmed = replaced.trim().trim_matches('.').trim();

	if trimmed.is_empty() {
		return None;
	}

	return Some(trimmed.to_owned());
}

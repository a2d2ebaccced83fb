//! Module for the Error type this library uses

use std::{
	backtrace::Backtrace,
	io::Error as ioError,
	path::Path,
};

/// Macro to not repeat having to do multiple implementations of a [ErrorInner] variant with the same string type
macro_rules! fn_string {
	($fn_name:ident, $fortype:expr) => {
		#[doc = concat!("Create a new [Self] as [", stringify!($fortype), "]")]
		pub fn $fn_name<M>(msg: M) -> Self
		where
			M: Into<String>,
		{
			return Self::new($fortype(msg.into()));
		}
	};
}

/// Macro to not repeat having to do multiple implementations of a [ErrorInner] variant with the same path type
macro_rules! fn_path {
	($fn_name:ident, $fortype:expr) => {
		#[doc = concat!("Create a new [Self] as [", stringify!($fortype), "]")]
		pub fn $fn_name<M, P>(msg: M, path: P) -> Self
		where
			M: Into<String>,
			P: AsRef<Path>,
		{
			return Self::new($fortype(msg.into(), path.as_ref().to_string_lossy().to_string()));
		}
	};
}

/// Error type for libytmp3, contains a backtrace, wrapper around [ErrorInner]
#[derive(Debug)]
pub struct Error {
	/// The actual error
	source:    ErrorInner,
	/// The backtrace for the error
	backtrace: Backtrace,
}

impl Error {
	/// Construct a new [Error] instance based on [ErrorInner]
	pub fn new(source: ErrorInner) -> Self {
		return Self {
			source,
			backtrace: Backtrace::capture(),
		};
	}

	/// Get the backtrace that is stored
	pub fn get_backtrace(&self) -> &Backtrace {
		return &self.backtrace;
	}

	/// Get the wrapped [ErrorInner], for matching on the kind of error
	pub fn inner(&self) -> &ErrorInner {
		return &self.source;
	}

	/// Create a custom [ioError] with this [Error] wrapped around with a [Path] attached
	pub fn custom_ioerror_path<M, P>(kind: std::io::ErrorKind, msg: M, path: P) -> Self
	where
		M: Into<String>,
		P: AsRef<Path>,
	{
		return Self::new(ErrorInner::IoError(
			ioError::new(kind, msg.into()),
			format_path(path.as_ref().to_string_lossy().to_string()),
		));
	}

	/// Create a custom [ioError] with this [Error] wrapped around with a location attached
	pub fn custom_ioerror_location<M, L>(kind: std::io::ErrorKind, msg: M, location: L) -> Self
	where
		M: Into<String>,
		L: AsRef<str>,
	{
		return Self::new(ErrorInner::IoError(
			ioError::new(kind, msg.into()),
			format_location(location.as_ref()),
		));
	}

	fn_string!(other, ErrorInner::Other);
	fn_string!(no_captures, ErrorInner::NoCapturesFound);
	fn_string!(command_unsuccessful, ErrorInner::CommandNotSuccesful);
	fn_string!(fetch_failed, ErrorInner::FetchFailed);
	fn_path!(tag_write_failed, ErrorInner::TagWriteFailed);
	fn_path!(directory_unavailable, ErrorInner::DirectoryUnavailable);
	fn_path!(placement_conflict, ErrorInner::PlacementConflict);
}

impl PartialEq for Error {
	fn eq(&self, other: &Self) -> bool {
		return self.source == other.source;
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		return self.source.fmt(f);
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		return self.source.source();
	}
}

// implement all From<> variants that ErrorInner also implements
impl<T> From<T> for Error
where
	T: Into<ErrorInner>,
{
	fn from(value: T) -> Self {
		return Self::new(value.into());
	}
}

/// Error type for "ytmp3", implements all Error types that could happen in this lib
#[derive(thiserror::Error, Debug)]
pub enum ErrorInner {
	/// Wrapper Variant for [`std::io::Error`]
	/// Argument 1 (String) is up to the implementation to set, commonly the path
	#[error("IoError: {0}; {1}")]
	IoError(std::io::Error, String),
	/// Wrapper Variant for [`std::string::FromUtf8Error`]
	#[error("FromStringUTF8Error: {0}")]
	FromStringUTF8Error(#[from] std::string::FromUtf8Error),
	/// Variant for serde-json Errors
	#[error("SerdeJSONError: {0}")]
	SerdeJSONError(#[from] serde_json::Error),

	/// Variant for when a spawned command was not successfull
	#[error("CommandNotSuccessfull: {0}")]
	CommandNotSuccesful(String),
	/// Variant for when no regex captures have been found
	#[error("NoCapturesFound: {0}")]
	NoCapturesFound(String),

	/// Variant for when the download, format negotiation or transcode of a media failed
	#[error("FetchFailed: {0}")]
	FetchFailed(String),
	/// Variant for when writing the tag container of a file failed
	#[error("TagWriteFailed: {0}; Path: \"{1}\"")]
	TagWriteFailed(String, String),
	/// Variant for when a destination directory could not be created or is not a directory
	#[error("DirectoryUnavailable: {0}; Path: \"{1}\"")]
	DirectoryUnavailable(String, String),
	/// Variant for when the placement target of a file already exists
	#[error("PlacementConflict: {0}; Path: \"{1}\"")]
	PlacementConflict(String, String),
	/// Variant for Other messages
	#[error("Other: {0}")]
	Other(String),
}

// this is custom, some errors like "std::io::Error" do not implement "PartialEq", but some inner type may do
impl PartialEq for ErrorInner {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::IoError(l0, l1), Self::IoError(r0, r1)) => return l0.kind() == r0.kind() && l1 == r1,
			(Self::FromStringUTF8Error(l0), Self::FromStringUTF8Error(r0)) => return l0 == r0,
			// serde_json errors dont implement "PartialEq", so compare the displayed form
			(Self::SerdeJSONError(l0), Self::SerdeJSONError(r0)) => return l0.to_string() == r0.to_string(),

			(Self::CommandNotSuccesful(l0), Self::CommandNotSuccesful(r0)) => return l0 == r0,
			(Self::NoCapturesFound(l0), Self::NoCapturesFound(r0)) => return l0 == r0,
			(Self::FetchFailed(l0), Self::FetchFailed(r0)) => return l0 == r0,
			(Self::TagWriteFailed(l0, l1), Self::TagWriteFailed(r0, r1)) => return l0 == r0 && l1 == r1,
			(Self::DirectoryUnavailable(l0, l1), Self::DirectoryUnavailable(r0, r1)) => return l0 == r0 && l1 == r1,
			(Self::PlacementConflict(l0, l1), Self::PlacementConflict(r0, r1)) => return l0 == r0 && l1 == r1,
			(Self::Other(l0), Self::Other(r0)) => return l0 == r0,

			(_, _) => return false,
		}
	}
}

/// Helper function to keep consistent formatting
#[inline]
fn format_path(msg: String) -> String {
	return format!("Path \"{}\"", msg);
}
/// Helper function to keep consistent formatting
#[inline]
fn format_location(msg: &str) -> String {
	return format!("Location \"{}\"", msg);
}

/// Trait to map [std::io::Error] into [Error]
pub trait IOErrorToError<T> {
	/// Map a [std::io::Error] to [Error] with a [std::path::Path] attached
	fn attach_path_err<P: AsRef<Path>>(self, path: P) -> Result<T, crate::Error>;
	/// Map a [std::io::Error] to [Error] with a location attached (for when [attach_path_err] is not applicable)
	fn attach_location_err<P: AsRef<str>>(self, pipe_msg: P) -> Result<T, crate::Error>;
}

impl<T> IOErrorToError<T> for Result<T, std::io::Error> {
	fn attach_path_err<P: AsRef<Path>>(self, path: P) -> Result<T, crate::Error> {
		return match self {
			Ok(v) => Ok(v),
			Err(e) => Err(crate::Error::new(ErrorInner::IoError(
				e,
				format_path(path.as_ref().to_string_lossy().to_string()),
			))),
		};
	}

	fn attach_location_err<L: AsRef<str>>(self, location: L) -> Result<T, crate::Error> {
		return match self {
			Ok(v) => Ok(v),
			Err(e) => Err(crate::Error::new(ErrorInner::IoError(
				e,
				format_location(location.as_ref()),
			))),
		};
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_attach_path_err() {
		let res: Result<(), std::io::Error> = Err(ioError::new(std::io::ErrorKind::NotFound, "missing"));

		assert_eq!(
			Err(Error::custom_ioerror_path(
				std::io::ErrorKind::NotFound,
				"missing",
				"/some/path"
			)),
			res.attach_path_err("/some/path")
		);
	}

	#[test]
	fn test_display_domain_variants() {
		assert_eq!(
			"PlacementConflict: Destination already exists; Path: \"/music/a.mp3\"",
			Error::placement_conflict("Destination already exists", "/music/a.mp3").to_string()
		);
		assert_eq!("FetchFailed: no output", Error::fetch_failed("no output").to_string());
	}
}

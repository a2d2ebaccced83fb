//! Module for resolving where finished media is placed

use std::{
	ffi::{
		OsStr,
		OsString,
	},
	path::{
		Path,
		PathBuf,
	},
};

use crate::{
	data::title::{
		ArtistTitle,
		UNKNOWN_ARTIST,
	},
	error::IOErrorToError,
	utils::{
		sanitize_path_component,
		to_absolute,
	},
};

/// The conventions for where finished media is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationConvention {
	/// A fixed directory that media-library software watches and automatically imports from
	AutoImport,
	/// The library root with a sub-directory for each artist
	ArtistFolderedLibrary,
	/// Keep the files in the staging directory they were downloaded to
	Staging,
}

impl DestinationConvention {
	/// Get the final file name for a media with `tags` and extension `ext` under this convention
	/// Returns [`None`] for [`DestinationConvention::Staging`], because the file keeps its downloaded name
	#[must_use]
	pub fn file_name_for(&self, tags: &ArtistTitle, ext: Option<&OsStr>) -> Option<PathBuf> {
		let stem = match self {
			Self::Staging => return None,
			Self::AutoImport => tags.to_string(),
			// the artist is already the directory
			Self::ArtistFolderedLibrary => tags.song.clone(),
		};

		// titles may contain ".", so the extension is appended instead of set
		let mut name = OsString::from(sanitize_path_component(stem)?);

		if let Some(ext) = ext {
			name.push(".");
			name.push(ext);
		}

		return Some(PathBuf::from(name));
	}
}

impl std::fmt::Display for DestinationConvention {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		return f.write_str(match self {
			Self::AutoImport => "auto-import",
			Self::ArtistFolderedLibrary => "artist-foldered-library",
			Self::Staging => "staging",
		});
	}
}

/// Resolves a [`DestinationConvention`] to a existing directory
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationResolver {
	/// Absolute path of the auto-import directory
	auto_import: PathBuf,
	/// Absolute path of the library root
	library:     PathBuf,
	/// Absolute path of the staging directory
	staging:     PathBuf,
}

impl DestinationResolver {
	/// Create a new instance, all paths are converted to absolute paths (including "~")
	pub fn new<A, L, S>(auto_import: A, library: L, staging: S) -> Result<Self, crate::Error>
	where
		A: AsRef<Path>,
		L: AsRef<Path>,
		S: AsRef<Path>,
	{
		return Ok(Self {
			auto_import: to_absolute(&auto_import).attach_path_err(auto_import)?,
			library:     to_absolute(&library).attach_path_err(library)?,
			staging:     to_absolute(&staging).attach_path_err(staging)?,
		});
	}

	/// Get the staging directory path, without creating it
	#[must_use]
	pub fn staging(&self) -> &Path {
		return &self.staging;
	}

	/// Resolve the directory for `convention`, creating it (and its parents) if it does not exist yet
	///
	/// `artist` is only used for [`DestinationConvention::ArtistFolderedLibrary`], where [`UNKNOWN_ARTIST`] is used if it is missing or unusable as a directory name
	pub fn resolve(&self, convention: DestinationConvention, artist: Option<&str>) -> Result<PathBuf, crate::Error> {
		let dir = match convention {
			DestinationConvention::AutoImport => self.auto_import.clone(),
			DestinationConvention::Staging => self.staging.clone(),
			DestinationConvention::ArtistFolderedLibrary => {
				let artist_dir = artist
					.and_then(sanitize_path_component)
					.unwrap_or_else(|| return UNKNOWN_ARTIST.to_owned());

				self.library.join(artist_dir)
			},
		};

		ensure_dir(&dir)?;

		return Ok(dir);
	}
}

/// Create `dir` and all its parents if it does not exist yet
fn ensure_dir(dir: &Path) -> Result<(), crate::Error> {
	if dir.is_dir() {
		return Ok(());
	}

	if dir.exists() {
		return Err(crate::Error::directory_unavailable(
			"Path exists, but is not a directory",
			dir,
		));
	}

	debug!("Creating directory \"{}\"", dir.display());

	return std::fs::create_dir_all(dir).map_err(|err| {
		return crate::Error::directory_unavailable(format!("Could not create directory: {err}"), dir);
	});
}

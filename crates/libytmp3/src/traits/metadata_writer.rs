//! Module for the [`MetadataWriter`] trait

use std::path::Path;

use crate::data::title::ArtistTitle;

/// Trait for persisting artist and title into the tag container of a file
pub trait MetadataWriter {
	/// Write the artist and song of `tags` into the file at `path`, in place
	///
	/// Fails with [`crate::error::ErrorInner::TagWriteFailed`]
	fn write_tags(&self, path: &Path, tags: &ArtistTitle) -> Result<(), crate::Error>;
}

//! Module for [`LoftyWriter`], the [`MetadataWriter`] implementation using lofty

use std::path::Path;

use lofty::{
	config::WriteOptions,
	file::TaggedFileExt,
	probe::Probe,
	tag::{
		Accessor,
		Tag,
		TagExt,
	},
};

use crate::{
	data::title::ArtistTitle,
	traits::metadata_writer::MetadataWriter,
};

/// [`MetadataWriter`] that writes the tag container with lofty
/// The primary tag type of the container is used, and created if the file does not have one yet
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyWriter;

impl MetadataWriter for LoftyWriter {
	fn write_tags(&self, path: &Path, tags: &ArtistTitle) -> Result<(), crate::Error> {
		let lofty_err = |err: lofty::error::LoftyError| {
			return crate::Error::tag_write_failed(format!("LoftyError: {err}"), path);
		};

		let mut tagged_file = Probe::open(path).map_err(lofty_err)?.read().map_err(lofty_err)?;

		if tagged_file.primary_tag().is_none() {
			let tag_type = tagged_file.primary_tag_type();
			debug!("No {:?} tag in \"{}\", creating one", tag_type, path.display());
			tagged_file.insert_tag(Tag::new(tag_type));
		}

		let Some(primary_tag) = tagged_file.primary_tag_mut() else {
			return Err(crate::Error::tag_write_failed(
				"Container does not support its primary tag type",
				path,
			));
		};

		primary_tag.set_artist(tags.artist.clone());
		primary_tag.set_title(tags.song.clone());

		primary_tag
			.save_to_path(path, WriteOptions::default())
			.map_err(lofty_err)?;

		trace!("Wrote tags \"{}\" to \"{}\"", tags, path.display());

		return Ok(());
	}
}

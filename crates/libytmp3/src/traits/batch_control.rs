//! Module for the [`BatchControl`] trait

use crate::data::{
	batch::PlaylistBatch,
	media::PlaylistEntry,
};

/// Trait for deciding how a playlist is processed in batches, commonly by asking the user
pub trait BatchControl {
	/// Confirm whether `batch` should be downloaded, `entries` are the entries of the batch in order
	/// Returning `false` stops the playlist run
	fn confirm_batch(&mut self, batch: &PlaylistBatch, entries: &[PlaylistEntry]) -> Result<bool, crate::Error>;

	/// Get the size for the next batch, only called when there are `remaining` entries left
	/// `current` is the size of the last batch
	fn next_batch_size(&mut self, remaining: usize, current: usize) -> Result<usize, crate::Error>;
}

//! Module containing [`PlaylistBatch`]

use std::ops::Range;

/// A ordered slice of playlist entries that is confirmed and downloaded together
///
/// The start never exceeds the entry count and the size is always at least 1 (unless the playlist is exhausted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistBatch {
	/// Index of the first entry in this batch (0-based)
	start: usize,
	/// Amount of entries in this batch
	size:  usize,
	/// Amount of entries in the whole playlist
	total: usize,
}

impl PlaylistBatch {
	/// Create the first batch of a playlist with `total` entries
	/// Returns [`None`] if the playlist is empty
	#[must_use]
	pub fn first(total: usize, requested_size: usize) -> Option<Self> {
		return Self::at(0, total, requested_size);
	}

	/// Create a batch starting at `start`, with the size clamped to `1..=remaining`
	/// Returns [`None`] if there are no entries left at `start`
	fn at(start: usize, total: usize, requested_size: usize) -> Option<Self> {
		if start >= total {
			return None;
		}

		let size = requested_size.clamp(1, total - start);

		return Some(Self { start, size, total });
	}

	/// Create the batch following this one, with a new requested size
	/// Returns [`None`] if this batch was the last one
	#[must_use]
	pub fn next(&self, requested_size: usize) -> Option<Self> {
		return Self::at(self.end(), self.total, requested_size);
	}

	/// Index of the first entry in this batch (0-based)
	#[must_use]
	pub fn start(&self) -> usize {
		return self.start;
	}

	/// Amount of entries in this batch
	#[must_use]
	pub fn size(&self) -> usize {
		return self.size;
	}

	/// Index after the last entry in this batch
	#[must_use]
	pub fn end(&self) -> usize {
		return self.start + self.size;
	}

	/// Amount of entries in the whole playlist
	#[must_use]
	pub fn total(&self) -> usize {
		return self.total;
	}

	/// Amount of entries left after this batch
	#[must_use]
	pub fn remaining_after(&self) -> usize {
		return self.total - self.end();
	}

	/// Get the range of entries to index the playlist with
	#[must_use]
	pub fn range(&self) -> Range<usize> {
		return self.start..self.end();
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_empty_playlist() {
		assert_eq!(None, PlaylistBatch::first(0, 10));
	}

	#[test]
	fn test_batches_of_10_over_25() {
		let first = PlaylistBatch::first(25, 10).expect("Expected a first batch");
		assert_eq!(0..10, first.range());
		assert_eq!(15, first.remaining_after());

		let second = first.next(10).expect("Expected a second batch");
		assert_eq!(10..20, second.range());

		let third = second.next(10).expect("Expected a third batch");
		assert_eq!(20..25, third.range());
		assert_eq!(5, third.size());
		assert_eq!(0, third.remaining_after());

		assert_eq!(None, third.next(10));
	}

	#[test]
	fn test_size_is_clamped() {
		// a size of 0 is treated as 1
		let batch = PlaylistBatch::first(5, 0).expect("Expected a batch");
		assert_eq!(1, batch.size());

		// a size larger than the playlist is the playlist
		let batch = PlaylistBatch::first(5, 100).expect("Expected a batch");
		assert_eq!(0..5, batch.range());
	}

	#[test]
	fn test_next_changes_size() {
		let first = PlaylistBatch::first(25, 10).expect("Expected a first batch");
		let second = first.next(3).expect("Expected a second batch");

		assert_eq!(10..13, second.range());
		assert!(second.start() > first.start());
	}
}

//! Module containing [`ArtistTitle`] and the parsing of media titles

/// Separator between the artist and the song in a media title, like "Artist - Song"
pub const TITLE_SEPARATOR: char = '-';

/// Placeholder used when no artist could be derived from a title
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Placeholder used when no song title could be derived from a title
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist and Song derived from a single free-text media title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistTitle {
	/// The Artist part, text before the first separator
	pub artist: String,
	/// The Song part, all text after the first separator
	pub song:   String,
}

impl ArtistTitle {
	/// Create a new instance of [`ArtistTitle`]
	pub fn new<A: Into<String>, S: Into<String>>(artist: A, song: S) -> Self {
		return Self {
			artist: artist.into(),
			song:   song.into(),
		};
	}

	/// Replace empty fields with [`UNKNOWN_ARTIST`] and [`UNKNOWN_TITLE`]
	#[must_use]
	pub fn or_placeholders(mut self) -> Self {
		if self.artist.is_empty() {
			UNKNOWN_ARTIST.clone_into(&mut self.artist);
		}
		if self.song.is_empty() {
			UNKNOWN_TITLE.clone_into(&mut self.song);
		}

		return self;
	}
}

impl std::fmt::Display for ArtistTitle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		return write!(f, "{} - {}", self.artist, self.song);
	}
}

/// Parse a media title into a [`ArtistTitle`]
///
/// Splits at the first [`TITLE_SEPARATOR`] only, everything after it (including further separators) is the song.
/// If no separator is found, the whole (trimmed) title is used for both artist and song.
#[must_use]
pub fn parse_title(title: &str) -> ArtistTitle {
	return match title.split_once(TITLE_SEPARATOR) {
		Some((artist, song)) => ArtistTitle::new(artist.trim(), song.trim()),
		None => {
			let trimmed = title.trim();
			ArtistTitle::new(trimmed, trimmed)
		},
	};
}

//! Module containing [`MediaMetadata`] and [`PlaylistEntry`]

use serde::{
	Deserialize,
	Deserializer,
	Serialize,
};

/// Deserialize a value that may be `null` in the json as its [`Default`]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	return Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default());
}

/// Metadata of a media or a playlist, as returned by the fetcher without downloading
///
/// Deserializable from the json output of youtube-dl(p) (`-J`), unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
	/// The ID of the media or playlist
	pub id:          String,
	/// The Title of the media or playlist, may be empty
	#[serde(default, deserialize_with = "null_as_default")]
	pub title:       String,
	/// The uploader (channel) of the media
	#[serde(default)]
	pub uploader:    Option<String>,
	/// The duration in seconds, youtube-dl may report fractional seconds
	#[serde(default)]
	pub duration:    Option<f64>,
	/// The URL of the page the media is from
	#[serde(default)]
	pub webpage_url: Option<String>,
	/// All entries of the playlist, only [`Some`] if the url resolved to a playlist
	#[serde(default)]
	pub entries:     Option<Vec<PlaylistEntry>>,
}

impl MediaMetadata {
	/// Create a new instance of [`MediaMetadata`] with only the required fields
	pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T) -> Self {
		return Self {
			id:          id.into(),
			title:       title.into(),
			uploader:    None,
			duration:    None,
			webpage_url: None,
			entries:     None,
		};
	}

	/// Builder function to add playlist entries
	#[must_use]
	pub fn with_entries(mut self, entries: Vec<PlaylistEntry>) -> Self {
		self.entries = Some(entries);

		return self;
	}

	/// Parse a [`MediaMetadata`] from a youtube-dl(p) json dump
	pub fn from_json(input: &str) -> Result<Self, crate::Error> {
		return Ok(serde_json::from_str(input)?);
	}

	/// Get the duration as whole seconds
	#[must_use]
	pub fn duration_seconds(&self) -> Option<u64> {
		// durations are never negative, "as" saturates anything out of range
		return self.duration.map(|v| return v.round() as u64);
	}

	/// Get if this metadata describes a playlist (has entries)
	#[must_use]
	pub fn is_playlist(&self) -> bool {
		return self.entries.is_some();
	}
}

/// A single entry of a playlist from a flat playlist extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
	/// The ID of the media
	#[serde(default, deserialize_with = "null_as_default")]
	pub id:    String,
	/// The Title of the media, not always available in a flat extraction
	#[serde(default)]
	pub title: Option<String>,
	/// The URL of the media
	#[serde(default)]
	pub url:   Option<String>,
}

impl PlaylistEntry {
	/// Create a new instance of [`PlaylistEntry`]
	pub fn new<I: Into<String>, T: Into<String>, U: Into<String>>(id: I, title: T, url: U) -> Self {
		return Self {
			id:    id.into(),
			title: Some(title.into()),
			url:   Some(url.into()),
		};
	}

	/// Get the URL to download this entry with, falls back to the ID
	#[must_use]
	pub fn target(&self) -> &str {
		return self.url.as_deref().unwrap_or(&self.id);
	}

	/// Get the Title to display for this entry
	#[must_use]
	pub fn display_title(&self) -> &str {
		return self.title.as_deref().unwrap_or(&self.id);
	}
}

//! Module for Clap related structs (derived)

#![deny(missing_docs)] // comments are used for "--help" generation, so it should always be defined

use std::path::PathBuf;

use clap::{
	ArgAction,
	Args,
	Parser,
	Subcommand,
	ValueEnum,
};
use is_terminal::IsTerminal;
use libytmp3::{
	config::{
		DEFAULT_AUDIO_FORMAT,
		DEFAULT_BATCH_SIZE,
		DEFAULT_QUALITY_KBPS,
		DEFAULT_RETRIES,
		DEFAULT_STAGING_DIR,
	},
	main::destination::DestinationConvention,
};

/// Trait to check and transform all Command Structures
pub trait Check {
	/// Check and transform self to be correct
	fn check(&mut self) -> Result<(), crate::Error>;
}

#[derive(Debug, Parser, Clone, PartialEq)]
#[command(author, version = env!("YTMP3_VERSION"), about, long_about = None)]
#[command(bin_name("ytmp3"))]
#[command(args_override_self(true))] // specifying a argument multiple times overwrites the earlier ones
#[command(disable_help_subcommand(true))] // Disable subcommand "help", only "-h --help" should be used
pub struct CliDerive {
	/// Set Logging verbosity (0 - Default - WARN, 1 - INFO, 2 - DEBUG, 3 - TRACE)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbosity:    u8,
	/// Explicitly set interactive / not interactive
	#[arg(long = "interactive", env = "YTMP3_INTERACTIVE", global = true)]
	pub explicit_tty: Option<bool>,
	/// Force Color to be active in any mode
	#[arg(long = "color", env = "YTMP3_COLOR", global = true)]
	pub force_color:  bool,

	#[command(subcommand)]
	pub subcommands: SubCommands,
}

impl CliDerive {
	/// Execute [`Parser::try_parse`] and apply custom validation and transformation logic
	///
	/// Returns the clap error for usage problems, which should be printed by the caller
	pub fn custom_parse() -> Result<Self, clap::Error> {
		let mut parsed = Self::try_parse()?;

		if let Err(err) = Check::check(&mut parsed) {
			return Err(clap::Error::raw(clap::error::ErrorKind::ValueValidation, format!("{err}\n")));
		}

		return Ok(parsed);
	}

	/// Get if the mode is interactive or not
	#[must_use]
	pub fn is_interactive(&self) -> bool {
		if let Some(explicit) = self.explicit_tty {
			return explicit;
		}

		return std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
	}

	/// Get if the colors are enabled or not
	#[must_use]
	pub fn enable_colors(&self) -> bool {
		return self.force_color | self.is_interactive();
	}
}

impl Check for CliDerive {
	fn check(&mut self) -> Result<(), crate::Error> {
		return Check::check(&mut self.subcommands);
	}
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum SubCommands {
	/// Download one or more URLs, one after another
	Download(CommandDownload),
	/// Download a whole playlist, in batches that are confirmed one at a time
	Playlist(CommandPlaylist),
	/// Generate shell completions
	Completions(CommandCompletions),
}

impl Check for SubCommands {
	fn check(&mut self) -> Result<(), crate::Error> {
		match self {
			SubCommands::Download(v) => return Check::check(v),
			SubCommands::Playlist(v) => return Check::check(v),
			SubCommands::Completions(v) => return Check::check(v),
		}
	}
}

/// Where finished files are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DestinationArg {
	/// The folder media-library software automatically imports from
	AutoImport,
	/// The library root, with a folder for each artist
	Library,
	/// Keep the files in the staging directory
	Staging,
}

impl From<DestinationArg> for DestinationConvention {
	fn from(value: DestinationArg) -> Self {
		return match value {
			DestinationArg::AutoImport => DestinationConvention::AutoImport,
			DestinationArg::Library => DestinationConvention::ArtistFolderedLibrary,
			DestinationArg::Staging => DestinationConvention::Staging,
		};
	}
}

/// Options shared by all downloading commands
#[derive(Debug, Args, Clone, PartialEq)]
pub struct DownloadArgs {
	/// Where finished files are placed
	#[arg(long, value_enum, default_value_t = DestinationArg::AutoImport, env = "YTMP3_DESTINATION")]
	pub destination:         DestinationArg,
	/// Audio format to transcode to
	#[arg(long, default_value = DEFAULT_AUDIO_FORMAT, env = "YTMP3_AUDIO_FORMAT")]
	pub audio_format:        String,
	/// Audio quality in kbps
	#[arg(long, default_value_t = DEFAULT_QUALITY_KBPS, value_parser = clap::value_parser!(u16).range(1..), env = "YTMP3_QUALITY")]
	pub quality:             u16,
	/// Amount of retries for downloads and fragments
	#[arg(long, default_value_t = DEFAULT_RETRIES, env = "YTMP3_RETRIES")]
	pub retries:             u32,
	/// Staging directory to download to before placement
	#[arg(long = "staging", default_value = DEFAULT_STAGING_DIR, env = "YTMP3_STAGING")]
	pub staging_path:        PathBuf,
	/// Auto-Import directory, by default "Automatically Add to Music" in the music directory
	#[arg(long = "auto-import-path", env = "YTMP3_AUTO_IMPORT")]
	pub auto_import_path:    Option<PathBuf>,
	/// Library root directory, by default the music directory
	#[arg(long = "library", env = "YTMP3_LIBRARY")]
	pub library_path:        Option<PathBuf>,
	/// Print Youtube-DL stdout
	/// This will still require logging verbosity set to 3 or "RUST_LOG=trace"
	#[arg(long = "youtubedl-log", env = "YTMP3_YOUTUBEDL_LOG")]
	pub print_youtubedl_log: bool,
}

impl Check for DownloadArgs {
	fn check(&mut self) -> Result<(), crate::Error> {
		self.audio_format = self.audio_format.trim().to_lowercase();

		if self.audio_format.is_empty() {
			return Err(crate::Error::other("\"--audio-format\" cannot be empty"));
		}

		return Ok(());
	}
}

/// Run and download the given URL(s)
#[derive(Debug, Parser, Clone, PartialEq)]
pub struct CommandDownload {
	#[command(flatten)]
	pub options: DownloadArgs,

	/// The URLs to download, in order
	#[arg(required = true, num_args = 1..)]
	pub urls: Vec<String>,
}

impl Check for CommandDownload {
	fn check(&mut self) -> Result<(), crate::Error> {
		// remove surrounding whitespace, which may come from copying urls
		for url in &mut self.urls {
			*url = url.trim().to_owned();
		}

		if self.urls.iter().any(String::is_empty) {
			return Err(crate::Error::other("URLs cannot be empty"));
		}

		return Check::check(&mut self.options);
	}
}

/// Download a playlist in batches
#[derive(Debug, Parser, Clone, PartialEq)]
pub struct CommandPlaylist {
	#[command(flatten)]
	pub options: DownloadArgs,

	/// Amount of playlist entries to confirm and download at a time
	#[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size, env = "YTMP3_BATCH_SIZE")]
	pub batch_size:   usize,
	/// Confirm every batch without asking and keep the batch size
	#[arg(short = 'y', long = "yes")]
	pub auto_confirm: bool,

	/// The URL of the playlist
	pub url: String,
}

impl Check for CommandPlaylist {
	fn check(&mut self) -> Result<(), crate::Error> {
		self.url = self.url.trim().to_owned();

		if self.url.is_empty() {
			return Err(crate::Error::other("URL cannot be empty"));
		}

		return Check::check(&mut self.options);
	}
}

/// Parse a batch size, which has to be at least 1
fn parse_batch_size(input: &str) -> Result<usize, String> {
	let size = input
		.parse::<usize>()
		.map_err(|err| return format!("\"{input}\" is not a valid number: {err}"))?;

	if size == 0 {
		return Err("batch size has to be at least 1".to_owned());
	}

	return Ok(size);
}

/// Generate shell completions
#[derive(Debug, Parser, Clone, PartialEq)]
pub struct CommandCompletions {
	/// Set which shell completions should be generated
	/// Supported are: Bash, Elvish, Fish, PowerShell, Zsh
	#[arg(value_enum)]
	pub shell:            clap_complete::Shell,
	/// Output path to store the completions to, if not set it will be written to stdout
	#[arg(short = 'o', long = "out")]
	pub output_file_path: Option<PathBuf>,
}

impl Check for CommandCompletions {
	fn check(&mut self) -> Result<(), crate::Error> {
		return Ok(());
	}
}

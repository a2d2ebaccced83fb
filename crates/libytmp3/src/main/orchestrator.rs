//! Module for [`DownloadOrchestrator`], which sequences urls through fetch, tag and placement

use std::path::{
	Path,
	PathBuf,
};

use crate::{
	config::DownloaderConfig,
	data::{
		batch::PlaylistBatch,
		job::{
			DownloadJob,
			FailureReason,
			JobState,
			RunSummary,
		},
		media::MediaMetadata,
		title::{
			ArtistTitle,
			parse_title,
		},
	},
	error::IOErrorToError,
	main::destination::{
		DestinationConvention,
		DestinationResolver,
	},
	traits::{
		batch_control::BatchControl,
		fetcher::{
			FetchRequest,
			MediaFetcher,
		},
		metadata_writer::MetadataWriter,
	},
};

/// How a single job ended
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
	/// The file is at its final destination
	/// values: (final path)
	Placed(PathBuf),
	/// The job failed
	/// values: (reason, error message)
	Failed(FailureReason, String),
}

/// Enum for hooks to know what is currently happening
/// Per job the order is always "JobStarting -> (JobTitle -> JobProgress* -> TagWriteFailed?)? -> JobFinished",
/// and "RunFinished" is always the last event of a run
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadProgress {
	/// A job is starting
	/// values: (index, total, url)
	JobStarting(usize, usize, String),
	/// The download of the current job has progressed
	/// values: (percent)
	JobProgress(u8),
	/// The title of the current job is known
	/// values: (title)
	JobTitle(String),
	/// Writing the tags of the current job failed, the job still continues
	/// values: (error message)
	TagWriteFailed(String),
	/// A job has finished
	/// values: (index, outcome)
	JobFinished(usize, JobOutcome),
	/// The user declined a playlist batch, no further batches will be run
	BatchDeclined,
	/// The run has finished
	/// values: (summary)
	RunFinished(RunSummary),
}

/// Helper to attach a [`FailureReason`] to a error
fn because(reason: FailureReason) -> impl FnOnce(crate::Error) -> (FailureReason, crate::Error) {
	return move |err| return (reason, err);
}

/// Sequences urls (or playlist entries in confirmed batches) through a [`MediaFetcher`], the title parser,
/// a [`MetadataWriter`] and placement, reporting progress to a callback
///
/// Jobs are run strictly one after another, a failed job never stops the run
#[derive(Debug)]
pub struct DownloadOrchestrator<F: MediaFetcher, W: MetadataWriter> {
	/// The configuration in use
	config:   DownloaderConfig,
	/// Resolver for the configured directories
	resolver: DestinationResolver,
	/// The fetcher to download with
	fetcher:  F,
	/// The writer to tag with
	writer:   W,
}

impl<F: MediaFetcher, W: MetadataWriter> DownloadOrchestrator<F, W> {
	/// Create a new instance, fails if the configured directories cannot be made absolute
	pub fn new(config: DownloaderConfig, fetcher: F, writer: W) -> Result<Self, crate::Error> {
		let resolver = config.resolver()?;

		return Ok(Self {
			config,
			resolver,
			fetcher,
			writer,
		});
	}

	/// Get the configuration in use
	#[must_use]
	pub fn config(&self) -> &DownloaderConfig {
		return &self.config;
	}

	/// Run every url in `urls` in order, never aborting because of a failed job
	pub fn run_urls<S: AsRef<str>, C: FnMut(DownloadProgress)>(&self, urls: &[S], mut pgcb: C) -> RunSummary {
		let mut summary = RunSummary::default();
		let total = urls.len();

		for (index, url) in urls.iter().enumerate() {
			let job = self.run_job(url.as_ref(), index, total, &mut pgcb);
			summary.record(job.state());
		}

		pgcb(DownloadProgress::RunFinished(summary));

		return summary;
	}

	/// Run all entries of the playlist at `url`, in batches confirmed by `control`
	///
	/// Declining a batch stops the run, files of earlier batches stay where they were placed.
	/// Fails if the playlist could not be probed or has no entries.
	pub fn run_playlist<B: BatchControl, C: FnMut(DownloadProgress)>(
		&self,
		url: &str,
		control: &mut B,
		mut pgcb: C,
	) -> Result<RunSummary, crate::Error> {
		let metadata = self.fetcher.probe(url, true)?;
		let entries = metadata.entries.unwrap_or_default();

		let Some(mut batch) = PlaylistBatch::first(entries.len(), self.config.batch_size()) else {
			return Err(crate::Error::other(format!("No playlist found for \"{url}\"")));
		};

		info!(
			"Found playlist \"{}\" with {} entries",
			metadata.title,
			entries.len()
		);

		let mut summary = RunSummary::default();

		loop {
			let batch_entries = &entries[batch.range()];

			if !control.confirm_batch(&batch, batch_entries)? {
				info!("Batch starting at {} declined, stopping", batch.start());
				pgcb(DownloadProgress::BatchDeclined);
				break;
			}

			for (offset, entry) in batch_entries.iter().enumerate() {
				let job = self.run_job(entry.target(), batch.start() + offset, batch.total(), &mut pgcb);
				summary.record(job.state());
			}

			let remaining = batch.remaining_after();
			if remaining == 0 {
				break;
			}

			let size = control.next_batch_size(remaining, batch.size())?;
			let Some(next) = batch.next(size) else {
				break;
			};
			batch = next;
		}

		pgcb(DownloadProgress::RunFinished(summary));

		return Ok(summary);
	}

	/// Run a single url through all stages, the returned job is always in a terminal state
	fn run_job<C: FnMut(DownloadProgress)>(
		&self,
		url: &str,
		index: usize,
		total: usize,
		pgcb: &mut C,
	) -> DownloadJob {
		let mut job = DownloadJob::new(url);
		pgcb(DownloadProgress::JobStarting(index, total, url.to_owned()));

		let outcome = match self.process_job(&mut job, pgcb) {
			Ok(path) => JobOutcome::Placed(path),
			Err((reason, err)) => {
				warn!("Job for \"{url}\" failed ({reason}): {err}");
				job.fail(reason);
				JobOutcome::Failed(reason, err.to_string())
			},
		};

		pgcb(DownloadProgress::JobFinished(index, outcome));

		return job;
	}

	/// Advance `job` through all stages, returns the final path
	fn process_job<C: FnMut(DownloadProgress)>(
		&self,
		job: &mut DownloadJob,
		pgcb: &mut C,
	) -> Result<PathBuf, (FailureReason, crate::Error)> {
		// Pending -> Fetched
		let (metadata, staged) = self
			.fetch(job.url(), pgcb)
			.map_err(because(FailureReason::DownloadFailed))?;
		job.fetched(metadata, staged.clone());

		// Fetched -> Tagged
		let title = job.metadata().map_or("", |v| return v.title.as_str());
		let tags = parse_title(title).or_placeholders();
		let tag_error = match self.writer.write_tags(&staged, &tags) {
			Ok(()) => None,
			Err(err) => {
				warn!("Could not write tags to \"{}\": {err}", staged.display());
				pgcb(DownloadProgress::TagWriteFailed(err.to_string()));
				Some(err.to_string())
			},
		};
		job.tagged(tags.clone(), tag_error);

		// Tagged -> Placed
		let final_path = self.place(&staged, &tags)?;
		job.placed(final_path.clone());

		return Ok(final_path);
	}

	/// Probe `url` for its metadata and download it into the staging directory
	fn fetch<C: FnMut(DownloadProgress)>(
		&self,
		url: &str,
		pgcb: &mut C,
	) -> Result<(MediaMetadata, PathBuf), crate::Error> {
		let metadata = self.fetcher.probe(url, false)?;
		pgcb(DownloadProgress::JobTitle(metadata.title.clone()));

		let request = FetchRequest {
			url,
			output_dir: self.resolver.staging(),
			filename_template: self.config.filename_template(),
			audio_format: self.config.audio_format(),
			quality_kbps: self.config.quality_kbps(),
			retries: self.config.retries(),
			print_command_log: self.config.print_command_log(),
		};

		let staged = self.fetcher.fetch_and_transcode(&request, &mut |percent| {
			pgcb(DownloadProgress::JobProgress(percent));
		})?;

		if !staged.is_file() {
			return Err(crate::Error::fetch_failed(format!(
				"Output file \"{}\" does not exist",
				staged.display()
			)));
		}

		return Ok((metadata, staged));
	}

	/// Move `staged` to its destination according to the configured convention
	fn place(&self, staged: &Path, tags: &ArtistTitle) -> Result<PathBuf, (FailureReason, crate::Error)> {
		let convention = self.config.destination();

		if convention == DestinationConvention::Staging {
			debug!("Destination is staging, leaving \"{}\" in place", staged.display());
			return Ok(staged.to_path_buf());
		}

		let dir = self
			.resolver
			.resolve(convention, Some(&tags.artist))
			.map_err(because(FailureReason::DirectoryUnavailable))?;

		let file_name = match convention.file_name_for(tags, staged.extension()) {
			Some(v) => v,
			// the title only consisted of unusable characters, keep the staged name
			None => staged.file_name().map(PathBuf::from).ok_or_else(|| {
				return (
					FailureReason::DownloadFailed,
					crate::Error::other(format!("Staged path \"{}\" has no file name", staged.display())),
				);
			})?,
		};
		let target = dir.join(file_name);

		move_file(staged, &target)?;

		return Ok(target);
	}
}

/// Move `from` to `to`, never replacing a already existing `to`
/// copy has to be used, because it cannot be ensured that both are on the same file-system
///
/// Once the copy is complete the move counts as done, failing to remove `from` afterwards is only logged
fn move_file(from: &Path, to: &Path) -> Result<(), (FailureReason, crate::Error)> {
	trace!("Moving file \"{}\" to \"{}\"", from.display(), to.display());

	let mut source = std::fs::File::open(from)
		.attach_path_err(from)
		.map_err(because(FailureReason::DirectoryUnavailable))?;

	// "create_new" fails if "to" already exists
	let opened = std::fs::OpenOptions::new().write(true).create_new(true).open(to);

	if opened
		.as_ref()
		.is_err_and(|err| return err.kind() == std::io::ErrorKind::AlreadyExists)
	{
		return Err((
			FailureReason::PlacementConflict,
			crate::Error::placement_conflict("Destination file already exists", to),
		));
	}

	let mut target = opened
		.attach_path_err(to)
		.map_err(because(FailureReason::DirectoryUnavailable))?;

	if let Err(err) = std::io::copy(&mut source, &mut target) {
		drop(target);
		// dont leave a partial file behind, it would block the next attempt
		if let Err(rm_err) = std::fs::remove_file(to) {
			warn!("Could not remove partial file \"{}\": {}", to.display(), rm_err);
		}

		return Err((
			FailureReason::DirectoryUnavailable,
			crate::Error::directory_unavailable(format!("Copying the file failed: {err}"), to),
		));
	}

	if let Err(err) = std::fs::remove_file(from) {
		warn!(
			"File was placed at \"{}\", but could not be removed from \"{}\": {}",
			to.display(),
			from.display(),
			err
		);
	}

	return Ok(());
}

#[cfg(test)]
mod test {
	use std::{
		cell::RefCell,
		collections::{
			HashMap,
			HashSet,
			VecDeque,
		},
		sync::{
			Arc,
			atomic::AtomicUsize,
		},
	};

	use tempfile::{
		Builder as TempBuilder,
		TempDir,
	};

	use crate::data::media::PlaylistEntry;

	use super::*;

	/// Fetcher that writes a small file per url instead of downloading
	#[derive(Debug, Default)]
	struct FakeFetcher {
		/// Titles per url, defaults to "Artist - <url>"
		titles:   HashMap<String, String>,
		/// Urls that fail to fetch
		failing:  HashSet<String>,
		/// Entries returned for a playlist probe
		playlist: Vec<PlaylistEntry>,
		/// All urls that were fetched, in order
		fetched:  RefCell<Vec<String>>,
	}

	impl FakeFetcher {
		fn with_failing(mut self, url: &str) -> Self {
			self.failing.insert(url.to_owned());
			return self;
		}

		fn with_title(mut self, url: &str, title: &str) -> Self {
			self.titles.insert(url.to_owned(), title.to_owned());
			return self;
		}

		fn with_playlist(mut self, count: usize) -> Self {
			self.playlist = (0..count)
				.map(|i| return PlaylistEntry::new(format!("e{i}"), format!("Artist - Entry {i}"), format!("e{i}")))
				.collect();
			// every entry is probed again as a single url
			for entry in &self.playlist {
				self.titles
					.insert(entry.target().to_owned(), entry.display_title().to_owned());
			}
			return self;
		}
	}

	impl MediaFetcher for FakeFetcher {
		fn probe(&self, url: &str, playlist: bool) -> Result<MediaMetadata, crate::Error> {
			if playlist {
				return Ok(MediaMetadata::new("PL", "Some Playlist").with_entries(self.playlist.clone()));
			}

			let title = self
				.titles
				.get(url)
				.cloned()
				.unwrap_or_else(|| return format!("Artist - {url}"));

			return Ok(MediaMetadata::new(url, title));
		}

		fn fetch_and_transcode(
			&self,
			request: &FetchRequest<'_>,
			progress: &mut dyn FnMut(u8),
		) -> Result<PathBuf, crate::Error> {
			self.fetched.borrow_mut().push(request.url.to_owned());

			if self.failing.contains(request.url) {
				return Err(crate::Error::fetch_failed(format!(
					"ERROR: [fake] {}: Video unavailable",
					request.url
				)));
			}

			progress(0);
			std::fs::create_dir_all(request.output_dir).attach_path_err(request.output_dir)?;
			let path = request
				.output_dir
				.join(format!("{}.{}", request.url, request.audio_format));
			std::fs::write(&path, request.url).attach_path_err(&path)?;
			progress(100);

			return Ok(path);
		}
	}

	/// Writer that does nothing or always fails
	#[derive(Debug, Default)]
	struct FakeWriter {
		fail:    bool,
		written: RefCell<Vec<ArtistTitle>>,
	}

	impl MetadataWriter for FakeWriter {
		fn write_tags(&self, path: &Path, tags: &ArtistTitle) -> Result<(), crate::Error> {
			if self.fail {
				return Err(crate::Error::tag_write_failed("LoftyError: fake", path));
			}

			self.written.borrow_mut().push(tags.clone());

			return Ok(());
		}
	}

	/// Batch control with scripted answers
	#[derive(Debug, Default)]
	struct ScriptedControl {
		/// Answers for "confirm_batch", runs out as "true"
		answers:   VecDeque<bool>,
		/// Sizes for "next_batch_size", runs out as the current size
		sizes:     VecDeque<usize>,
		/// All batches asked to be confirmed as (start, size)
		confirmed: Vec<(usize, usize)>,
	}

	impl BatchControl for ScriptedControl {
		fn confirm_batch(&mut self, batch: &PlaylistBatch, entries: &[PlaylistEntry]) -> Result<bool, crate::Error> {
			assert_eq!(batch.size(), entries.len());
			self.confirmed.push((batch.start(), batch.size()));

			return Ok(self.answers.pop_front().unwrap_or(true));
		}

		fn next_batch_size(&mut self, _remaining: usize, current: usize) -> Result<usize, crate::Error> {
			return Ok(self.sizes.pop_front().unwrap_or(current));
		}
	}

	/// Test helper function to check the progress events in order
	fn callback_counter<'a>(
		index_pg: &'a Arc<AtomicUsize>,
		expected_pg: &'a [DownloadProgress],
	) -> impl FnMut(DownloadProgress) + 'a {
		return |imp| {
			let index = index_pg.load(std::sync::atomic::Ordering::Relaxed);
			// panic in case there are more events than expected, with a more useful message than default
			assert!(
				index < expected_pg.len(),
				"index_pg is higher than provided expected_pg values! (more events than expected?)"
			);
			assert_eq!(expected_pg[index], imp);
			index_pg.fetch_add(1, std::sync::atomic::Ordering::AcqRel);
		};
	}

	fn create_dirs() -> (TempDir, DownloaderConfig) {
		let testdir = TempBuilder::new()
			.prefix("ytmp3-test-orchestrator-")
			.tempdir()
			.expect("Expected a temp dir to be created");

		let config = DownloaderConfig::default()
			.with_staging_path(testdir.path().join("downloads"))
			.with_auto_import_path(testdir.path().join("auto"))
			.with_library_path(testdir.path().join("library"));

		return (testdir, config);
	}

	#[test]
	fn test_single_url_events() {
		let (testdir, config) = create_dirs();
		let orchestrator =
			DownloadOrchestrator::new(config, FakeFetcher::default(), FakeWriter::default()).expect("Expected new to work");
		let final_path = testdir.path().join("auto/Artist - u1.mp3");

		let expected_pg = &[
			DownloadProgress::JobStarting(0, 1, "u1".to_owned()),
			DownloadProgress::JobTitle("Artist - u1".to_owned()),
			DownloadProgress::JobProgress(0),
			DownloadProgress::JobProgress(100),
			DownloadProgress::JobFinished(0, JobOutcome::Placed(final_path.clone())),
			DownloadProgress::RunFinished(RunSummary { placed: 1, total: 1 }),
		];
		let expect_index = Arc::new(AtomicUsize::new(0));

		let summary = orchestrator.run_urls(&["u1"], callback_counter(&expect_index, expected_pg));

		assert_eq!(expected_pg.len(), expect_index.load(std::sync::atomic::Ordering::Relaxed));
		assert_eq!("1/1", summary.to_string());
		assert!(final_path.is_file());
		// the staged file is moved, not copied
		assert!(!testdir.path().join("downloads/u1.mp3").exists());
		assert_eq!(
			vec![ArtistTitle::new("Artist", "u1")],
			*orchestrator.writer.written.borrow()
		);
	}

	#[test]
	fn test_fetch_failure_continues() {
		let (testdir, config) = create_dirs();
		let fetcher = FakeFetcher::default().with_failing("u2");
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");

		let mut finished = Vec::new();
		let summary = orchestrator.run_urls(&["u1", "u2", "u3"], |imp| {
			if let DownloadProgress::JobFinished(index, outcome) = imp {
				finished.push((index, outcome));
			}
		});

		assert_eq!(RunSummary { placed: 2, total: 3 }, summary);
		assert_eq!(vec!["u1", "u2", "u3"], *orchestrator.fetcher.fetched.borrow());
		assert!(matches!(
			finished[1],
			(1, JobOutcome::Failed(FailureReason::DownloadFailed, _))
		));
		assert!(testdir.path().join("auto/Artist - u1.mp3").is_file());
		assert!(testdir.path().join("auto/Artist - u3.mp3").is_file());
		// the failed job did not tag anything
		assert_eq!(2, orchestrator.writer.written.borrow().len());
	}

	#[test]
	fn test_one_ok_one_failed() {
		let (_testdir, config) = create_dirs();
		let fetcher = FakeFetcher::default().with_failing("u2");
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");

		let summary = orchestrator.run_urls(&["u1", "u2"], |_| {});

		assert_eq!("1/2", summary.to_string());
	}

	#[test]
	fn test_tag_failure_still_placed() {
		let (testdir, config) = create_dirs();
		let writer = FakeWriter {
			fail: true,
			..Default::default()
		};
		let orchestrator = DownloadOrchestrator::new(config, FakeFetcher::default(), writer).expect("Expected new to work");

		let mut tag_failures = 0;
		let summary = orchestrator.run_urls(&["u1"], |imp| {
			if let DownloadProgress::TagWriteFailed(_) = imp {
				tag_failures += 1;
			}
		});

		assert_eq!(1, tag_failures);
		assert_eq!(RunSummary { placed: 1, total: 1 }, summary);
		assert!(testdir.path().join("auto/Artist - u1.mp3").is_file());
	}

	#[test]
	fn test_placeholders_used() {
		let (testdir, config) = create_dirs();
		let fetcher = FakeFetcher::default().with_title("u1", "");
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");

		let summary = orchestrator.run_urls(&["u1"], |_| {});

		assert_eq!(1, summary.placed);
		assert!(testdir.path().join("auto/Unknown Artist - Unknown Title.mp3").is_file());
	}

	#[test]
	fn test_artist_foldered_library() {
		let (testdir, config) = create_dirs();
		let config = config.with_destination(DestinationConvention::ArtistFolderedLibrary);
		let fetcher = FakeFetcher::default().with_title("u1", "The Beatles - Hey Jude");
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");

		let summary = orchestrator.run_urls(&["u1"], |_| {});

		assert_eq!(1, summary.placed);
		assert!(testdir.path().join("library/The Beatles/Hey Jude.mp3").is_file());
	}

	#[test]
	fn test_staging_is_final() {
		let (testdir, config) = create_dirs();
		let config = config.with_destination(DestinationConvention::Staging);
		let orchestrator =
			DownloadOrchestrator::new(config, FakeFetcher::default(), FakeWriter::default()).expect("Expected new to work");

		let summary = orchestrator.run_urls(&["u1"], |_| {});

		assert_eq!(1, summary.placed);
		assert!(testdir.path().join("downloads/u1.mp3").is_file());
		assert!(!testdir.path().join("auto").exists());
	}

	#[test]
	fn test_placement_conflict() {
		let (testdir, config) = create_dirs();
		let orchestrator =
			DownloadOrchestrator::new(config, FakeFetcher::default(), FakeWriter::default()).expect("Expected new to work");

		let existing = testdir.path().join("auto/Artist - u1.mp3");
		std::fs::create_dir_all(testdir.path().join("auto")).expect("Expected dir to be created");
		std::fs::write(&existing, "existing").expect("Expected file to be written");

		let mut outcome = None;
		let summary = orchestrator.run_urls(&["u1"], |imp| {
			if let DownloadProgress::JobFinished(_, v) = imp {
				outcome = Some(v);
			}
		});

		assert_eq!(RunSummary { placed: 0, total: 1 }, summary);
		assert!(matches!(
			outcome,
			Some(JobOutcome::Failed(FailureReason::PlacementConflict, _))
		));
		// the existing file is untouched and the new file stays in staging
		assert_eq!(
			"existing",
			std::fs::read_to_string(&existing).expect("Expected file to be readable")
		);
		assert!(testdir.path().join("downloads/u1.mp3").is_file());
	}

	#[test]
	fn test_move_file_never_replaces() {
		let (testdir, _config) = create_dirs();
		let from = testdir.path().join("staged.mp3");
		let to = testdir.path().join("placed.mp3");
		std::fs::write(&from, "new").expect("Expected file to be written");
		std::fs::write(&to, "existing").expect("Expected file to be written");

		let res = move_file(&from, &to);

		assert!(matches!(res, Err((FailureReason::PlacementConflict, _))));
		assert_eq!("existing", std::fs::read_to_string(&to).expect("Expected file to be readable"));
		// the staged file is kept for a later attempt
		assert_eq!("new", std::fs::read_to_string(&from).expect("Expected file to be readable"));
	}

	#[test]
	fn test_move_file() {
		let (testdir, _config) = create_dirs();
		let from = testdir.path().join("staged.mp3");
		let to = testdir.path().join("placed.mp3");
		std::fs::write(&from, "content").expect("Expected file to be written");

		move_file(&from, &to).expect("Expected move to work");

		assert!(!from.exists());
		assert_eq!("content", std::fs::read_to_string(&to).expect("Expected file to be readable"));
	}

	#[test]
	fn test_move_file_missing_dir() {
		let (testdir, _config) = create_dirs();
		let from = testdir.path().join("staged.mp3");
		let to = testdir.path().join("missing/placed.mp3");
		std::fs::write(&from, "content").expect("Expected file to be written");

		let res = move_file(&from, &to);

		assert!(matches!(res, Err((FailureReason::DirectoryUnavailable, _))));
		assert!(from.is_file());
		assert!(!to.exists());
	}

	#[test]
	fn test_directory_unavailable() {
		let (testdir, config) = create_dirs();
		// a file where the auto-import directory should be
		std::fs::write(testdir.path().join("auto"), "not a directory").expect("Expected file to be written");
		let orchestrator =
			DownloadOrchestrator::new(config, FakeFetcher::default(), FakeWriter::default()).expect("Expected new to work");

		let mut outcome = None;
		let summary = orchestrator.run_urls(&["u1"], |imp| {
			if let DownloadProgress::JobFinished(_, v) = imp {
				outcome = Some(v);
			}
		});

		assert_eq!(0, summary.placed);
		assert!(matches!(
			outcome,
			Some(JobOutcome::Failed(FailureReason::DirectoryUnavailable, _))
		));
	}

	#[test]
	fn test_playlist_batches() {
		let (testdir, config) = create_dirs();
		let config = config.with_batch_size(10);
		let fetcher = FakeFetcher::default().with_playlist(25);
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");
		let mut control = ScriptedControl::default();

		let summary = orchestrator
			.run_playlist("https://some.url/playlist", &mut control, |_| {})
			.expect("Expected playlist run to work");

		assert_eq!(vec![(0, 10), (10, 10), (20, 5)], control.confirmed);
		assert_eq!(RunSummary { placed: 25, total: 25 }, summary);
		assert!(testdir.path().join("auto/Artist - Entry 24.mp3").is_file());
	}

	#[test]
	fn test_playlist_declined_keeps_earlier() {
		let (testdir, config) = create_dirs();
		let config = config.with_batch_size(10);
		let fetcher = FakeFetcher::default().with_playlist(25);
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");
		let mut control = ScriptedControl {
			answers: VecDeque::from([true, false]),
			..Default::default()
		};

		let mut declined = false;
		let summary = orchestrator
			.run_playlist("https://some.url/playlist", &mut control, |imp| {
				if imp == DownloadProgress::BatchDeclined {
					declined = true;
				}
			})
			.expect("Expected playlist run to work");

		assert!(declined);
		assert_eq!(vec![(0, 10), (10, 10)], control.confirmed);
		assert_eq!(RunSummary { placed: 10, total: 10 }, summary);
		assert_eq!(10, orchestrator.fetcher.fetched.borrow().len());
		assert!(testdir.path().join("auto/Artist - Entry 9.mp3").is_file());
		assert!(!testdir.path().join("auto/Artist - Entry 10.mp3").exists());
	}

	#[test]
	fn test_playlist_changed_batch_size() {
		let (_testdir, config) = create_dirs();
		let config = config.with_batch_size(2);
		let fetcher = FakeFetcher::default().with_playlist(7);
		let orchestrator = DownloadOrchestrator::new(config, fetcher, FakeWriter::default()).expect("Expected new to work");
		let mut control = ScriptedControl {
			sizes: VecDeque::from([4, 0]),
			..Default::default()
		};

		let summary = orchestrator
			.run_playlist("https://some.url/playlist", &mut control, |_| {})
			.expect("Expected playlist run to work");

		// a size of 0 is treated as 1
		assert_eq!(vec![(0, 2), (2, 4), (6, 1)], control.confirmed);
		assert_eq!(7, summary.total);
	}

	#[test]
	fn test_playlist_empty() {
		let (_testdir, config) = create_dirs();
		let orchestrator =
			DownloadOrchestrator::new(config, FakeFetcher::default(), FakeWriter::default()).expect("Expected new to work");
		let mut control = ScriptedControl::default();

		let res = orchestrator.run_playlist("https://some.url/playlist", &mut control, |_| {});

		assert_eq!(
			Err(crate::Error::other("No playlist found for \"https://some.url/playlist\"")),
			res
		);
		assert!(control.confirmed.is_empty());
	}
}

/*!
# Morituri: CLI
*/

use argyle::{
	Argue,
	FLAG_HELP,
	FLAG_VERSION,
};
use cdtoc::Toc;
use morituri_core::{
	MorituriError,
	ReadOffset,
	RipResult,
	TrackResult,
	BUILTIN_LOGGER,
};



#[derive(Debug)]
/// # Report Options.
///
/// Everything the user asked for, more or less.
pub(super) struct ReportOptions {
	/// # Logger Name.
	logger: String,

	/// # List Loggers?
	list: bool,

	/// # Table of Contents.
	toc: Option<Toc>,

	/// # Read Offset.
	offset: ReadOffset,

	/// # Disc Artist.
	artist: Option<String>,

	/// # Disc Title.
	title: Option<String>,
}

impl Default for ReportOptions {
	fn default() -> Self {
		Self {
			logger: BUILTIN_LOGGER.to_owned(),
			list: false,
			toc: None,
			offset: ReadOffset::default(),
			artist: None,
			title: None,
		}
	}
}

/// ## Setters.
impl ReportOptions {
	#[must_use]
	/// # With Logger.
	pub(super) fn with_logger(self, logger: &str) -> Self {
		let logger = logger.trim();
		if logger.is_empty() { self }
		else {
			Self {
				logger: logger.to_owned(),
				..self
			}
		}
	}

	#[must_use]
	/// # With List.
	pub(super) fn with_list(self, list: bool) -> Self {
		Self { list, ..self }
	}

	#[must_use]
	/// # With Table of Contents.
	pub(super) fn with_toc(self, toc: Toc) -> Self {
		Self {
			toc: Some(toc),
			..self
		}
	}

	#[must_use]
	/// # With Read Offset.
	pub(super) fn with_offset(self, offset: ReadOffset) -> Self {
		Self { offset, ..self }
	}

	#[must_use]
	/// # With Artist.
	pub(super) fn with_artist(self, artist: &str) -> Self {
		Self {
			artist: Some(artist.to_owned()),
			..self
		}
	}

	#[must_use]
	/// # With Title.
	pub(super) fn with_title(self, title: &str) -> Self {
		Self {
			title: Some(title.to_owned()),
			..self
		}
	}
}

/// ## Getters.
impl ReportOptions {
	/// # Logger Name.
	pub(super) fn logger(&self) -> &str { &self.logger }

	/// # List Loggers?
	pub(super) const fn list(&self) -> bool { self.list }

	/// # Rip Result.
	///
	/// Build a result from the table of contents, with an empty track result
	/// for the HTOA (if any) and each audio track.
	pub(super) fn rip_result(&self) -> Result<RipResult<'_>, MorituriError> {
		let toc = self.toc.as_ref().ok_or(MorituriError::CliParse("-t/--toc"))?;

		let mut rip = RipResult::new()
			.with_table(toc)
			.with_offset(self.offset);
		if let Some(v) = self.artist.as_deref() { rip.set_artist(v); }
		if let Some(v) = self.title.as_deref() { rip.set_title(v); }

		if toc.htoa().is_some() { rip.push_track(TrackResult::new(0)); }
		for t in toc.audio_tracks() { rip.push_track(TrackResult::new(t.number())); }

		Ok(rip)
	}
}



/// # Parse Options.
pub(super) fn parse() -> Result<ReportOptions, MorituriError> {
	let args = Argue::new(FLAG_HELP | FLAG_VERSION)?;

	let mut opts = ReportOptions::default()
		.with_list(args.switch(b"--list"));

	if let Some(v) = args.option2(b"-l", b"--logger") {
		opts = opts.with_logger(utf8(v, "-l/--logger")?);
	}
	if let Some(v) = args.option2(b"-o", b"--offset") {
		let v = ReadOffset::try_from(v).map_err(|_| MorituriError::CliParse("-o/--offset"))?;
		opts = opts.with_offset(v);
	}
	if let Some(v) = args.option2(b"-t", b"--toc") {
		let v = Toc::from_cdtoc(utf8(v, "-t/--toc")?.trim())?;
		opts = opts.with_toc(v);
	}
	if let Some(v) = args.option(b"--artist") {
		opts = opts.with_artist(utf8(v, "--artist")?);
	}
	if let Some(v) = args.option(b"--title") {
		opts = opts.with_title(utf8(v, "--title")?);
	}

	Ok(opts)
}

/// # UTF-8.
fn utf8<'a>(src: &'a [u8], label: &'static str) -> Result<&'a str, MorituriError> {
	std::str::from_utf8(src).map_err(|_| MorituriError::CliParse(label))
}

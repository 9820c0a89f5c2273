/*!
# Morituri: Rip Results
*/

use cdtoc::Toc;
use crate::{
	ReadOffset,
	SCHEMA_VERSION,
	TrackResult,
};



#[derive(Debug, Clone, Default)]
/// # Rip Result.
///
/// This holds everything worth knowing about a single rip session: the disc,
/// the drive, the tools used, and the [`TrackResult`] for each track, in disc
/// order.
///
/// The table of contents is borrowed; it belongs to whatever is doing the
/// ripping.
///
/// ```
/// use morituri_core::{RipResult, TrackResult};
///
/// let mut rip = RipResult::new()
///     .with_artist("Hüsker Dü")
///     .with_title("Zen Arcade");
/// rip.push_track(TrackResult::new(1));
/// rip.push_track(TrackResult::new(2));
///
/// assert_eq!(rip.tracks().len(), 2);
/// assert_eq!(rip.track_result(2).and_then(TrackResult::number), Some(2));
/// assert!(rip.track_result(5).is_none());
/// ```
pub struct RipResult<'a> {
	offset: ReadOffset,
	table: Option<&'a Toc>,
	artist: Option<String>,
	title: Option<String>,

	vendor: Option<String>,
	model: Option<String>,
	release: Option<String>,

	cdrdao_version: Option<String>,
	cdparanoia_version: Option<String>,
	cdparanoia_defeats_cache: Option<bool>,

	gstreamer_version: Option<String>,
	pygi_version: Option<String>,
	encoder_version: Option<String>,

	profile_name: Option<String>,
	profile_pipeline: Option<String>,

	tracks: Vec<TrackResult>,
}

impl<'a> RipResult<'a> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # Schema Version.
	pub const fn schema_version(&self) -> u8 { SCHEMA_VERSION }

	#[must_use]
	/// # Table of Contents.
	pub const fn table(&self) -> Option<&'a Toc> { self.table }

	#[must_use]
	/// # With Table of Contents.
	pub const fn with_table(mut self, table: &'a Toc) -> Self {
		self.table = Some(table);
		self
	}

	/// # Set Table of Contents.
	pub fn set_table(&mut self, table: &'a Toc) { self.table = Some(table); }
}

/// ## Fields.
impl RipResult<'_> {
	copy_field!(
		offset, with_offset, set_offset, ReadOffset,
		"# Read Offset.",
		"",
		"The sample read offset applied during extraction.",
	);

	str_field!(artist, with_artist, set_artist, "# Disc Artist.");
	str_field!(title, with_title, set_title, "# Disc Title.");

	str_field!(vendor, with_vendor, set_vendor, "# Drive Vendor.");
	str_field!(model, with_model, set_model, "# Drive Model.");
	str_field!(release, with_release, set_release, "# Drive Firmware Release.");

	str_field!(
		cdrdao_version, with_cdrdao_version, set_cdrdao_version,
		"# cdrdao Version.",
	);
	str_field!(
		cdparanoia_version, with_cdparanoia_version, set_cdparanoia_version,
		"# cdparanoia Version.",
	);
	copy_field!(
		cdparanoia_defeats_cache,
		with_cdparanoia_defeats_cache,
		set_cdparanoia_defeats_cache,
		Option<bool>,
		"# Defeats Cache?",
		"",
		"Whether or not cdparanoia was able to defeat the drive's cache. This",
		"is `None` if it was never determined.",
	);

	str_field!(
		gstreamer_version, with_gstreamer_version, set_gstreamer_version,
		"# GStreamer Version.",
	);
	str_field!(
		pygi_version, with_pygi_version, set_pygi_version,
		"# PyGI Version.",
	);
	str_field!(
		encoder_version, with_encoder_version, set_encoder_version,
		"# Encoder Version.",
	);

	str_field!(
		profile_name, with_profile_name, set_profile_name,
		"# Encoding Profile Name.",
	);
	str_field!(
		profile_pipeline, with_profile_pipeline, set_profile_pipeline,
		"# Encoding Profile Pipeline.",
	);
}

/// ## Tracks.
impl RipResult<'_> {
	#[must_use]
	/// # Tracks.
	///
	/// Return the track results in disc order.
	pub fn tracks(&self) -> &[TrackResult] { &self.tracks }

	#[must_use]
	/// # Tracks (Mutable).
	pub fn tracks_mut(&mut self) -> &mut Vec<TrackResult> { &mut self.tracks }

	/// # Push Track.
	///
	/// Append a track result. Uniqueness is not checked; see
	/// [`RipResult::track_result`].
	pub fn push_track(&mut self, track: TrackResult) { self.tracks.push(track); }

	#[must_use]
	/// # Track Result.
	///
	/// Return the first track result with the given number (`0` for the HTOA),
	/// if any.
	///
	/// Track numbers should be unique, but if they aren't, the first match
	/// wins.
	pub fn track_result(&self, number: u8) -> Option<&TrackResult> {
		self.tracks.iter().find(|t| t.number() == Some(number))
	}

	#[must_use]
	/// # Track Result (Mutable).
	///
	/// Same as [`RipResult::track_result`], but mutable.
	pub fn track_result_mut(&mut self, number: u8) -> Option<&mut TrackResult> {
		self.tracks.iter_mut().find(|t| t.number() == Some(number))
	}

	#[must_use]
	/// # Accurate Track Count.
	///
	/// Return the number of tracks flagged as accurately ripped.
	pub fn accurate_tracks(&self) -> usize {
		self.tracks.iter().filter(|t| t.accurip()).count()
	}

	#[must_use]
	/// # Accurately Ripped?
	///
	/// Returns `true` if there is at least one track and every one of them is
	/// flagged as accurately ripped.
	pub fn is_accurate(&self) -> bool {
		! self.tracks.is_empty() && self.tracks.iter().all(TrackResult::accurip)
	}
}

impl RipResult<'_> {
	#[must_use]
	/// # Drive.
	///
	/// Return the drive vendor and model, with the release in parentheses,
	/// skipping whatever parts are missing. If neither the vendor nor the
	/// model is known, `None` is returned.
	pub fn drive(&self) -> Option<String> {
		let mut out = match (self.vendor(), self.model()) {
			(Some(v), Some(m)) => format!("{v} {m}"),
			(Some(v), None) => v.to_owned(),
			(None, Some(m)) => m.to_owned(),
			(None, None) => return None,
		};

		if let Some(r) = self.release() {
			out.push_str(" (");
			out.push_str(r);
			out.push(')');
		}

		Some(out)
	}
}

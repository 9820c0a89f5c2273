/*!
# Morituri: Track Results
*/

use crate::SCHEMA_VERSION;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # AccurateRip Database Match.
///
/// The AccurateRip checksum a track did (or should have) matched in the
/// database, along with its confidence and the highest confidence recorded
/// for the track. The latter can still be zero.
pub struct ArDbMatch {
	/// # Database Checksum.
	pub crc: u32,

	/// # Confidence.
	pub confidence: u32,

	/// # Max Confidence.
	pub max_confidence: u32,
}

impl ArDbMatch {
	#[must_use]
	/// # New.
	pub const fn new(crc: u32, confidence: u32, max_confidence: u32) -> Self {
		Self { crc, confidence, max_confidence }
	}
}



#[derive(Debug, Clone, Default, PartialEq)]
/// # Track Result.
///
/// The outcome of a single track extraction (or the HTOA, track zero).
///
/// Instances start out with everything zeroed or empty, and are filled in by
/// the ripping pipeline as the test and copy passes complete.
///
/// Note that [`TrackResult::accurip`] is never derived from the checksums;
/// whoever compares them against the database is responsible for setting it.
///
/// ```
/// use morituri_core::{ArDbMatch, TrackResult};
///
/// let mut track = TrackResult::new(3);
/// track.set_ar_crc(Some(0x284f_5b7c));
/// track.set_ardb(Some(ArDbMatch::new(0x284f_5b7c, 12, 14)));
/// track.set_accurip(true);
///
/// assert_eq!(track.number(), Some(3));
/// assert_eq!(track.ardb_confidence(), Some(12));
/// assert!(track.accurip());
/// ```
pub struct TrackResult {
	number: Option<u8>,
	filename: Option<String>,
	pregap: u32,
	peak: f64,
	quality: f64,
	test_speed: f64,
	copy_speed: f64,
	test_duration: f64,
	copy_duration: f64,
	test_crc: Option<u32>,
	copy_crc: Option<u32>,
	accurip: bool,
	ar_crc: Option<u32>,
	ardb: Option<ArDbMatch>,
}

impl TrackResult {
	#[must_use]
	/// # New.
	///
	/// Return a default result with the track number set.
	pub fn new(number: u8) -> Self {
		Self {
			number: Some(number),
			..Self::default()
		}
	}

	#[must_use]
	/// # Schema Version.
	pub const fn schema_version(&self) -> u8 { SCHEMA_VERSION }
}

/// ## Fields.
impl TrackResult {
	copy_field!(
		number, with_number, set_number, Option<u8>,
		"# Track Number.",
		"",
		"Zero is used for the HTOA.",
	);

	str_field!(
		filename, with_filename, set_filename,
		"# Output File.",
	);

	copy_field!(
		pregap, with_pregap, set_pregap, u32,
		"# Pregap (Frames).",
	);

	copy_field!(
		peak, with_peak, set_peak, f64,
		"# Peak Level.",
		"",
		"This is a fraction of full scale, `0.0..=1.0`.",
	);

	copy_field!(
		quality, with_quality, set_quality, f64,
		"# Extraction Quality.",
	);

	copy_field!(
		test_speed, with_test_speed, set_test_speed, f64,
		"# Test Pass Speed.",
	);

	copy_field!(
		copy_speed, with_copy_speed, set_copy_speed, f64,
		"# Copy Pass Speed.",
	);

	copy_field!(
		test_duration, with_test_duration, set_test_duration, f64,
		"# Test Pass Duration (Seconds).",
	);

	copy_field!(
		copy_duration, with_copy_duration, set_copy_duration, f64,
		"# Copy Pass Duration (Seconds).",
	);

	copy_field!(
		test_crc, with_test_crc, set_test_crc, Option<u32>,
		"# Test Pass CRC32.",
	);

	copy_field!(
		copy_crc, with_copy_crc, set_copy_crc, Option<u32>,
		"# Copy Pass CRC32.",
	);

	copy_field!(
		accurip, with_accurip, set_accurip, bool,
		"# Accurately Ripped?",
		"",
		"This is `true` if the track's AccurateRip checksum was found in the",
		"database. It is `false` otherwise, whether because the rip was bad or",
		"the disc simply isn't in the database.",
	);

	copy_field!(
		ar_crc, with_ar_crc, set_ar_crc, Option<u32>,
		"# AccurateRip Checksum.",
		"",
		"The locally-computed value.",
	);

	copy_field!(
		ardb, with_ardb, set_ardb, Option<ArDbMatch>,
		"# AccurateRip Database Match.",
		"",
		"This is `None` if the track is not in the database.",
	);
}

/// ## Database Details.
impl TrackResult {
	#[must_use]
	/// # Database Checksum.
	pub const fn ardb_crc(&self) -> Option<u32> {
		if let Some(m) = self.ardb { Some(m.crc) }
		else { None }
	}

	#[must_use]
	/// # Database Confidence.
	pub const fn ardb_confidence(&self) -> Option<u32> {
		if let Some(m) = self.ardb { Some(m.confidence) }
		else { None }
	}

	#[must_use]
	/// # Database Max Confidence.
	pub const fn ardb_max_confidence(&self) -> Option<u32> {
		if let Some(m) = self.ardb { Some(m.max_confidence) }
		else { None }
	}
}

impl TrackResult {
	#[must_use]
	/// # Consistent Read?
	///
	/// Returns `true` if both the test and copy CRCs are present and equal.
	/// This means the drive returned the same data twice, not that the data
	/// was right.
	pub const fn crc_consistent(&self) -> bool {
		matches!(
			(self.test_crc, self.copy_crc),
			(Some(a), Some(b)) if a == b
		)
	}

	#[must_use]
	/// # Is HTOA?
	pub const fn is_htoa(&self) -> bool { matches!(self.number, Some(0)) }
}

/*!
# Morituri: Default Logger
*/

use crate::{
	Logger,
	MorituriError,
	RipResult,
	TrackResult,
};
use dactyl::{
	NicePercent,
	NiceU32,
};
use std::fmt;
use utc2k::FmtUtc2k;



/// # Label Width.
const LABEL: usize = 26;



#[derive(Debug, Clone, Copy, Default)]
/// # Morituri Logger.
///
/// The bundled plain-text report: a header, the disc and drive details, a
/// block for each track, and a short summary at the end.
///
/// Results without any tracks are rejected.
pub struct MorituriLogger;

impl Logger for MorituriLogger {
	fn log(&self, result: &RipResult<'_>, epoch: u32) -> Result<String, MorituriError> {
		if result.tracks().is_empty() { Err(MorituriError::NoTracks) }
		else { Ok(Report { result, epoch }.to_string()) }
	}
}



/// # Report.
///
/// This does the actual formatting.
struct Report<'a> {
	result: &'a RipResult<'a>,
	epoch: u32,
}

impl fmt::Display for Report<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Logfile created by: Morituri v{}", env!("CARGO_PKG_VERSION"))?;
		writeln!(f, "Logfile created on: {} UTC", FmtUtc2k::from(self.epoch))?;
		writeln!(f)?;

		self.fmt_disc(f)?;
		self.fmt_ripping(f)?;
		for track in self.result.tracks() { fmt_track(f, track)?; }
		self.fmt_summary(f)
	}
}

impl Report<'_> {
	/// # Disc Details.
	fn fmt_disc(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Disc")?;
		kv(f, "Artist:", self.result.artist().unwrap_or("Unknown"))?;
		kv(f, "Title:", self.result.title().unwrap_or("Unknown"))?;

		if let Some(toc) = self.result.table() {
			kv(f, "CDTOC:", toc)?;
			kv(f, "CDDB:", toc.cddb_id())?;
			kv(f, "AccurateRip:", toc.accuraterip_id())?;
			let audio = toc.audio_tracks().count();
			if toc.htoa().is_some() {
				kv(f, "Tracks:", format_args!("{audio} + HTOA"))?;
			}
			else { kv(f, "Tracks:", audio)?; }
		}

		writeln!(f)
	}

	/// # Ripping Details.
	fn fmt_ripping(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let r = self.result;

		writeln!(f, "Ripping phase information")?;
		kv(f, "Drive:", r.drive().as_deref().unwrap_or("Unknown"))?;
		kv(f, "Read offset correction:", r.offset())?;
		kv(f, "Defeat audio cache:", match r.cdparanoia_defeats_cache() {
			Some(true) => "Yes",
			Some(false) => "No",
			None => "Unknown",
		})?;

		for (k, v) in [
			("cdrdao:", r.cdrdao_version()),
			("cdparanoia:", r.cdparanoia_version()),
			("GStreamer:", r.gstreamer_version()),
			("PyGI:", r.pygi_version()),
			("Encoder:", r.encoder_version()),
		] {
			if let Some(v) = v { kv(f, k, v)?; }
		}

		match (r.profile_name(), r.profile_pipeline()) {
			(Some(n), Some(p)) => kv(f, "Encoding profile:", format_args!("{n} ({p})"))?,
			(Some(v), None) | (None, Some(v)) => kv(f, "Encoding profile:", v)?,
			(None, None) => {},
		}

		writeln!(f)
	}

	/// # Summary.
	fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tracks = self.result.tracks();
		let total = tracks.len();
		let accurate = self.result.accurate_tracks();

		writeln!(f, "Summary")?;
		if self.result.is_accurate() {
			writeln!(f, "  All tracks accurately ripped.")?;
		}
		else {
			writeln!(
				f,
				"  {accurate} of {total} {} accurately ripped.",
				if total == 1 { "track" } else { "tracks" },
			)?;
		}

		let mismatched = tracks.iter()
			.filter(|t| t.test_crc().is_some() && t.copy_crc().is_some() && ! t.crc_consistent())
			.count();
		if mismatched != 0 {
			writeln!(
				f,
				"  {mismatched} {} test and copy CRCs that do not match.",
				if mismatched == 1 { "track has" } else { "tracks have" },
			)?;
		}

		Ok(())
	}
}



/// # Key/Value Line.
fn kv<V>(f: &mut fmt::Formatter<'_>, k: &str, v: V) -> fmt::Result
where V: fmt::Display {
	writeln!(f, "  {k:LABEL$}{v}")
}

/// # Track Block.
fn fmt_track(f: &mut fmt::Formatter<'_>, track: &TrackResult) -> fmt::Result {
	match track.number() {
		Some(0) => writeln!(f, "HTOA")?,
		Some(n) => writeln!(f, "Track {n:02}")?,
		None => writeln!(f, "Track ??")?,
	}

	if let Some(v) = track.filename() { kv(f, "Filename:", v)?; }
	if track.pregap() != 0 {
		kv(f, "Pre-gap length:", format_args!("{} frames", NiceU32::from(track.pregap())))?;
	}
	kv(f, "Peak level:", NicePercent::from(track.peak()))?;
	kv(f, "Extraction quality:", NicePercent::from(track.quality()))?;
	if track.test_duration() > 0.0 {
		kv(f, "Test speed:", format_args!("{:.1}×", track.test_speed()))?;
		kv(f, "Test duration:", format_args!("{:.2}s", track.test_duration()))?;
	}
	if track.copy_duration() > 0.0 {
		kv(f, "Copy speed:", format_args!("{:.1}×", track.copy_speed()))?;
		kv(f, "Copy duration:", format_args!("{:.2}s", track.copy_duration()))?;
	}

	if let Some(v) = track.test_crc() { kv(f, "Test CRC:", format_args!("{v:08X}"))?; }
	if let Some(v) = track.copy_crc() { kv(f, "Copy CRC:", format_args!("{v:08X}"))?; }
	if track.test_crc().is_some() && track.copy_crc().is_some() {
		if track.crc_consistent() { writeln!(f, "  Copy OK")?; }
		else { writeln!(f, "  WARNING: test and copy CRCs do not match!")?; }
	}

	fmt_accuraterip(f, track)?;
	writeln!(f)
}

/// # AccurateRip Line.
fn fmt_accuraterip(f: &mut fmt::Formatter<'_>, track: &TrackResult) -> fmt::Result {
	let Some(ar) = track.ar_crc() else {
		return kv(f, "AccurateRip:", "Not checked");
	};

	match track.ardb() {
		Some(db) if track.accurip() => kv(
			f,
			"AccurateRip:",
			format_args!(
				"Accurately ripped (confidence {} of {}) [{ar:08X}]",
				NiceU32::from(db.confidence),
				NiceU32::from(db.max_confidence),
			),
		),
		Some(db) => kv(
			f,
			"AccurateRip:",
			format_args!(
				"Not accurately ripped (max confidence {}) [{ar:08X}], database [{:08X}]",
				NiceU32::from(db.max_confidence),
				db.crc,
			),
		),
		None if track.accurip() => kv(f, "AccurateRip:", format_args!("Accurately ripped [{ar:08X}]")),
		None => kv(f, "AccurateRip:", format_args!("Not present in database [{ar:08X}]")),
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		ArDbMatch,
		ReadOffset,
	};
	use cdtoc::Toc;

	/// # Test Epoch.
	///
	/// 2023-11-14 22:13:20 UTC.
	const EPOCH: u32 = 1_700_000_000;

	fn rip(toc: &Toc) -> RipResult<'_> {
		let mut rip = RipResult::new()
			.with_table(toc)
			.with_artist("Hüsker Dü")
			.with_title("Zen Arcade")
			.with_vendor("HL-DT-ST")
			.with_model("BD-RE BH16NS40")
			.with_release("1.02")
			.with_offset(ReadOffset::try_from(6_i16).expect("Read offset failed."))
			.with_cdparanoia_defeats_cache(Some(true))
			.with_cdparanoia_version("10.2")
			.with_profile_name("flac")
			.with_profile_pipeline("flacenc name=tagger quality=8");

		rip.push_track(
			TrackResult::new(1)
				.with_filename("01. Something I Learned Today.flac")
				.with_peak(0.985)
				.with_quality(1.0)
				.with_test_crc(Some(0x0123_abcd))
				.with_copy_crc(Some(0x0123_abcd))
				.with_ar_crc(Some(0x5a5a_5a5a))
				.with_ardb(Some(ArDbMatch::new(0x5a5a_5a5a, 12, 14)))
				.with_accurip(true)
		);
		rip.push_track(
			TrackResult::new(2)
				.with_pregap(150)
				.with_test_crc(Some(1))
				.with_copy_crc(Some(2))
				.with_ar_crc(Some(0x1111_2222))
		);
		rip
	}

	#[test]
	fn t_log() {
		let toc = Toc::from_cdtoc("4+96+2D2B+6256+B327+D84A").expect("Invalid CDTOC.");
		let rip = rip(&toc);
		let out = MorituriLogger.log(&rip, EPOCH).expect("Log failed.");

		for expected in [
			"Logfile created on: 2023-11-14 22:13:20 UTC",
			"Hüsker Dü",
			"Zen Arcade",
			"HL-DT-ST BD-RE BH16NS40 (1.02)",
			"+6",
			"Yes",
			"flac (flacenc name=tagger quality=8)",
			"Track 01",
			"01. Something I Learned Today.flac",
			"0123ABCD",
			"Copy OK",
			"Accurately ripped (confidence 12 of 14) [5A5A5A5A]",
			"Track 02",
			"150 frames",
			"WARNING: test and copy CRCs do not match!",
			"Not present in database [11112222]",
			"1 of 2 tracks accurately ripped.",
			"1 track has test and copy CRCs that do not match.",
		] {
			assert!(out.contains(expected), "Missing {expected:?} from:\n{out}");
		}

		// The result should not have changed.
		assert_eq!(rip.tracks().len(), 2);
		assert!(! rip.tracks()[1].accurip(), "Logging should not change anything.");
	}

	#[test]
	fn t_log_epoch() {
		// The timestamp is whatever we're given, every time.
		let toc = Toc::from_cdtoc("4+96+2D2B+6256+B327+D84A").expect("Invalid CDTOC.");
		let rip = rip(&toc);
		let a = MorituriLogger.log(&rip, 1_000_000_000).expect("Log failed.");
		let b = MorituriLogger.log(&rip, EPOCH).expect("Log failed.");
		assert!(a.contains("2001-09-09 01:46:40 UTC"), "Wrong timestamp:\n{a}");
		assert!(b.contains("2023-11-14 22:13:20 UTC"), "Wrong timestamp:\n{b}");
	}

	#[test]
	fn t_log_accurate() {
		let mut rip = RipResult::new();
		rip.push_track(TrackResult::new(0).with_accurip(true).with_ar_crc(Some(7)));
		let out = MorituriLogger.log(&rip, EPOCH).expect("Log failed.");
		assert!(out.contains("HTOA"), "Missing HTOA:\n{out}");
		assert!(out.contains("Accurately ripped [00000007]"), "Missing AccurateRip:\n{out}");
		assert!(out.contains("All tracks accurately ripped."), "Missing summary:\n{out}");
		assert!(out.contains("Unknown"), "Missing artist placeholder:\n{out}");
	}

	#[test]
	fn t_log_empty() {
		assert_eq!(
			MorituriLogger.log(&RipResult::new(), EPOCH),
			Err(MorituriError::NoTracks),
		);
	}
}

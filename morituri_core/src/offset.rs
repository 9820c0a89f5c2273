/*!
# Morituri: Read Offset
*/

use crate::MorituriError;
use dactyl::traits::BytesToSigned;
use std::fmt;



/// # Min Offset.
const MIN_OFFSET: i16 = -5880;

/// # Max Offset.
const MAX_OFFSET: i16 = 5880;



#[derive(Debug, Clone, Copy, Default, Eq, Ord, PartialEq, PartialOrd)]
/// # Read Offset.
///
/// The signed sample read offset applied during extraction.
///
/// For historical reasons, values are restricted to `-5880..=5880`.
pub struct ReadOffset(i16);

impl fmt::Display for ReadOffset {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0 > 0 { write!(f, "+{}", self.0) }
		else { write!(f, "{}", self.0) }
	}
}

impl TryFrom<i16> for ReadOffset {
	type Error = MorituriError;
	fn try_from(src: i16) -> Result<Self, Self::Error> {
		if (MIN_OFFSET..=MAX_OFFSET).contains(&src) { Ok(Self(src)) }
		else { Err(MorituriError::ReadOffset) }
	}
}

impl TryFrom<&[u8]> for ReadOffset {
	type Error = MorituriError;
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let src = src.trim_ascii();
		if src.is_empty() { Ok(Self(0)) }
		else {
			// Allow an explicit plus sign.
			let src = src.strip_prefix(b"+").unwrap_or(src);
			i16::btoi(src)
				.ok_or(MorituriError::ReadOffset)
				.and_then(Self::try_from)
		}
	}
}

impl TryFrom<&str> for ReadOffset {
	type Error = MorituriError;
	fn try_from(src: &str) -> Result<Self, Self::Error> {
		Self::try_from(src.as_bytes())
	}
}

impl ReadOffset {
	#[must_use]
	/// # Is Negative?
	pub const fn is_negative(self) -> bool { self.0 < 0 }

	#[must_use]
	/// # Samples.
	pub const fn samples(self) -> i16 { self.0 }

	#[must_use]
	/// # Samples (Absolute).
	pub const fn samples_abs(self) -> u16 { self.0.unsigned_abs() }
}

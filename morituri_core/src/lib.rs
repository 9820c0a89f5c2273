/*!
# Morituri: Library

This crate holds the per-track and per-session rip results, along with the
report loggers that turn them into something a human might want to read.

Loggers are resolved by name with [`get_loggers`], which combines the bundled
[`MorituriLogger`] with whatever a [`LoggerDiscovery`] implementation turns
up. Later entries win name collisions, so a plugin registered as `"morituri"`
replaces the built-in.

```
use morituri_core::{
	get_loggers,
	Plugins,
	RipResult,
	TrackResult,
	BUILTIN_LOGGER,
};

let mut rip = RipResult::new();
rip.push_track(TrackResult::new(1));
rip.push_track(TrackResult::new(2));
assert!(rip.track_result(2).is_some());
assert!(rip.track_result(5).is_none());

let loggers = get_loggers(&Plugins::default()).unwrap();
assert_eq!(loggers.len(), 1);
assert!(loggers.contains_key(BUILTIN_LOGGER));
```
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::doc_markdown,
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

/// # Helper: Copy Field Accessors.
///
/// Generate a getter, a builder-style `with_*`, and an in-place `set_*` for a
/// `Copy` field.
macro_rules! copy_field {
	($field:ident, $with:ident, $set:ident, $ty:ty, $($doc:literal),+ $(,)?) => (
		#[must_use]
		$(
			#[doc = $doc]
		)+
		pub const fn $field(&self) -> $ty { self.$field }

		#[must_use]
		#[doc = concat!("# With `", stringify!($field), "`.")]
		pub const fn $with(mut self, v: $ty) -> Self {
			self.$field = v;
			self
		}

		#[doc = concat!("# Set `", stringify!($field), "`.")]
		pub fn $set(&mut self, v: $ty) { self.$field = v; }
	);
}

/// # Helper: String Field Accessors.
///
/// Same as `copy_field!`, but for `Option<String>` fields. Values are trimmed
/// on the way in; empty values clear the field.
macro_rules! str_field {
	($field:ident, $with:ident, $set:ident, $($doc:literal),+ $(,)?) => (
		#[must_use]
		$(
			#[doc = $doc]
		)+
		pub fn $field(&self) -> Option<&str> { self.$field.as_deref() }

		#[must_use]
		#[doc = concat!("# With `", stringify!($field), "`.")]
		pub fn $with<S>(mut self, v: S) -> Self
		where S: Into<String> {
			self.$field = crate::normalize(v.into());
			self
		}

		#[doc = concat!("# Set `", stringify!($field), "`.")]
		pub fn $set<S>(&mut self, v: S)
		where S: Into<String> {
			self.$field = crate::normalize(v.into());
		}
	);
}

mod error;
mod logger;
mod offset;
mod rip;
mod track;

pub use error::MorituriError;
pub use logger::{
	get_loggers,
	EntryPoint,
	Logger,
	LoggerDiscovery,
	LoggerEntry,
	Loggers,
	LoggerType,
	MorituriLogger,
	Plugins,
};
pub use offset::ReadOffset;
pub use rip::RipResult;
pub use track::{
	ArDbMatch,
	TrackResult,
};



/// # Normalize String.
///
/// Trim the value, returning `None` if nothing is left.
fn normalize(mut src: String) -> Option<String> {
	use trimothy::TrimMut;
	src.trim_mut();
	if src.is_empty() { None }
	else { Some(src) }
}

/// # Static Hasher.
pub(crate) const AHASHER: ahash::RandomState = ahash::RandomState::with_seeds(13, 19, 23, 71);

/// # Built-in Logger Name.
///
/// The bundled [`MorituriLogger`] is registered under this name.
pub const BUILTIN_LOGGER: &str = "morituri";

/// # Logger Extension Point.
///
/// External loggers are discovered under this group.
pub const LOGGER_ENTRY_POINT: &str = "morituri.logger";

/// # Schema Version.
///
/// The data-shape revision of [`RipResult`] and [`TrackResult`]. Anything
/// persisting these should record it and branch on it when reading older
/// data back.
pub const SCHEMA_VERSION: u8 = 3;

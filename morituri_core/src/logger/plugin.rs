/*!
# Morituri: Logger Plugins
*/

use crate::{
	AHASHER,
	BUILTIN_LOGGER,
	Logger,
	LOGGER_ENTRY_POINT,
	LoggerType,
	MorituriError,
	MorituriLogger,
};
use std::{
	borrow::Cow,
	collections::HashMap,
	fmt,
};



/// # Loggers.
///
/// Logger types by name, as returned by [`get_loggers`].
pub type Loggers = HashMap<String, LoggerType, ahash::RandomState>;

/// # Entry Loader.
type Loader = fn() -> Result<LoggerType, MorituriError>;



/// # Logger Entry.
///
/// A named, lazily-loaded reference to a [`Logger`] type.
pub trait LoggerEntry {
	/// # Name.
	///
	/// The name the logger should be registered under.
	fn name(&self) -> &str;

	/// # Load.
	///
	/// ## Errors
	///
	/// This should return an error if the logger type cannot be resolved.
	fn load(&self) -> Result<LoggerType, MorituriError>;
}

impl<L> LoggerEntry for &L
where L: LoggerEntry + ?Sized {
	#[inline]
	fn name(&self) -> &str { (**self).name() }

	#[inline]
	fn load(&self) -> Result<LoggerType, MorituriError> { (**self).load() }
}



/// # Logger Discovery.
///
/// Whatever the host uses to find loggers beyond the built-in one. The
/// [`Plugins`] list is the ready-made option.
pub trait LoggerDiscovery {
	/// # Entries.
	///
	/// Return the entries registered under `group`, in discovery order.
	///
	/// ## Errors
	///
	/// Implementations should return an error if discovery itself fails.
	fn entries(&self, group: &str) -> Result<Vec<Box<dyn LoggerEntry + '_>>, MorituriError>;
}



#[derive(Debug, Clone)]
/// # Entry Point.
///
/// The stock [`LoggerEntry`] implementation: a name and a loader function.
///
/// ```
/// use morituri_core::{EntryPoint, LoggerEntry, MorituriLogger};
///
/// let entry = EntryPoint::of::<MorituriLogger, _>("plain");
/// assert_eq!(entry.name(), "plain");
/// assert!(entry.load().is_ok_and(|t| t.is::<MorituriLogger>()));
/// ```
pub struct EntryPoint {
	name: Cow<'static, str>,
	load: Loader,
}

impl LoggerEntry for EntryPoint {
	#[inline]
	fn name(&self) -> &str { &self.name }

	#[inline]
	fn load(&self) -> Result<LoggerType, MorituriError> { (self.load)() }
}

impl EntryPoint {
	#[must_use]
	/// # New.
	pub fn new<S>(name: S, load: Loader) -> Self
	where S: Into<Cow<'static, str>> {
		Self { name: name.into(), load }
	}

	#[must_use]
	/// # New (Fixed Type).
	///
	/// Return an entry that always loads `L`.
	pub fn of<L, S>(name: S) -> Self
	where
		L: Logger + Default + 'static,
		S: Into<Cow<'static, str>> {
		/// # Load.
		fn load<L>() -> Result<LoggerType, MorituriError>
		where L: Logger + Default + 'static { Ok(LoggerType::of::<L>()) }

		Self::new(name, load::<L>)
	}
}



#[derive(Default)]
/// # Plugins.
///
/// An in-process [`LoggerDiscovery`]. The host registers entries under an
/// extension-point group (usually [`LOGGER_ENTRY_POINT`]), and they are
/// returned in the order they were added.
///
/// ```
/// use morituri_core::{
///     get_loggers,
///     EntryPoint,
///     MorituriLogger,
///     Plugins,
///     LOGGER_ENTRY_POINT,
/// };
///
/// let plugins = Plugins::default()
///     .with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<MorituriLogger, _>("plain"));
///
/// let loggers = get_loggers(&plugins).unwrap();
/// assert_eq!(loggers.len(), 2);
/// ```
pub struct Plugins(Vec<(String, Box<dyn LoggerEntry>)>);

impl fmt::Debug for Plugins {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list()
			.entries(self.0.iter().map(|(group, entry)| (group, entry.name())))
			.finish()
	}
}

impl LoggerDiscovery for Plugins {
	fn entries(&self, group: &str) -> Result<Vec<Box<dyn LoggerEntry + '_>>, MorituriError> {
		Ok(
			self.0.iter()
				.filter(|(g, _)| g == group)
				.map(|(_, entry)| Box::new(&**entry) as Box<dyn LoggerEntry + '_>)
				.collect()
		)
	}
}

impl Plugins {
	#[must_use]
	/// # With Entry.
	pub fn with_entry<E>(mut self, group: &str, entry: E) -> Self
	where E: LoggerEntry + 'static {
		self.push_entry(group, entry);
		self
	}

	/// # Push Entry.
	pub fn push_entry<E>(&mut self, group: &str, entry: E)
	where E: LoggerEntry + 'static {
		self.0.push((group.to_owned(), Box::new(entry)));
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }
}



/// # Get Loggers.
///
/// Return all available logger types by name.
///
/// The built-in [`MorituriLogger`] is loaded first under [`BUILTIN_LOGGER`],
/// followed by each entry `discovery` returns for [`LOGGER_ENTRY_POINT`], in
/// order. Every entry overwrites whatever was previously registered under the
/// same name, so plugins can replace the built-in, and later plugins replace
/// earlier ones.
///
/// A new map is built on every call.
///
/// ## Errors
///
/// If discovery fails, or any single entry fails to load, the error is
/// returned as-is and no loggers are returned at all.
pub fn get_loggers<D>(discovery: &D) -> Result<Loggers, MorituriError>
where D: LoggerDiscovery + ?Sized {
	let builtin = EntryPoint::of::<MorituriLogger, _>(BUILTIN_LOGGER);
	let plugins = discovery.entries(LOGGER_ENTRY_POINT)?;

	let mut out = Loggers::with_hasher(AHASHER);
	register(&mut out, &builtin)?;
	for entry in &plugins { register(&mut out, &**entry)?; }

	Ok(out)
}

/// # Register Entry.
///
/// Load the entry and store it, replacing anything already registered under
/// the same name.
fn register(out: &mut Loggers, entry: &dyn LoggerEntry) -> Result<(), MorituriError> {
	let kind = entry.load()?;
	out.insert(entry.name().to_owned(), kind);
	Ok(())
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::RipResult;

	#[derive(Default)]
	struct AltLogger;
	impl Logger for AltLogger {
		fn log(&self, _result: &RipResult<'_>, _epoch: u32) -> Result<String, MorituriError> {
			Ok("alt".to_owned())
		}
	}

	#[derive(Default)]
	struct OverrideLogger;
	impl Logger for OverrideLogger {}

	/// # Broken Loader.
	fn broken() -> Result<LoggerType, MorituriError> {
		Err(MorituriError::PluginLoad("broken".to_owned(), "no such type".to_owned()))
	}

	/// # Failing Discovery.
	struct NoDiscovery;
	impl LoggerDiscovery for NoDiscovery {
		fn entries(&self, _group: &str) -> Result<Vec<Box<dyn LoggerEntry + '_>>, MorituriError> {
			Err(MorituriError::Discovery("metadata unreadable".to_owned()))
		}
	}

	/// # Owned Entries.
	///
	/// Make sure discovery can hand back entries it builds on the fly.
	struct Generated(Vec<&'static str>);
	impl LoggerDiscovery for Generated {
		fn entries(&self, group: &str) -> Result<Vec<Box<dyn LoggerEntry + '_>>, MorituriError> {
			assert_eq!(group, LOGGER_ENTRY_POINT, "Wrong extension point.");
			Ok(
				self.0.iter()
					.map(|&n| Box::new(EntryPoint::of::<AltLogger, _>(n)) as Box<dyn LoggerEntry + '_>)
					.collect()
			)
		}
	}

	#[test]
	fn t_builtin_only() {
		let loggers = get_loggers(&Plugins::default()).expect("Loggers failed.");
		assert_eq!(loggers.len(), 1, "Expected exactly one logger.");
		assert!(
			loggers.get(BUILTIN_LOGGER).is_some_and(LoggerType::is::<MorituriLogger>),
			"The built-in logger is missing.",
		);
	}

	#[test]
	fn t_extra_logger() {
		let plugins = Plugins::default()
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<AltLogger, _>("alt"));
		let loggers = get_loggers(&plugins).expect("Loggers failed.");
		assert_eq!(loggers.len(), 2, "Expected two loggers.");
		assert_eq!(loggers.get("morituri"), Some(&LoggerType::of::<MorituriLogger>()));
		assert_eq!(loggers.get("alt"), Some(&LoggerType::of::<AltLogger>()));

		// And it should work.
		let out = loggers["alt"].build().log(&RipResult::new(), 0).expect("Alt failed.");
		assert_eq!(out, "alt");
	}

	#[test]
	fn t_override_builtin() {
		let plugins = Plugins::default()
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<OverrideLogger, _>(BUILTIN_LOGGER));
		let loggers = get_loggers(&plugins).expect("Loggers failed.");
		assert_eq!(loggers.len(), 1, "Expected exactly one logger.");
		assert_eq!(loggers.get(BUILTIN_LOGGER), Some(&LoggerType::of::<OverrideLogger>()));
	}

	#[test]
	fn t_last_wins() {
		let plugins = Plugins::default()
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<AltLogger, _>("alt"))
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<OverrideLogger, _>("alt"));
		let loggers = get_loggers(&plugins).expect("Loggers failed.");
		assert_eq!(loggers.len(), 2, "Expected two loggers.");
		assert_eq!(loggers.get("alt"), Some(&LoggerType::of::<OverrideLogger>()));
	}

	#[test]
	fn t_other_groups() {
		// Entries under other extension points should be ignored.
		let plugins = Plugins::default()
			.with_entry("morituri.other", EntryPoint::of::<AltLogger, _>("alt"));
		assert_eq!(plugins.len(), 1);

		let loggers = get_loggers(&plugins).expect("Loggers failed.");
		assert_eq!(loggers.len(), 1, "Expected exactly one logger.");
		assert!(! loggers.contains_key("alt"), "The alt logger should be missing.");
	}

	#[test]
	fn t_broken_plugin() {
		// One bad entry spoils the lot, wherever it is.
		let plugins = Plugins::default()
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<AltLogger, _>("alt"))
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::new("broken", broken))
			.with_entry(LOGGER_ENTRY_POINT, EntryPoint::of::<OverrideLogger, _>("later"));
		assert_eq!(
			get_loggers(&plugins),
			Err(MorituriError::PluginLoad("broken".to_owned(), "no such type".to_owned())),
		);

		assert_eq!(
			get_loggers(&NoDiscovery),
			Err(MorituriError::Discovery("metadata unreadable".to_owned())),
		);
	}

	#[test]
	fn t_generated_entries() {
		let loggers = get_loggers(&Generated(vec!["one", "two", "morituri"]))
			.expect("Loggers failed.");
		assert_eq!(loggers.len(), 3, "Expected three loggers.");
		for name in ["one", "two", "morituri"] {
			assert!(
				loggers.get(name).is_some_and(LoggerType::is::<AltLogger>),
				"{name} should be an AltLogger.",
			);
		}
	}

	#[test]
	fn t_fresh_maps() {
		let plugins = Plugins::default();
		let mut a = get_loggers(&plugins).expect("Loggers failed.");
		a.clear();
		let b = get_loggers(&plugins).expect("Loggers failed.");
		assert_eq!(b.len(), 1, "Maps should not be shared between calls.");
	}
}

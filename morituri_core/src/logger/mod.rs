/*!
# Morituri: Loggers
*/

mod morituri;
mod plugin;

pub use morituri::MorituriLogger;
pub use plugin::{
	get_loggers,
	EntryPoint,
	LoggerDiscovery,
	LoggerEntry,
	Loggers,
	Plugins,
};

use crate::{
	MorituriError,
	RipResult,
};
use std::{
	any::TypeId,
	fmt,
	hash,
};



/// # Logger.
///
/// A logger turns a finished [`RipResult`] into a report.
///
/// The `epoch` is the Unix timestamp the report should be considered
/// generated at. There is no default; pass a fresh value each time, e.g.
/// `utc2k::unixtime()`.
///
/// Implementations that don't override [`Logger::log`] will return
/// [`MorituriError::NotImplemented`].
///
/// ```
/// use morituri_core::{Logger, MorituriError, RipResult};
///
/// #[derive(Default)]
/// struct Lazy;
/// impl Logger for Lazy {}
///
/// assert_eq!(
///     Lazy.log(&RipResult::new(), 0),
///     Err(MorituriError::NotImplemented("Logger::log")),
/// );
/// ```
pub trait Logger: Send + Sync {
	/// # Log.
	///
	/// Generate and return a report for the rip.
	///
	/// ## Errors
	///
	/// The default implementation always returns an error. Implementations
	/// are free to reject results they cannot make sense of.
	fn log(&self, result: &RipResult<'_>, epoch: u32) -> Result<String, MorituriError> {
		let _ = (result, epoch);
		Err(MorituriError::NotImplemented("Logger::log"))
	}
}



#[derive(Clone, Copy)]
/// # Logger Type.
///
/// This is what loggers are registered as: a handle to a concrete [`Logger`]
/// type that can be compared against other types and used to build
/// instances.
///
/// ```
/// use morituri_core::{LoggerType, MorituriLogger};
///
/// let kind = LoggerType::of::<MorituriLogger>();
/// assert!(kind.is::<MorituriLogger>());
///
/// let logger = kind.build();
/// ```
pub struct LoggerType {
	id: TypeId,
	name: &'static str,
	build: fn() -> Box<dyn Logger>,
}

impl fmt::Debug for LoggerType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("LoggerType").field(&self.name).finish()
	}
}

impl Eq for LoggerType {}

impl hash::Hash for LoggerType {
	#[inline]
	fn hash<H: hash::Hasher>(&self, state: &mut H) { self.id.hash(state); }
}

impl PartialEq for LoggerType {
	#[inline]
	fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl LoggerType {
	#[must_use]
	/// # Of Type.
	pub fn of<L>() -> Self
	where L: Logger + Default + 'static {
		/// # Build.
		fn build<L>() -> Box<dyn Logger>
		where L: Logger + Default + 'static { Box::new(L::default()) }

		Self {
			id: TypeId::of::<L>(),
			name: std::any::type_name::<L>(),
			build: build::<L>,
		}
	}

	#[must_use]
	/// # Is Type?
	pub fn is<L>(&self) -> bool
	where L: Logger + 'static { self.id == TypeId::of::<L>() }

	#[must_use]
	/// # Type Name.
	pub const fn type_name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Build.
	///
	/// Return a new instance of the logger.
	pub fn build(&self) -> Box<dyn Logger> { (self.build)() }
}



#[cfg(test)]
mod test {
	use super::*;

	#[derive(Default)]
	struct Bare;
	impl Logger for Bare {}

	#[derive(Default)]
	struct Echo;
	impl Logger for Echo {
		fn log(&self, result: &RipResult<'_>, epoch: u32) -> Result<String, MorituriError> {
			Ok(format!("{} {epoch}", result.tracks().len()))
		}
	}

	#[test]
	fn t_not_implemented() {
		let rip = RipResult::new();
		assert_eq!(
			Bare.log(&rip, 1_700_000_000),
			Err(MorituriError::NotImplemented("Logger::log")),
		);

		// Same through a built instance.
		let logger = LoggerType::of::<Bare>().build();
		assert!(logger.log(&rip, 0).is_err(), "Bare loggers should fail.");
	}

	#[test]
	fn t_logger_type() {
		let bare = LoggerType::of::<Bare>();
		let echo = LoggerType::of::<Echo>();
		assert_eq!(bare, LoggerType::of::<Bare>());
		assert_ne!(bare, echo);
		assert!(bare.is::<Bare>(), "Type mismatch.");
		assert!(! bare.is::<Echo>(), "Type mismatch.");
		assert!(echo.type_name().ends_with("Echo"), "Unexpected type name {}.", echo.type_name());

		// The epoch should come straight through.
		let out = echo.build().log(&RipResult::new(), 12345).expect("Echo failed.");
		assert_eq!(out, "0 12345");
	}
}

/*!
# Morituri: Errors
*/

#[cfg(feature = "bin")] use argyle::ArgyleError;
use cdtoc::TocError;
use fyi_msg::Msg;
use std::{
	error::Error,
	fmt,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
Morituri v", env!("CARGO_PKG_VERSION"), r"
For those about to rip.

USAGE:
    morituri [OPTIONS]

REPORT SETTINGS:
    -l, --logger <NAME>
                      Generate the report with the logger registered under
                      <NAME>. [default: morituri]
        --list        Print the names of all available loggers to STDOUT and
                      exit.

DISC SETTINGS:
    -t, --toc <CDTOC> The disc table of contents, formatted like a CDTOC
                      metadata tag, e.g. 4+96+2D2B+6256+B327+D84A. One empty
                      track result is generated for each audio track.
    -o, --offset <SAMPLES>
                      The sample read offset to note in the report.
                      [default: 0; range: ±5880]
        --artist <STRING>
                      The disc artist.
        --title <STRING>
                      The disc title.

MISCELLANEOUS:
    -h, --help        Print help information to STDOUT and exit.
    -V, --version     Print version information to STDOUT and exit.
");



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
pub enum MorituriError {
	/// # CDTOC passthrough.
	Cdtoc(TocError),

	/// # Plugin discovery failed.
	Discovery(String),

	/// # Unknown logger.
	NoLogger(String),

	/// # Nothing to report.
	NoTracks,

	/// # Abstract method.
	NotImplemented(&'static str),

	/// # Plugin load failure (name, reason).
	PluginLoad(String, String),

	/// # Read Offset.
	ReadOffset,

	#[cfg(feature = "bin")]
	/// # Invalid CLI arg.
	CliArg(String),

	#[cfg(feature = "bin")]
	/// # CLI Parsing failure.
	CliParse(&'static str),

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for MorituriError {}

#[cfg(feature = "bin")]
impl From<ArgyleError> for MorituriError {
	fn from(err: ArgyleError) -> Self {
		match err {
			ArgyleError::WantsHelp => Self::PrintHelp,
			ArgyleError::WantsVersion => Self::PrintVersion,
			e => Self::CliArg(e.to_string()),
		}
	}
}

impl From<TocError> for MorituriError {
	#[inline]
	fn from(err: TocError) -> Self { Self::Cdtoc(err) }
}

impl From<MorituriError> for Msg {
	#[inline]
	fn from(src: MorituriError) -> Self { Self::error(src.to_string()) }
}

impl fmt::Display for MorituriError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Cdtoc(s) => write!(f, "{s}"),
			Self::Discovery(s) => write!(f, "Logger discovery failed: {s}."),
			Self::NoLogger(s) => write!(f, "There is no logger named {s:?}."),
			Self::NoTracks => f.write_str("There are no track results to report."),
			Self::NotImplemented(s) => write!(f, "Not implemented: {s}."),
			Self::PluginLoad(name, reason) =>
				if reason.is_empty() { write!(f, "Unable to load the {name:?} logger.") }
				else { write!(f, "Unable to load the {name:?} logger: {reason}.") },
			Self::ReadOffset => f.write_str("Invalid read offset."),

			#[cfg(feature = "bin")]
			Self::CliArg(s) => write!(f, "Invalid CLI option: {s}"),

			#[cfg(feature = "bin")]
			Self::CliParse(s) => write!(f, "Unable to parse {s}."),

			#[cfg(feature = "bin")]
			Self::PrintHelp => f.write_str(HELP),

			#[cfg(feature = "bin")]
			Self::PrintVersion => f.write_str(concat!("Morituri v", env!("CARGO_PKG_VERSION"))),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_plugin_load_display() {
		let err = MorituriError::PluginLoad("alt".to_owned(), String::new());
		assert_eq!(err.to_string(), "Unable to load the \"alt\" logger.");

		let err = MorituriError::PluginLoad("alt".to_owned(), "missing symbol".to_owned());
		assert_eq!(err.to_string(), "Unable to load the \"alt\" logger: missing symbol.");
	}

	#[test]
	fn t_not_implemented_display() {
		let err = MorituriError::NotImplemented("Logger::log");
		assert_eq!(err.to_string(), "Not implemented: Logger::log.");
	}
}

/*!
# Morituri
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod cli;

use fyi_msg::Msg;
use morituri_core::{
	get_loggers,
	Loggers,
	MorituriError,
	Plugins,
};
use oxford_join::OxfordJoin;
use std::{
	io::Write,
	process::ExitCode,
};



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() -> ExitCode {
	match main__() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e @ (MorituriError::PrintHelp | MorituriError::PrintVersion)) => {
			println!("{e}");
			ExitCode::SUCCESS
		},
		Err(e) => {
			Msg::from(e).eprint();
			ExitCode::FAILURE
		},
	}
}

#[inline]
/// # Actual Main.
///
/// This does all the stuff.
fn main__() -> Result<(), MorituriError> {
	let opts = cli::parse()?;
	let loggers = get_loggers(&plugins())?;

	// Just listing?
	if opts.list() {
		let writer = std::io::stdout();
		let mut handle = writer.lock();
		for name in logger_names(&loggers) {
			let _res = writeln!(&mut handle, "{name}");
		}
		let _res = handle.flush();
		return Ok(());
	}

	// Find the logger.
	let Some(kind) = loggers.get(opts.logger()) else {
		Msg::warning(format!(
			"Available loggers: {}.",
			logger_names(&loggers).oxford_and(),
		)).eprint();
		return Err(MorituriError::NoLogger(opts.logger().to_owned()));
	};

	// Generate the report, stamped with the current time.
	let rip = opts.rip_result()?;
	let report = kind.build().log(&rip, utc2k::unixtime())?;

	let writer = std::io::stdout();
	let mut handle = writer.lock();
	let _res = handle.write_all(report.as_bytes()).and_then(|()| handle.flush());

	Ok(())
}

/// # Plugins.
///
/// Additional loggers compiled into the program get registered here. There
/// aren't any yet, so only the built-in is available.
fn plugins() -> Plugins { Plugins::default() }

/// # Logger Names (Sorted).
fn logger_names(loggers: &Loggers) -> Vec<&str> {
	let mut out: Vec<&str> = loggers.keys().map(String::as_str).collect();
	out.sort_unstable();
	out
}

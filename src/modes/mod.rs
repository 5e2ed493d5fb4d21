mod command;
mod describe;
mod inspect;

use super::Options;
use log::warn;
use serde::Serialize;
use std::fmt;
use std::io::{self, Error, Write};

/// What to do, depending on which options were given.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Mode<'a> {
	/// Describe the build tool itself.
	Describe,
	/// List the targets and variables of a makefile.
	Inspect { path: &'a str },
	/// Give the command to build a target.
	Command {
		path: &'a str,
		target: &'a str,
		flags: &'a str,
	},
}

/// An invalid combination of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct UsageError;

impl fmt::Display for UsageError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "--flags only makes sense with --path and --target")
	}
}

impl std::error::Error for UsageError {}

/// Pick the mode based on which options were given.
///
/// An empty `--flags` counts as not given.
pub(super) fn select(opt: &Options) -> Result<Mode<'_>, UsageError> {
	let flags = opt.flags.as_deref().unwrap_or("");
	match (opt.path.as_deref(), opt.target.as_deref()) {
		(Some(path), Some(target)) => Ok(Mode::Command {
			path,
			target,
			flags,
		}),
		_ if !flags.is_empty() => Err(UsageError),
		(Some(path), None) => Ok(Mode::Inspect { path }),
		(None, Some(target)) => {
			warn!("Ignoring --target {:?} without --path", target);
			Ok(Mode::Describe)
		}
		(None, None) => Ok(Mode::Describe),
	}
}

pub(super) fn run(mode: &Mode, opt: &Options) -> Result<(), Error> {
	match *mode {
		Mode::Describe => describe::main(opt),
		Mode::Inspect { path } => inspect::main(opt, path),
		Mode::Command {
			path,
			target,
			flags,
		} => command::main(opt, path, target, flags),
	}
}

/// Write the result as a single line of JSON (or pretty-printed with
/// `--pretty`) to standard output.
fn emit(value: &impl Serialize, opt: &Options) -> Result<(), Error> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	if opt.pretty {
		serde_json::to_writer_pretty(&mut out, value)?;
	} else {
		serde_json::to_writer(&mut out, value)?;
	}
	writeln!(out)?;
	out.flush()
}

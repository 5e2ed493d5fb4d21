use super::{emit, Options};
use log::debug;
use mkprobe::invoke::inspect_with;
use std::io::Error;

/// Output the targets and variables of the makefile.
///
/// Failing to inspect the makefile is not an error here: the host shows the
/// `error` field of the result to the user.
pub(super) fn main(opt: &Options, path: &str) -> Result<(), Error> {
	let result = inspect_with(&opt.make, path);
	debug!(
		"Found {} targets and {} variables",
		result.targets.len(),
		result.variables.len()
	);
	emit(&result, opt)
}

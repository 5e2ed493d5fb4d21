use super::{emit, Options};
use log::debug;
use mkprobe::command::build_command_with;
use std::io::Error;

pub(super) fn main(opt: &Options, path: &str, target: &str, flags: &str) -> Result<(), Error> {
	let command = build_command_with(&opt.make, path, target, flags);
	debug!(
		"Build command: {:?} in {:?}",
		command.command_line, command.working_directory
	);
	emit(&command, opt)
}

//! Building the command line for a build.

use crate::path::{expand_home, split};
use crate::tool::{DEFAULT_MAKEFILE, MAKE};
use serde::Serialize;

/// A shell command and the directory to run it in.
///
/// Serializes to `{"cwd": "...", "command": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildCommand {
	/// The directory of the makefile. Empty for a bare file name.
	#[serde(rename = "cwd")]
	pub working_directory: String,
	/// The command line, to be interpreted by a shell.
	#[serde(rename = "command")]
	pub command_line: String,
}

/// Get the `make` command to build `target` from the makefile at `path`.
///
/// See [`build_command_with()`].
pub fn build_command(path: &str, target: &str, flags: &str) -> BuildCommand {
	build_command_with(MAKE, path, target, flags)
}

/// Get the command to build `target` from the makefile at `path`, using `make`
/// as the build tool program.
///
/// A leading `~` in `path` is expanded. If the file is not called `Makefile`,
/// `-f name` is added before `flags`.
///
/// Neither `target` nor `flags` is escaped: they end up in the command line
/// exactly as given.
pub fn build_command_with(make: &str, path: &str, target: &str, flags: &str) -> BuildCommand {
	let path = expand_home(path);
	let (directory, file_name) = split(&path);

	let mut command_line = make.to_owned();
	if file_name != DEFAULT_MAKEFILE {
		command_line.push_str(" -f ");
		command_line.push_str(file_name);
	}
	if !flags.is_empty() {
		if !flags.starts_with(' ') {
			command_line.push(' ');
		}
		command_line.push_str(flags);
	}
	command_line.push(' ');
	command_line.push_str(target);

	BuildCommand {
		working_directory: directory.to_owned(),
		command_line,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cmd(cwd: &str, command: &str) -> BuildCommand {
		BuildCommand {
			working_directory: cwd.to_owned(),
			command_line: command.to_owned(),
		}
	}

	#[test]
	fn test_default_makefile() {
		assert_eq!(build_command("/x/Makefile", "all", ""), cmd("/x", "make all"));
		assert_eq!(
			build_command("/x/Makefile", "all", "-j4"),
			cmd("/x", "make -j4 all")
		);
	}

	#[test]
	fn test_other_makefile() {
		assert_eq!(
			build_command("/x/build.mk", "all", "-n"),
			cmd("/x", "make -f build.mk -n all")
		);
		assert_eq!(
			build_command("/x/makefile", "all", ""),
			cmd("/x", "make -f makefile all")
		);
	}

	#[test]
	fn test_flags_with_leading_space() {
		assert_eq!(
			build_command("/x/Makefile", "all", " -k"),
			cmd("/x", "make -k all")
		);
	}

	#[test]
	fn test_empty_target() {
		assert_eq!(build_command("/x/Makefile", "", ""), cmd("/x", "make "));
	}

	#[test]
	fn test_no_escaping() {
		assert_eq!(
			build_command("/x/Makefile", "a b; rm", "X='1 2'"),
			cmd("/x", "make X='1 2' a b; rm")
		);
	}

	#[test]
	fn test_bare_file_name() {
		assert_eq!(build_command("Makefile", "all", ""), cmd("", "make all"));
	}

	#[test]
	fn test_other_program() {
		assert_eq!(
			build_command_with("gmake", "/x/GNUmakefile", "all", ""),
			cmd("/x", "gmake -f GNUmakefile all")
		);
	}

	#[test]
	fn test_home() {
		if let Some(home) = dirs::home_dir() {
			let home = home.to_string_lossy().into_owned();
			let expected = cmd(
				split(&format!("{}/Makefile", home.trim_end_matches('/'))).0,
				"make all",
			);
			assert_eq!(build_command("~/Makefile", "all", ""), expected);
		}
	}

	#[test]
	fn test_json() {
		assert_eq!(
			serde_json::to_string(&build_command("/x/build.mk", "all", "-n")).unwrap(),
			r#"{"cwd":"/x","command":"make -f build.mk -n all"}"#
		);
	}
}

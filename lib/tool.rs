//! Static facts about the build tool.

use serde::Serialize;

/// The name of the build tool, and the program that is run by default.
pub const MAKE: &str = "make";

/// The file make reads when no `-f` is given.
pub const DEFAULT_MAKEFILE: &str = "Makefile";

/// What the host needs to know to pick this tool for a directory.
///
/// Serializes to `{"name": "make", "globs": ["Makefile"]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
	pub name: &'static str,
	/// Glob patterns for the file names of build files this tool handles.
	#[serde(rename = "globs")]
	pub file_globs: &'static [&'static str],
}

pub fn describe_tool() -> ToolDescriptor {
	ToolDescriptor {
		name: MAKE,
		file_globs: &[DEFAULT_MAKEFILE],
	}
}

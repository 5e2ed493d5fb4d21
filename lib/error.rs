//! Errors while running make.

use std::error::Error;
use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// An error while asking make for its database.
///
/// Every variant carries the command line that was run, as it would be typed
/// in a shell, so the message can be shown to the user as is.
#[derive(Debug)]
pub enum InvokeError {
	/// The build tool could not be started at all.
	Spawn {
		command: String,
		error: std::io::Error,
	},
	/// The build tool failed and said why on its standard error.
	Failed { command: String, stderr: String },
	/// The build tool failed without writing anything to its standard error.
	Status { command: String, status: ExitStatus },
}

impl fmt::Display for InvokeError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			InvokeError::Spawn { command, error } => {
				write!(f, "`{}` could not be run: {}", command, error)
			}
			InvokeError::Failed { command, stderr } => {
				write!(f, "`{}` returned with error '{}'", command, stderr)
			}
			InvokeError::Status { command, status } => match status.code() {
				Some(code) => write!(f, "`{}` returned with return code {}", command, code),
				None => match status.signal() {
					Some(signal) => write!(f, "`{}` was killed by signal {}", command, signal),
					None => write!(f, "`{}` failed: {}", command, status),
				},
			},
		}
	}
}

impl Error for InvokeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			InvokeError::Spawn { error, .. } => Some(error),
			_ => None,
		}
	}
}

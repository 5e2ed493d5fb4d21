//! Running make to inspect a makefile.
//!
//! > makefile path → [`inspect()`] → `make -p -f path` →
//! > [`dump::parse()`][crate::dump::parse()] → [`InspectionResult`]

use crate::dump::{self, Database, Variable};
use crate::error::InvokeError;
use crate::path::{absolute, expand_home, split};
use crate::tool::MAKE;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::process::{Command, Stdio};

/// The outcome of inspecting a makefile.
///
/// Serializes to `{"error": "", "targets": [...], "variables": [...]}`. When
/// `error` is not empty, only the `error` field is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionResult {
	/// The error message, or empty on success.
	pub error: String,
	/// See [`Database::targets`].
	pub targets: Vec<String>,
	/// See [`Database::variables`].
	pub variables: Vec<Variable>,
}

impl InspectionResult {
	pub fn is_success(&self) -> bool {
		self.error.is_empty()
	}
}

impl From<Database> for InspectionResult {
	fn from(db: Database) -> Self {
		InspectionResult {
			error: String::new(),
			targets: db.targets,
			variables: db.variables,
		}
	}
}

impl From<InvokeError> for InspectionResult {
	fn from(error: InvokeError) -> Self {
		InspectionResult {
			error: error.to_string(),
			targets: Vec::new(),
			variables: Vec::new(),
		}
	}
}

impl Serialize for InspectionResult {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let success = self.is_success();
		let mut map = serializer.serialize_map(Some(if success { 3 } else { 1 }))?;
		map.serialize_entry("error", &self.error)?;
		if success {
			map.serialize_entry("targets", &self.targets)?;
			map.serialize_entry("variables", &self.variables)?;
		}
		map.end()
	}
}

/// Inspect a makefile using `make`.
///
/// See [`inspect_with()`].
pub fn inspect(path: &str) -> InspectionResult {
	inspect_with(MAKE, path)
}

/// Inspect a makefile, using `make` as the build tool program.
///
/// A leading `~` in `path` is expanded. The tool runs in the directory of the
/// makefile, and blocks until it exits.
///
/// Never fails: if make can't be run or exits with an error, that's described
/// in [`InspectionResult::error`] and no targets or variables are given.
pub fn inspect_with(make: &str, path: &str) -> InspectionResult {
	match dump_database(make, path) {
		Ok(dump) => dump::parse(&dump).into(),
		Err(e) => {
			debug!("{}", e);
			e.into()
		}
	}
}

/// Run `make -p -f path` and return its standard output.
pub fn dump_database(make: &str, path: &str) -> Result<String, InvokeError> {
	let path = expand_home(path);
	let path = absolute(&path);
	let dir = match split(&path).0 {
		"" => ".",
		dir => dir,
	};
	let args = ["-p", "-f", &*path];
	let command = format!("{} {}", make, args.join(" "));

	debug!("Running `{}` in {:?}", command, dir);
	let output = Command::new(make)
		.args(&args)
		.current_dir(dir)
		.stdin(Stdio::null())
		.output();
	let output = match output {
		Ok(output) => output,
		Err(error) => return Err(InvokeError::Spawn { command, error }),
	};
	debug!(
		"`{}` exited with {}, {} bytes of output",
		command,
		output.status,
		output.stdout.len()
	);

	if output.status.success() {
		Ok(String::from_utf8_lossy(&output.stdout).into_owned())
	} else if !output.stderr.is_empty() {
		let stderr = String::from_utf8_lossy(&output.stderr);
		Err(InvokeError::Failed {
			command,
			stderr: stderr.trim_end().to_owned(),
		})
	} else {
		Err(InvokeError::Status {
			command,
			status: output.status,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::os::unix::fs::PermissionsExt;
	use std::path::Path;
	use std::sync::{Mutex, MutexGuard};

	// Writing an executable while another thread forks can make exec fail
	// with ETXTBSY, so tests that run a fake make don't run concurrently.
	static SPAWN: Mutex<()> = Mutex::new(());

	fn lock() -> MutexGuard<'static, ()> {
		SPAWN.lock().unwrap_or_else(|e| e.into_inner())
	}

	fn fake_make(dir: &Path, script: &str) -> String {
		let path = dir.join("fake-make");
		fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
		path.to_string_lossy().into_owned()
	}

	fn makefile(dir: &Path) -> String {
		dir.join("Makefile").to_string_lossy().into_owned()
	}

	#[test]
	fn test_success() {
		let _lock = lock();
		let dir = tempfile::tempdir().unwrap();
		let make = fake_make(
			dir.path(),
			"printf '# makefile (from Makefile, line 1)\\nCC = cc\\n\\nall: hello\\n'",
		);
		let result = inspect_with(&make, &makefile(dir.path()));
		assert_eq!(result.error, "");
		assert_eq!(result.targets, ["all"]);
		assert_eq!(
			result.variables,
			[Variable {
				name: "CC".to_owned(),
				value: "cc".to_owned(),
			}]
		);
	}

	#[test]
	fn test_runs_in_makefile_dir() {
		let _lock = lock();
		let dir = tempfile::tempdir().unwrap();
		let make = fake_make(dir.path(), "[ -f ./Makefile ] && echo 'here:'");
		fs::write(dir.path().join("Makefile"), "").unwrap();
		let result = inspect_with(&make, &makefile(dir.path()));
		assert_eq!(result.targets, ["here"]);
	}

	#[test]
	fn test_stderr() {
		let _lock = lock();
		let dir = tempfile::tempdir().unwrap();
		let make = fake_make(dir.path(), "echo 'all: x'; echo 'no rule' >&2; exit 2");
		let path = makefile(dir.path());
		let result = inspect_with(&make, &path);
		assert!(!result.is_success());
		assert!(result.error.contains(&format!("{} -p -f {}", make, path)));
		assert!(result.error.contains("no rule"));
		assert!(result.targets.is_empty());
		assert!(result.variables.is_empty());
	}

	#[test]
	fn test_exit_status() {
		let _lock = lock();
		let dir = tempfile::tempdir().unwrap();
		let make = fake_make(dir.path(), "exit 3");
		let path = makefile(dir.path());
		let result = inspect_with(&make, &path);
		assert_eq!(
			result.error,
			format!("`{} -p -f {}` returned with return code 3", make, path)
		);
	}

	#[test]
	fn test_missing_tool() {
		let _lock = lock();
		let dir = tempfile::tempdir().unwrap();
		let make = dir.path().join("no-such-make").to_string_lossy().into_owned();
		let result = inspect_with(&make, &makefile(dir.path()));
		assert!(result.error.contains("could not be run"));
		assert!(result.targets.is_empty());
	}

	#[test]
	fn test_json() {
		let ok = InspectionResult {
			error: String::new(),
			targets: vec!["all".to_owned()],
			variables: vec![Variable {
				name: "CC".to_owned(),
				value: "cc".to_owned(),
			}],
		};
		assert_eq!(
			serde_json::to_string(&ok).unwrap(),
			r#"{"error":"","targets":["all"],"variables":[["CC","cc"]]}"#
		);
		let failed = InspectionResult {
			error: "oops".to_owned(),
			..InspectionResult::default()
		};
		assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"error":"oops"}"#);
	}
}

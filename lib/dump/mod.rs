//! Everything related to the database dump make prints with `-p`.
//!
//! > `make -p` output → [`parse()`] → [`Database`]
//!
//! The dump is not meant to be read by programs. The parser relies on two
//! annotations make puts in it: [`NOT_A_TARGET`][targets::NOT_A_TARGET]
//! before rules that aren't real targets, and
//! [`MAKEFILE_ORIGIN`][variables::MAKEFILE_ORIGIN] before variables that come
//! from the makefile. If make ever changes those, targets or variables will
//! silently go missing or show up too often, but parsing never fails.

mod lines;

pub mod targets;
pub mod variables;

use serde::{Serialize, Serializer};

/// The parts of make's database we care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
	/// The names of the targets, in order of first appearance.
	///
	/// Never contains duplicates.
	pub targets: Vec<String>,
	/// The variables defined in the makefile, in order of appearance.
	pub variables: Vec<Variable>,
}

/// A variable definition from the makefile.
///
/// Serialized as a two-element array: `["NAME", "value"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
	pub name: String,
	/// The unexpanded value, without surrounding whitespace.
	pub value: String,
}

impl Serialize for Variable {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		(&self.name, &self.value).serialize(serializer)
	}
}

/// Parse the output of `make -p`.
///
/// Targets and variables are found independently of each other. Anything
/// that isn't recognized is skipped.
pub fn parse(dump: &str) -> Database {
	Database {
		targets: targets::parse_targets(dump),
		variables: variables::parse_variables(dump),
	}
}

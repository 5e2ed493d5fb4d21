//! Finding the variables defined by the makefile itself.
//!
//! A dump lists every variable make knows about: the built-in defaults, the
//! environment, automatic variables, and those from the makefile. Syntax alone
//! can't tell them apart, but make prints the origin of every variable on the
//! line before it. Only variables directly after a [`MAKEFILE_ORIGIN`] line
//! are picked up.

use super::lines::{is_blank, lines, trim_blanks};
use super::Variable;
use log::{debug, trace};

/// The start of the annotation make prints before a variable that was defined
/// in a makefile, e.g. `# makefile (from 'Makefile', line 3)`.
pub const MAKEFILE_ORIGIN: &str = "# makefile (from";

/// Get all `NAME = value` definitions that follow a makefile origin
/// annotation, in order of appearance.
///
/// Redefinitions are not merged: if a name appears twice, both are returned.
pub fn parse_variables(dump: &str) -> Vec<Variable> {
	let mut variables = Vec::new();
	let mut previous: Option<&str> = None;

	for line in lines(dump) {
		if previous.map_or(false, is_makefile_origin) {
			if let Some(var) = assignment(line.text) {
				trace!("line {}: variable {:?}", line.number, var.name);
				variables.push(var);
			} else {
				debug!(
					"line {}: no `name = value' after makefile annotation: {:?}",
					line.number, line.text
				);
			}
		}
		previous = Some(line.text);
	}

	variables
}

fn is_makefile_origin(line: &str) -> bool {
	line.len() > MAKEFILE_ORIGIN.len() && line.starts_with(MAKEFILE_ORIGIN)
}

pub fn is_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse a `NAME = value` line.
///
/// The `=` needs whitespace on both sides (or the end of the line after it),
/// which is how make prints recursively expanded variables. Simply expanded
/// variables (`NAME := value`) and everything else are not matched.
///
/// The value has its surrounding whitespace removed, and may be empty.
pub fn assignment(line: &str) -> Option<Variable> {
	let end = line.find(|c: char| !is_name_char(c)).unwrap_or(line.len());
	let (name, rest) = line.split_at(end);
	if name.is_empty() {
		return None;
	}
	let after_name = trim_blanks(rest);
	if after_name.len() == rest.len() {
		return None;
	}
	let value = after_name.strip_prefix('=')?;
	if !value.is_empty() && !value.starts_with(is_blank) {
		return None;
	}
	Some(Variable {
		name: name.to_owned(),
		value: value.trim().to_owned(),
	})
}

//! Finding the targets in a database dump.
//!
//! Every rule make knows about is printed as `name: prerequisites`, including
//! the hundreds of built-in and implicit rules. The ones that are not real
//! targets are annotated with a [`NOT_A_TARGET`] line right above them.
//!
//! Only rules with a single, simple name are recognized. Names containing any
//! of `#`, `%`, `=`, `:` or whitespace never match, and names that look like
//! paths are skipped. Lines starting with a tab are recipe commands, not
//! rules.

use super::lines::{lines, trim_blanks};
use indexmap::IndexSet;
use log::trace;

/// The annotation make prints on the line before a rule which is not a
/// target (e.g. a suffix rule or a file that is only mentioned).
pub const NOT_A_TARGET: &str = "Not a target:";

/// Rule names make uses for its own bookkeeping, which are never reported.
pub const RESERVED_TARGETS: &[&str] = &[".PHONY", ".SUFFIXES", "make"];

/// Get the names of all targets in the dump, in order of first appearance,
/// without duplicates.
pub fn parse_targets(dump: &str) -> Vec<String> {
	let mut targets = IndexSet::new();
	let mut previous: Option<&str> = None;

	for line in lines(dump) {
		if let Some(name) = rule_name(line.text) {
			if previous.map_or(false, is_not_a_target) {
				trace!("line {}: {:?} is not a target", line.number, name);
			} else if is_excluded(name) {
				trace!("line {}: skipping {:?}", line.number, name);
			} else if targets.insert(name) {
				trace!("line {}: target {:?}", line.number, name);
			}
		}
		previous = Some(line.text);
	}

	targets.into_iter().map(str::to_owned).collect()
}

/// Check if a rule name is one that is never reported as a target.
pub fn is_excluded(name: &str) -> bool {
	RESERVED_TARGETS.contains(&name) || name.contains('/')
}

fn is_not_a_target(line: &str) -> bool {
	line.trim_end().ends_with(NOT_A_TARGET)
}

fn is_name_terminator(c: char) -> bool {
	match c {
		'#' | '%' | '=' | ':' | ' ' | '\t' | '\r' | '\n' => true,
		_ => false,
	}
}

/// Get the rule name of a `name: prerequisites` line.
///
/// After the colon there must either be nothing, or a letter or `#`. This
/// rules out `name := value`, `name:: ...`, order-only and pattern
/// prerequisites, and most of the other noise in a dump.
pub fn rule_name(line: &str) -> Option<&str> {
	let line = line.trim_start_matches(' ');
	let end = line.find(is_name_terminator).unwrap_or(line.len());
	let (name, rest) = line.split_at(end);
	if name.is_empty() {
		return None;
	}
	let rest = trim_blanks(trim_blanks(rest).strip_prefix(':')?);
	match rest.chars().next() {
		None => Some(name),
		Some(c) if c.is_ascii_alphabetic() || c == '#' => Some(name),
		Some(_) => None,
	}
}

use memchr::memchr;

/// A single line of a dump, without the line ending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
	/// The line number, starting at 1.
	pub number: usize,
	pub text: &'a str,
}

/// Iterator over the [`Line`]s of a dump.
///
/// Both `\n` and `\r\n` line endings are accepted. A final line without
/// line ending is still returned, but a trailing newline does not produce an
/// extra empty line.
pub struct Lines<'a> {
	rest: &'a str,
	number: usize,
}

pub fn lines(src: &str) -> Lines<'_> {
	Lines {
		rest: src,
		number: 0,
	}
}

impl<'a> Iterator for Lines<'a> {
	type Item = Line<'a>;

	fn next(&mut self) -> Option<Line<'a>> {
		if self.rest.is_empty() {
			return None;
		}
		let (text, rest) = match memchr(b'\n', self.rest.as_bytes()) {
			Some(n) => (&self.rest[..n], &self.rest[n + 1..]),
			None => (self.rest, ""),
		};
		self.rest = rest;
		self.number += 1;
		Some(Line {
			number: self.number,
			text: text.strip_suffix('\r').unwrap_or(text),
		})
	}
}

/// Eats the blanks (spaces and tabs) at the start of `src`.
pub fn trim_blanks(src: &str) -> &str {
	src.trim_start_matches(is_blank)
}

pub fn is_blank(c: char) -> bool {
	c == ' ' || c == '\t'
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(src: &str) -> Vec<&str> {
		lines(src).map(|line| line.text).collect()
	}

	#[test]
	fn test_lines() {
		assert!(texts("").is_empty());
		assert_eq!(texts("a"), ["a"]);
		assert_eq!(texts("a\n"), ["a"]);
		assert_eq!(texts("a\n\nb"), ["a", "", "b"]);
		assert_eq!(texts("a\r\nb\r\n"), ["a", "b"]);
		assert_eq!(texts("\n"), [""]);
	}

	#[test]
	fn test_line_numbers() {
		let numbers: Vec<usize> = lines("x\ny\n\nz").map(|line| line.number).collect();
		assert_eq!(numbers, [1, 2, 3, 4]);
	}
}

//! Handling of the makefile paths given by the host.

use log::warn;
use std::borrow::Cow;
use std::env;

/// Replace a leading `~` (alone or followed by `/`) by the home directory.
///
/// Other paths, including `~user/...`, are returned unchanged. If the home
/// directory can't be found, the path is returned unchanged as well.
pub fn expand_home(path: &str) -> Cow<'_, str> {
	let rest = if path == "~" {
		""
	} else if let Some(rest) = path.strip_prefix("~/") {
		rest
	} else {
		return Cow::Borrowed(path);
	};
	match dirs::home_dir() {
		Some(home) => Cow::Owned(join(&home.to_string_lossy(), rest)),
		None => {
			warn!("Unable to find the home directory, not expanding {:?}", path);
			Cow::Borrowed(path)
		}
	}
}

/// Make a relative path absolute by prepending the current directory.
pub fn absolute(path: &str) -> Cow<'_, str> {
	if path.starts_with('/') {
		return Cow::Borrowed(path);
	}
	match env::current_dir() {
		Ok(cwd) => Cow::Owned(join(&cwd.to_string_lossy(), path)),
		Err(e) => {
			warn!("Unable to get the current directory: {}", e);
			Cow::Borrowed(path)
		}
	}
}

fn join(dir: &str, rest: &str) -> String {
	if rest.is_empty() {
		dir.to_owned()
	} else {
		format!("{}/{}", dir.trim_end_matches('/'), rest)
	}
}

/// Split a path into the directory and the file name.
///
/// The directory has no trailing slashes, unless it consists of only slashes
/// (i.e. the root). Without any slash, the directory is empty.
/// If the path ends in a slash, the file name is empty.
pub fn split(path: &str) -> (&str, &str) {
	match path.rfind('/') {
		Some(i) => {
			let (dir, file_name) = (&path[..=i], &path[i + 1..]);
			let trimmed = dir.trim_end_matches('/');
			(if trimmed.is_empty() { dir } else { trimmed }, file_name)
		}
		None => ("", path),
	}
}

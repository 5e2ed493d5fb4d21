use log::{Metadata, Record};

/// Logs to standard error. Standard output is only for the result.
pub struct Logger;

impl log::Log for Logger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		eprintln!(
			"[{}] {}: {}",
			record.level(),
			record.target(),
			record.args()
		);
	}

	fn flush(&self) {}
}

mod logger;
mod modes;

use self::logger::Logger;
use log::{debug, error};
use std::process::exit;
use structopt::StructOpt;

/// Lets editors and build front ends work with Makefiles.
///
/// Without --path, describes the build tool. With --path, lists the targets
/// and variables of that makefile. With --path and --target, gives the
/// command to build that target. The result is written as JSON.
#[derive(StructOpt)]
#[structopt(name = "mkprobe")]
struct Options {
	/// Path to the makefile.
	#[structopt(long = "path")]
	path: Option<String>,

	/// Name of the makefile target to build.
	#[structopt(long = "target")]
	target: Option<String>,

	/// Make flags used when building the target. Only valid together with
	/// --path and --target.
	#[structopt(long = "flags", raw(allow_hyphen_values = "true"))]
	flags: Option<String>,

	/// The make program to run, and to use in build commands.
	#[structopt(long = "make", default_value = "make")]
	make: String,

	/// Pretty-print the JSON result.
	#[structopt(long)]
	pretty: bool,

	/// Enable debug messages.
	#[structopt(long)]
	debug: bool,
}

fn main() {
	log::set_logger(&Logger).unwrap();
	log::set_max_level(log::LevelFilter::Warn);

	let opt = Options::from_args();

	if opt.debug {
		log::set_max_level(log::LevelFilter::Debug);
		debug!("Debug messages enabled.");
	}

	let mode = modes::select(&opt).unwrap_or_else(|e| {
		error!("{}", e);
		exit(1);
	});

	modes::run(&mode, &opt).unwrap_or_else(|e| {
		error!("Unable to write result: {}", e);
		exit(1);
	});
}

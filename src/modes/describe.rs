use super::{emit, Options};
use mkprobe::tool::describe_tool;
use std::io::Error;

pub(super) fn main(opt: &Options) -> Result<(), Error> {
	emit(&describe_tool(), opt)
}

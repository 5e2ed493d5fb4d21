//! This library crate contains all the re-usable parts of `mkprobe`, a helper
//! that lets editors and other build front ends work with `Makefile`s
//! without understanding their syntax.
//!
//! # Operations
//!
//! - **Describing the tool**
//!
//!   [`describe_tool()`](tool::describe_tool) tells the host which build
//!   files this tool handles.
//!
//! - **Inspecting a makefile**
//!
//!   [`inspect()`](invoke::inspect) runs `make -p` on a makefile, and uses
//!   the [`dump`] module to find its targets and variables in make's
//!   database dump.
//!
//! - **Building a target**
//!
//!   [`build_command()`](command::build_command) gives the shell command
//!   that builds a target.
//!
//! Results serialize to JSON through `serde`.

pub mod command;
pub mod dump;
pub mod error;
pub mod invoke;
pub mod path;
pub mod tool;

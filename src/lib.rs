//! `compile`: pick the compiler for a set of source files and run it.
//!
//! ```text
//! raw args → classify → resolve targets → assemble → run
//! ```
//!
//! The targets file (`~/.compile/targets`) maps extensions to compiler
//! programs and default options; see [`config`].

pub mod args;
pub mod cli;
pub mod config;
mod error;
pub mod logging;
pub mod process;
pub mod target;

pub use error::Error;

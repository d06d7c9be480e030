//! Targets file: which compiler handles which extension.
//!
//! Format, one entry per line (blank lines and `#` comments ignored):
//!
//! ```text
//! ext program [option|>redirect]*
//! .c   gcc -Wall -o$project
//! .cpp g++ -std=c++17 >$project.log
//! ```

mod loader;
mod registry;

pub use loader::{default_targets_path, load, ConfigError, LoadedConfig, DEFAULT_ENTRIES};
pub use registry::{normalize_extension, CompilerEntry, ConfigRegistry, ParseResult};
